//! Session Refresh Task
//!
//! Background task that keeps the anti-forgery token and the identifier
//! index current.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::client::ClientInner;

/// Spawns the refresh loop.
///
/// The first tick fires immediately so the session is usable right after
/// start, then once per `period`. A tick in flight is abandoned on
/// cancellation; token and index are only ever replaced whole, so nothing
/// is left half-written. The index is cleared before the task exits.
pub(crate) fn spawn_refresh_task(
    client: Arc<ClientInner>,
    period: Duration,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            "Starting session refresh task with interval of {} seconds",
            period.as_secs()
        );

        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;

                _ = shutdown.cancelled() => break,

                _ = ticker.tick() => {
                    tokio::select! {
                        biased;

                        _ = shutdown.cancelled() => break,
                        _ = client.refresh_session() => {}
                    }
                }
            }
        }

        client.session.clear_index().await;
        info!("Session refresh task stopped, problem index cleared");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::CatalogClient;
    use crate::config::Config;
    use crate::test_support::{
        landing_response, list_response, total_response, Route, ScriptedTransport,
    };

    #[tokio::test(start_paused = true)]
    async fn test_failed_tick_does_not_end_loop() {
        let transport = Arc::new(ScriptedTransport::new());
        let client = CatalogClient::with_transport(Config::default(), transport.clone());

        // No landing response yet: the first tick fails
        client.run().await;
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(transport.count(Route::Landing), 1);
        assert_eq!(client.session().index_len().await, None);

        transport.respond(Route::Landing, landing_response("tok"));
        transport.respond(Route::TotalCount, total_response(1));
        transport.respond(
            Route::ProblemList,
            list_response(&[(1, "Two Sum", "two-sum")]),
        );

        tokio::time::sleep(client.config().refresh_interval).await;
        assert_eq!(transport.count(Route::Landing), 2);
        assert_eq!(client.session().index_len().await, Some(1));

        client.stop().await;
        assert_eq!(client.session().index_len().await, None);
    }
}
