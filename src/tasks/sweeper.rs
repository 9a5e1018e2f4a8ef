//! Cache Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cache::TtlCache;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The first sweep runs one `period` after spawning. Each sweep takes the
/// cache's write lock for a full pass. The task exits once `shutdown` is
/// cancelled; await the returned handle to know it has finished.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(TtlCache::new(Duration::from_secs(3600)));
/// let shutdown = CancellationToken::new();
/// let handle = spawn_sweep_task(cache.clone(), Duration::from_secs(60), shutdown.clone());
/// // Later, during shutdown:
/// shutdown.cancel();
/// handle.await?;
/// ```
pub fn spawn_sweep_task(
    cache: Arc<TtlCache>,
    period: Duration,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            "Starting cache sweep task with interval of {} seconds",
            period.as_secs()
        );

        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;

                _ = shutdown.cancelled() => break,

                _ = ticker.tick() => {
                    let removed = cache.sweep_expired().await;
                    if removed > 0 {
                        info!("Cache sweep: removed {} expired problems", removed);
                    } else {
                        debug!("Cache sweep: no expired problems found");
                    }
                }
            }
        }

        info!("Cache sweep task stopped");
    })
}
