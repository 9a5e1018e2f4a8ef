//! Background Tasks Module
//!
//! Contains the two periodic tasks started by the client.
//!
//! # Tasks
//! - Cache sweep: removes expired problems on a fixed period
//! - Session refresh: renews the anti-forgery token and reconciles the
//!   identifier index on a fixed period
//!
//! Each task owns its own timer and stops when the shared
//! [`CancellationToken`](tokio_util::sync::CancellationToken) is cancelled.

mod refresh;
mod sweeper;

pub(crate) use refresh::spawn_refresh_task;
pub use sweeper::spawn_sweep_task;
