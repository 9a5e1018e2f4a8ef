//! Problem Catalog - a caching client for a remote programming-problem catalog
//!
//! Resolves problems by slug, numeric ID, display title, or as today's
//! featured problem. Fetched problems are cached with a TTL; background
//! tasks sweep the cache and keep the session token and ID/title index
//! fresh.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod graphql;
pub mod models;
pub mod session;
pub mod tasks;
pub mod transport;

#[cfg(test)]
mod test_support;

pub use api::AppState;
pub use client::{CatalogClient, IndexRefresh, TokenRefresh};
pub use config::Config;
pub use error::{ApiError, CatalogError};
pub use models::Problem;
pub use tasks::spawn_sweep_task;
pub use transport::{ReqwestTransport, Transport};
