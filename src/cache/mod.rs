//! Cache Module
//!
//! Provides the in-memory problem cache with fixed-lifetime entries and
//! sweep-based eviction.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::{CacheCounters, CacheStats};
pub use store::TtlCache;
