//! Cache Module
//!
//! Provides an in-memory key/value cache whose entries expire a fixed TTL
//! after insertion.

mod entry;
mod handle;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use handle::{Cache, CacheConfig};
pub use stats::CacheStats;
pub use store::{CacheStore, ExpiryMode};
