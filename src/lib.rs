//! Pokecache - A time-bounded in-memory look-aside cache
//!
//! Memoizes expensive idempotent lookups (network responses keyed by URL)
//! with a fixed TTL and a background expiry sweep.

pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod tasks;

pub use cache::{Cache, CacheConfig, ExpiryMode};
pub use config::Config;
pub use error::{CacheError, Result};
pub use fetch::{CachedFetcher, FetchOutcome};
