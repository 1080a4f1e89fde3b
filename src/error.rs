//! Error types for the cache
//!
//! Provides unified error handling using thiserror. A cache miss is not an
//! error; lookups return `Option` instead.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache and its look-aside fetcher.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Cache constructed with a zero TTL or sweep interval
    #[error("Invalid TTL: {0}")]
    InvalidTtl(String),

    /// Transport-level failure while fetching a missed key
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Unexpected status {status} for {url}")]
    Status { status: u16, url: String },
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
