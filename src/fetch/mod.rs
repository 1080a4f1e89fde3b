//! Fetch Module
//!
//! Look-aside HTTP helper that consults a [`Cache`](crate::cache::Cache)
//! before going to the network.

mod fetcher;

pub use fetcher::{CachedFetcher, FetchOutcome};
