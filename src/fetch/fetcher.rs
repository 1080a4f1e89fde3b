//! Cached Fetcher
//!
//! Response bodies keyed by full request URL.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use crate::cache::Cache;
use crate::error::{CacheError, Result};

/// Where a fetched body came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Hit,
    Miss,
}

/// HTTP GET helper backed by a shared cache.
///
/// Concurrent misses on the same URL are not coalesced; each performs its
/// own request and the last body written wins.
#[derive(Debug, Clone)]
pub struct CachedFetcher {
    client: Client,
    cache: Arc<Cache>,
}

impl CachedFetcher {
    /// Wraps an existing client and cache.
    pub fn new(client: Client, cache: Arc<Cache>) -> Self {
        Self { client, cache }
    }

    /// Builds a client with the given request timeout.
    pub fn with_timeout(cache: Arc<Cache>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::new(client, cache))
    }

    pub fn cache(&self) -> &Arc<Cache> {
        &self.cache
    }

    /// Returns the body for `url`, from the cache if present.
    pub async fn get(&self, url: &str) -> Result<Vec<u8>> {
        self.get_with_outcome(url).await.map(|(body, _)| body)
    }

    /// Like [`get`](Self::get), also reporting whether the cache answered.
    pub async fn get_with_outcome(&self, url: &str) -> Result<(Vec<u8>, FetchOutcome)> {
        if let Some(body) = self.cache.get(url).await {
            debug!(url, bytes = body.len(), "Cache hit");
            return Ok((body, FetchOutcome::Hit));
        }

        debug!(url, "Cache miss, fetching");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CacheError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?.to_vec();
        info!(url, bytes = body.len(), "Fetched and cached response");
        self.cache.add(url, body.clone()).await;

        Ok((body, FetchOutcome::Miss))
    }
}
