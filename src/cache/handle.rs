//! Cache Handle Module
//!
//! The shareable TTL cache: a mutex-guarded store plus its sweep task.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::cache::{CacheStats, CacheStore, ExpiryMode};
use crate::error::{CacheError, Result};
use crate::tasks::spawn_reaper;

// == Cache Config ==
/// Construction parameters for a [`Cache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Age beyond which an entry is stale; must be positive
    pub ttl: Duration,
    /// Sweep period; `None` sweeps once per TTL
    pub sweep_interval: Option<Duration>,
    /// Whether lookups also filter stale entries
    pub expiry_mode: ExpiryMode,
}

impl CacheConfig {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sweep_interval: None,
            expiry_mode: ExpiryMode::default(),
        }
    }

    pub fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = Some(interval);
        self
    }

    pub fn with_expiry_mode(mut self, mode: ExpiryMode) -> Self {
        self.expiry_mode = mode;
        self
    }

    /// Effective sweep period.
    pub fn sweep_interval(&self) -> Duration {
        self.sweep_interval.unwrap_or(self.ttl)
    }
}

// == Cache ==
/// A time-bounded key/value cache with a background expiry sweep.
///
/// All operations take the same lock for the duration of an in-memory map
/// operation only. Share it between callers with `Arc<Cache>`.
///
/// The sweep task lives exactly as long as the handle: call
/// [`Cache::shutdown`] to stop it and wait for it, or drop the handle to let
/// it exit on its own.
#[derive(Debug)]
pub struct Cache {
    store: Arc<Mutex<CacheStore>>,
    ttl: Duration,
    shutdown_tx: Option<oneshot::Sender<()>>,
    reaper: Option<JoinHandle<()>>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache whose entries expire after `ttl` and starts its
    /// sweep task with the same period.
    ///
    /// Must be called from within a tokio runtime. A zero `ttl` is rejected.
    pub fn new(ttl: Duration) -> Result<Self> {
        Self::with_config(CacheConfig::new(ttl))
    }

    /// Creates a cache from explicit configuration.
    pub fn with_config(config: CacheConfig) -> Result<Self> {
        if config.ttl.is_zero() {
            return Err(CacheError::InvalidTtl("ttl must be positive".to_string()));
        }
        let interval = config.sweep_interval();
        if interval.is_zero() {
            return Err(CacheError::InvalidTtl(
                "sweep interval must be positive".to_string(),
            ));
        }

        let store = Arc::new(Mutex::new(CacheStore::new(config.ttl, config.expiry_mode)));
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let reaper = spawn_reaper(store.clone(), interval, shutdown_rx);

        debug!(
            ttl_ms = config.ttl.as_millis() as u64,
            mode = ?config.expiry_mode,
            "Cache created"
        );

        Ok(Self {
            store,
            ttl: config.ttl,
            shutdown_tx: Some(shutdown_tx),
            reaper: Some(reaper),
        })
    }

    // == Add ==
    /// Inserts or replaces the value for `key`, resetting its age.
    pub async fn add(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let key = key.into();
        let value = value.into();
        self.store.lock().await.add(key, value);
    }

    // == Get ==
    /// Returns the value stored under `key`, or `None` if it was never added
    /// or has been swept.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.lock().await.get(key)
    }

    /// Returns a snapshot of the cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.lock().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Shutdown ==
    /// Stops the sweep task and waits for it to finish.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            // The receiver is gone only if the task already ended.
            let _ = tx.send(());
        }
        if let Some(reaper) = self.reaper.take() {
            if let Err(e) = reaper.await {
                warn!(error = %e, "Expiry sweep task ended abnormally");
            }
        }
        debug!("Cache shut down");
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        // Dropping the sender wakes the task, which then exits on its own.
        if self.reaper.is_some() {
            debug!("Cache dropped without shutdown; sweep task will exit");
        }
    }
}
