//! Expiry Sweep Task
//!
//! Background task that periodically removes entries older than the TTL.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns the sweep loop for one cache.
///
/// Every `interval` the task locks the store, removes expired entries and
/// releases the lock before waiting again. It exits when `shutdown` fires or
/// its sender is dropped, so a discarded cache never leaves the task behind.
///
/// # Arguments
/// * `store` - Shared store guarded by the cache's single mutex
/// * `interval` - Sweep period; must be non-zero
/// * `shutdown` - Stop signal owned by the cache handle
///
/// # Example
/// ```ignore
/// let (tx, rx) = oneshot::channel();
/// let handle = spawn_reaper(store.clone(), Duration::from_secs(10), rx);
/// // Later:
/// let _ = tx.send(());
/// handle.await?;
/// ```
pub fn spawn_reaper(
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    mut shutdown: oneshot::Receiver<()>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(interval_ms = interval.as_millis() as u64, "Starting expiry sweep task");

        let mut ticker = time::interval_at(Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    debug!("Expiry sweep task stopping");
                    break;
                }
                _ = ticker.tick() => {
                    let removed = {
                        let mut guard = store.lock().await;
                        guard.reap_expired()
                    };

                    if removed > 0 {
                        info!("Expiry sweep: removed {} expired entries", removed);
                    } else {
                        debug!("Expiry sweep: no expired entries found");
                    }
                }
            }
        }
    })
}
