//! Pokecache - fetch URLs through a TTL look-aside cache
//!
//! Usage: `pokecache <url>...`
//!
//! Each URL is requested twice; the second request is answered from the
//! cache. Statistics are printed as JSON before exit.

use std::sync::Arc;

use anyhow::{bail, Context};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokecache::{Cache, CachedFetcher, Config, FetchOutcome};

/// Main entry point.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the cache (which starts its sweep task)
/// 4. Fetch every URL given on the command line through the cache
/// 5. Print statistics and shut the cache down
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokecache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let urls: Vec<String> = std::env::args().skip(1).collect();
    if urls.is_empty() {
        bail!("usage: pokecache <url>...");
    }

    let config = Config::from_env();
    info!(
        "Configuration loaded: ttl={}ms, strict_expiry={}, http_timeout={}s",
        config.ttl_ms, config.strict_expiry, config.http_timeout
    );

    let cache = Arc::new(Cache::with_config(config.cache_config()).context("creating cache")?);
    let fetcher = CachedFetcher::with_timeout(cache.clone(), config.http_timeout())
        .context("building HTTP client")?;

    for url in &urls {
        for _ in 0..2 {
            match fetcher.get_with_outcome(url).await {
                Ok((body, outcome)) => {
                    let source = match outcome {
                        FetchOutcome::Hit => "cache",
                        FetchOutcome::Miss => "network",
                    };
                    println!("{url}: {} bytes from {source}", body.len());
                }
                Err(e) => {
                    warn!(url = %url, error = %e, "Fetch failed");
                    break;
                }
            }
        }
    }

    let stats = cache.stats().await;
    println!("{}", serde_json::to_string_pretty(&stats)?);

    drop(fetcher);
    match Arc::try_unwrap(cache) {
        Ok(cache) => cache.shutdown().await,
        Err(_) => warn!("Cache still shared at exit; sweep task stops when it is dropped"),
    }

    info!("Shutdown complete");
    Ok(())
}
