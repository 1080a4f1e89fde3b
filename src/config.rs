//! Configuration Module
//!
//! Loads cache and fetcher settings from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::{CacheConfig, ExpiryMode};

/// Runtime configuration.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Entry lifetime and sweep period in milliseconds
    pub ttl_ms: u64,
    /// Filter stale entries on lookup instead of waiting for the sweep
    pub strict_expiry: bool,
    /// Per-request HTTP timeout in seconds
    pub http_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_MS` - Entry TTL in milliseconds (default: 10000)
    /// - `CACHE_STRICT_EXPIRY` - `true`/`1` to filter stale entries on lookup (default: false)
    /// - `HTTP_TIMEOUT_SECS` - HTTP request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ttl_ms: env::var("CACHE_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.ttl_ms),
            strict_expiry: env::var("CACHE_STRICT_EXPIRY")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.strict_expiry),
            http_timeout: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.http_timeout),
        }
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }

    /// Cache construction parameters derived from this config.
    pub fn cache_config(&self) -> CacheConfig {
        let mode = if self.strict_expiry {
            ExpiryMode::Strict
        } else {
            ExpiryMode::SweepOnly
        };
        CacheConfig::new(self.ttl()).with_expiry_mode(mode)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ttl_ms: 10_000,
            strict_expiry: false,
            http_timeout: 30,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
