//! Cache Entry Module
//!
//! Defines the structure for individual cache entries and their age.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A stored value together with the moment it was inserted.
///
/// Entries are immutable; re-adding a key replaces the whole entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored bytes
    pub value: Vec<u8>,
    /// Insertion time on the monotonic clock
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Time elapsed since the entry was inserted.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Expired ==
    /// Checks whether the entry is older than `ttl`.
    ///
    /// Boundary condition: an entry whose age is exactly `ttl` is still live;
    /// it must strictly exceed the TTL to be expired.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }
}
