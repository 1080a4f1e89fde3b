//! Background Tasks Module
//!
//! Contains the background task each cache runs for its lifetime.
//!
//! # Tasks
//! - Expiry sweep: removes entries older than the TTL once per sweep period

mod reaper;

pub use reaper::spawn_reaper;
