//! # Driven Ports (Outbound)
//!
//! Interfaces the registry depends on. Adapters implement these; the
//! registry never reaches for the environment directly.

/// Time source for record creation timestamps.
pub trait Clock: Send + Sync {
    /// Current unix timestamp in seconds.
    fn unix_timestamp(&self) -> u64;
}
