// Cache module for the computed statistics.
// Holds the last aggregate in process memory; nothing is written to disk.

pub mod store;

pub use store::{CacheEntry, DEFAULT_TTL, RefreshCache, RefreshError};
