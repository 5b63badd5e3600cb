// src/cache/mod.rs
// =============================================================================
// File-based cache for downloaded pages and API responses.
//
// Submodules:
// - key: what a cache entry is called (kind + identifier, hashed)
// - store: reading and writing those entries in one directory
// =============================================================================

mod key;
mod store;

pub use key::{CacheKey, ResourceKind};
pub use store::FileCache;
