//! Lifetime-bound lookaside cache for profilekit profiles.
//!
//! Entries hold weak references only, so a profile vanishes from the cache as
//! soon as its last owner drops it. Lookups never return a dead profile.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod cache;
mod config;

pub use cache::{share, CacheStats, ProfileCache, SharedProfile};
pub use config::CacheConfig;
