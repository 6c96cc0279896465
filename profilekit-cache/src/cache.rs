//! Weak-reference cache for profiles.
//!
//! Owners keep profiles alive through a [`SharedProfile`]; the cache only
//! stores weak handles to it. A dead entry is dropped the next time `get`
//! touches its key, or by the sweep `put` runs once the map grows past its
//! next sweep mark.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, OnceLock, Weak};

use parking_lot::{Mutex, RwLock};
use tracing::{debug, trace};

use profilekit_core::{Profile, ProfileId};

use crate::config::CacheConfig;

/// A profile shared between its owners and the cache.
///
/// Writes take the write lock and still go through the profile's validated
/// setters, so a cached profile can be updated in place.
pub type SharedProfile = Arc<RwLock<Profile>>;

/// Wraps `profile` so it can be shared and registered in a [`ProfileCache`].
pub fn share(profile: Profile) -> SharedProfile {
    Arc::new(RwLock::new(profile))
}

struct Entries<K> {
    map: HashMap<K, Weak<RwLock<Profile>>>,
    /// Map size at which the next insert sweeps dead entries
    next_sweep: usize,
}

impl<K: Eq + Hash> Entries<K> {
    fn retain_live(&mut self) -> usize {
        let before = self.map.len();
        self.map.retain(|_, weak| weak.strong_count() > 0);
        before - self.map.len()
    }
}

/// Lookaside cache mapping identifiers to profiles owned elsewhere.
///
/// Never extends a profile's lifetime. All bookkeeping happens under a single
/// lock, so the cache can be shared across threads. The cache never locks a
/// profile, so it is safe to call while holding a profile's write guard.
pub struct ProfileCache<K = ProfileId> {
    entries: Mutex<Entries<K>>,
    config: CacheConfig,
}

impl<K> ProfileCache<K>
where
    K: Eq + Hash + fmt::Debug,
{
    /// Creates a new cache with default configuration.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates a cache with custom configuration.
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            entries: Mutex::new(Entries {
                map: HashMap::with_capacity(config.initial_capacity),
                next_sweep: config.purge_threshold,
            }),
            config,
        }
    }

    /// The configuration this cache was built with.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Registers `profile` under `key`, replacing any existing entry.
    pub fn put(&self, key: K, profile: &SharedProfile) {
        let mut entries = self.entries.lock();

        if self.config.purge_on_insert && entries.map.len() >= entries.next_sweep {
            let purged = entries.retain_live();
            // Live entries alone may exceed the threshold; wait for the map to
            // double before sweeping again.
            entries.next_sweep = self.config.purge_threshold.max(entries.map.len() * 2);
            if purged > 0 {
                debug!(
                    purged,
                    remaining = entries.map.len(),
                    next_sweep = entries.next_sweep,
                    "Swept dead profile entries"
                );
            }
        }

        trace!(?key, "Caching profile");
        entries.map.insert(key, Arc::downgrade(profile));
    }

    /// Returns the live profile registered under `key`.
    ///
    /// `None` if nothing was registered or the profile has since been dropped;
    /// in the latter case the dead entry is removed.
    pub fn get(&self, key: &K) -> Option<SharedProfile> {
        let mut entries = self.entries.lock();
        let profile = entries.map.get(key)?.upgrade();
        if profile.is_none() {
            entries.map.remove(key);
            debug!(?key, "Evicted dead profile entry");
        }
        profile
    }

    /// Removes the entry for `key`, returning the profile if it was still alive.
    pub fn remove(&self, key: &K) -> Option<SharedProfile> {
        self.entries.lock().map.remove(key).and_then(|weak| weak.upgrade())
    }

    /// Returns true if `key` maps to a live profile.
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Clears all entries. Profiles themselves are unaffected.
    pub fn clear(&self) {
        let mut entries = self.entries.lock();
        entries.map.clear();
        entries.next_sweep = self.config.purge_threshold;
    }

    /// Removes every entry whose profile has been dropped.
    ///
    /// Returns the number of entries removed.
    pub fn purge(&self) -> usize {
        let mut entries = self.entries.lock();
        let purged = entries.retain_live();
        entries.next_sweep = self.config.purge_threshold.max(entries.map.len() * 2);
        debug!(purged, remaining = entries.map.len(), "Purged dead profile entries");
        purged
    }

    /// Returns the number of entries, including dead ones not yet purged.
    pub fn len(&self) -> usize {
        self.entries.lock().map.len()
    }

    /// Returns true if the cache holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().map.is_empty()
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> CacheStats {
        let entries = self.entries.lock();
        let dead = entries
            .map
            .values()
            .filter(|weak| weak.strong_count() == 0)
            .count();
        CacheStats {
            total_entries: entries.map.len(),
            dead_entries: dead,
            live_entries: entries.map.len() - dead,
            purge_threshold: self.config.purge_threshold,
            next_sweep_at: entries.next_sweep,
        }
    }
}

impl ProfileCache<ProfileId> {
    /// The process-wide cache, created empty on first use.
    ///
    /// Configuration is read from the environment once, see
    /// [`CacheConfig::from_env`].
    pub fn global() -> &'static ProfileCache {
        static GLOBAL: OnceLock<ProfileCache> = OnceLock::new();
        GLOBAL.get_or_init(|| ProfileCache::with_config(CacheConfig::from_env()))
    }

    /// Registers `profile` under its own [`ProfileId`] and returns that id.
    ///
    /// Takes the profile's read lock briefly to fetch the id.
    pub fn register(&self, profile: &SharedProfile) -> ProfileId {
        let id = profile.read().id();
        self.put(id, profile);
        id
    }
}

impl<K> Default for ProfileCache<K>
where
    K: Eq + Hash + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for ProfileCache<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileCache")
            .field("entries", &self.entries.lock().map.len())
            .field("config", &self.config)
            .finish()
    }
}

/// Cache statistics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheStats {
    /// Entries currently in the map
    pub total_entries: usize,
    /// Entries whose profile is gone but which have not been purged yet
    pub dead_entries: usize,
    /// Entries whose profile is still alive
    pub live_entries: usize,
    /// Configured minimum map size for insert-time sweeps
    pub purge_threshold: usize,
    /// Map size at which the next insert sweeps dead entries
    pub next_sweep_at: usize,
}
