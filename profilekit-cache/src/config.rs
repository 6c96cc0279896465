//! Cache configuration.

use serde::{Deserialize, Serialize};

/// Cache configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Number of entries to preallocate
    pub initial_capacity: usize,
    /// Whether `put` sweeps dead entries once `purge_threshold` is reached
    pub purge_on_insert: bool,
    /// Entry count at which `put` sweeps dead entries
    pub purge_threshold: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
            purge_on_insert: true,
            purge_threshold: 256,
        }
    }
}

impl CacheConfig {
    /// Reads overrides from the environment, falling back to the defaults.
    ///
    /// - `PROFILE_CACHE_CAPACITY`
    /// - `PROFILE_CACHE_PURGE_ON_INSERT` (`false`/`0` disables)
    /// - `PROFILE_CACHE_PURGE_THRESHOLD`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            initial_capacity: lookup("PROFILE_CACHE_CAPACITY")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.initial_capacity),
            purge_on_insert: lookup("PROFILE_CACHE_PURGE_ON_INSERT")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(defaults.purge_on_insert),
            purge_threshold: lookup("PROFILE_CACHE_PURGE_THRESHOLD")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.purge_threshold),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        assert_eq!(CacheConfig::from_lookup(lookup_from(&[])), CacheConfig::default());
    }

    #[test]
    fn test_environment_overrides() {
        let config = CacheConfig::from_lookup(lookup_from(&[
            ("PROFILE_CACHE_CAPACITY", "8"),
            ("PROFILE_CACHE_PURGE_ON_INSERT", "0"),
            ("PROFILE_CACHE_PURGE_THRESHOLD", " 32 "),
        ]));
        assert_eq!(config.initial_capacity, 8);
        assert!(!config.purge_on_insert);
        assert_eq!(config.purge_threshold, 32);
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let config = CacheConfig::from_lookup(lookup_from(&[
            ("PROFILE_CACHE_CAPACITY", "lots"),
            ("PROFILE_CACHE_PURGE_ON_INSERT", "yes"),
        ]));
        assert_eq!(config.initial_capacity, 64);
        assert!(config.purge_on_insert);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: CacheConfig = serde_json::from_str(r#"{"purge_threshold": 4}"#).unwrap();
        assert_eq!(config.purge_threshold, 4);
        assert_eq!(config.initial_capacity, 64);
        assert!(config.purge_on_insert);
    }
}
