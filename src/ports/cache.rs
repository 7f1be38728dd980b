// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration cache trait definition.
//!
//! This module defines the `ConfigCache` port: the interface the loader uses
//! to memoize fully parsed configurations by their load signature. The cache
//! is an explicit collaborator injected into the loader — there is no
//! process-global cache — so callers decide whether to share one instance
//! across loaders or keep them separate.

use crate::domain::Config;
use std::sync::Arc;

/// A store of parsed configurations keyed by load signature.
///
/// A signature identifies one `(path, overrides)` combination; see
/// [`cache_signature`](crate::service::cache_signature) for how it is built.
/// Entries live until the cache itself is dropped: there is no eviction, no
/// TTL, and no invalidation when the underlying file changes on disk.
///
/// Implementations are not required to synchronize the check-then-populate
/// sequence; callers that share a cache across threads must serialize loads
/// themselves or tolerate the same file being parsed twice.
///
/// # Examples
///
/// ```
/// use groupcfg::domain::Config;
/// use groupcfg::ports::ConfigCache;
/// use std::sync::Arc;
///
/// struct SingleSlot(Option<(String, Arc<Config>)>);
///
/// impl ConfigCache for SingleSlot {
///     fn lookup(&self, signature: &str) -> Option<Arc<Config>> {
///         self.0
///             .as_ref()
///             .filter(|(held, _)| held.as_str() == signature)
///             .map(|(_, config)| Arc::clone(config))
///     }
///
///     fn insert(&mut self, signature: &str, config: Arc<Config>) {
///         self.0 = Some((signature.to_string(), config));
///     }
/// }
/// ```
pub trait ConfigCache {
    /// Returns the configuration cached under `signature`, if any.
    fn lookup(&self, signature: &str) -> Option<Arc<Config>>;

    /// Stores `config` under `signature`, replacing any previous entry.
    fn insert(&mut self, signature: &str, config: Arc<Config>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapCache {
        entries: HashMap<String, Arc<Config>>,
    }

    impl ConfigCache for MapCache {
        fn lookup(&self, signature: &str) -> Option<Arc<Config>> {
            self.entries.get(signature).cloned()
        }

        fn insert(&mut self, signature: &str, config: Arc<Config>) {
            self.entries.insert(signature.to_string(), config);
        }
    }

    #[test]
    fn test_lookup_miss() {
        let cache = MapCache {
            entries: HashMap::new(),
        };
        assert!(cache.lookup("unknown").is_none());
    }

    #[test]
    fn test_insert_then_lookup() {
        let mut cache = MapCache {
            entries: HashMap::new(),
        };
        let config = Arc::new(Config::default());
        cache.insert("sig", Arc::clone(&config));

        let found = cache.lookup("sig").unwrap();
        assert!(Arc::ptr_eq(&found, &config));
    }

    #[test]
    fn test_insert_replaces_entry() {
        let mut cache = MapCache {
            entries: HashMap::new(),
        };
        let first = Arc::new(Config::default());
        let second = Arc::new(Config::default());
        cache.insert("sig", Arc::clone(&first));
        cache.insert("sig", Arc::clone(&second));

        let found = cache.lookup("sig").unwrap();
        assert!(Arc::ptr_eq(&found, &second));
    }
}
