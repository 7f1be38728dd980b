// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-process configuration cache adapter.
//!
//! This module provides [`MemoryCache`], a plain map-backed implementation of
//! the [`ConfigCache`] port. Entries live for the lifetime of the cache
//! instance; the map is the whole story — no eviction, no TTL, no file-change
//! invalidation.

use crate::domain::Config;
use crate::ports::ConfigCache;
use std::collections::HashMap;
use std::sync::Arc;

/// A map-backed configuration cache.
///
/// One instance can be shared between loaders (callers decide), but the cache
/// itself takes no lock around the loader's check-then-populate sequence:
/// concurrent loads of the same signature may both parse and the later insert
/// wins. Callers needing at-most-once parsing must serialize loads.
///
/// # Examples
///
/// ```
/// use groupcfg::adapters::MemoryCache;
/// use groupcfg::service::ConfigLoader;
///
/// let loader = ConfigLoader::with_cache(Box::new(MemoryCache::new()));
/// ```
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: HashMap<String, Arc<Config>>,
}

impl MemoryCache {
    /// Creates a new empty cache.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Returns the number of cached configurations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every cached entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl ConfigCache for MemoryCache {
    fn lookup(&self, signature: &str) -> Option<Arc<Config>> {
        self.entries.get(signature).cloned()
    }

    fn insert(&mut self, signature: &str, config: Arc<Config>) {
        self.entries.insert(signature.to_string(), config);
    }
}
