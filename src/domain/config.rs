// SPDX-License-Identifier: MIT OR Apache-2.0

//! The parsed configuration store.
//!
//! A [`Config`] is the grouped table emitted by a single parse pass: a map of
//! group names to maps of property keys, both case-sensitive. It is built
//! once, atomically, and carries no update API. Lookup is total — it never
//! fails and never panics, whatever the key looks like.

use crate::domain::property::{Property, PropertyValue};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Delimiter between the group segment and the key segment of a lookup key.
const KEY_DELIMITER: char = '.';

/// A map of property keys to properties within one group.
pub type PropertyGroup = HashMap<String, Property>;

/// An immutable, grouped configuration store.
///
/// Values are queried with a two-level dotted key, `group.key`. Both lookup
/// levels are exact and case-sensitive; insertion order is irrelevant.
///
/// # Examples
///
/// ```no_run
/// use groupcfg::prelude::*;
///
/// # fn main() -> groupcfg::domain::errors::Result<()> {
/// let config = load_config("/etc/myapp/app.properties", &[])?;
/// if let Some(value) = config.get("ftp.path") {
///     println!("upload path: {}", value);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    groups: HashMap<String, PropertyGroup>,
}

impl Config {
    /// Wraps an already-built grouped table.
    ///
    /// This is the constructor used by parser implementations; application
    /// code normally obtains a `Config` from the loader instead.
    pub fn from_groups(groups: HashMap<String, PropertyGroup>) -> Self {
        Self { groups }
    }

    /// Looks up a value by dotted `group.key`.
    ///
    /// Returns `None` — never an error — when the key is blank, contains no
    /// `.`, splits into anything other than exactly two segments, or when
    /// either the group or the inner key is unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use groupcfg::domain::config::Config;
    ///
    /// let config = Config::default();
    /// assert!(config.get("").is_none());
    /// assert!(config.get("nodot").is_none());
    /// assert!(config.get("a.b.c").is_none());
    /// assert!(config.get("missing.key").is_none());
    /// ```
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.get_property(key).map(Property::value)
    }

    /// Looks up a whole property (key plus typed value) by dotted `group.key`.
    ///
    /// Same total, never-fails contract as [`Config::get`].
    pub fn get_property(&self, key: &str) -> Option<&Property> {
        if key.trim().is_empty() || !key.contains(KEY_DELIMITER) {
            return None;
        }
        let segments: Vec<&str> = key.split(KEY_DELIMITER).collect();
        if segments.len() != 2 {
            return None;
        }
        self.groups.get(segments[0])?.get(segments[1])
    }

    /// Returns `true` when a dotted `group.key` resolves to a property.
    pub fn contains(&self, key: &str) -> bool {
        self.get_property(key).is_some()
    }

    /// Returns the properties of one group, if the group exists.
    pub fn group(&self, name: &str) -> Option<&PropertyGroup> {
        self.groups.get(name)
    }

    /// Iterates over the group names in the store, in no particular order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Returns the total number of properties across all groups.
    pub fn len(&self) -> usize {
        self.groups.values().map(PropertyGroup::len).sum()
    }

    /// Returns `true` when the store holds no properties at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
