// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` port: the interface between the
//! loader (which owns path resolution and file I/O) and a concrete format
//! parser (which turns file content plus the caller's override tags into a
//! grouped store).

use crate::domain::{Config, Result};

/// A trait for parsing configuration file content.
///
/// A parser consumes the full text of a configuration file in one pass and
/// produces an immutable [`Config`]. Override resolution happens here, at
/// parse time: the `overrides` list selects which environment-tagged variant
/// of a key survives, and nothing about overrides leaks into lookup.
///
/// Parsing is fail-fast. On the first malformed line the parser returns an
/// error and no partial store is ever produced.
///
/// # Examples
///
/// ```
/// use groupcfg::domain::{Config, Result};
/// use groupcfg::ports::ConfigParser;
///
/// struct NullParser;
///
/// impl ConfigParser for NullParser {
///     fn parse(&self, _content: &str, _overrides: &[String]) -> Result<Config> {
///         Ok(Config::default())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["null"]
///     }
/// }
/// ```
pub trait ConfigParser {
    /// Parses file content into a grouped configuration store.
    ///
    /// # Arguments
    ///
    /// * `content` - The raw text of the configuration file
    /// * `overrides` - Environment tags selecting among tagged key variants;
    ///   an empty slice disables override resolution
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - The complete parsed store
    /// * `Err(ConfigError)` - The first failure encountered; the whole parse
    ///   is abandoned
    fn parse(&self, content: &str, overrides: &[String]) -> Result<Config>;

    /// Returns the file extensions this parser is meant for.
    ///
    /// Informational only; the loader does not dispatch on extension.
    fn supported_extensions(&self) -> &[&str];
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestParser;

    impl ConfigParser for TestParser {
        fn parse(&self, _content: &str, _overrides: &[String]) -> Result<Config> {
            Ok(Config::default())
        }

        fn supported_extensions(&self) -> &[&str] {
            &["test"]
        }
    }

    #[test]
    fn test_parser_object_safety() {
        let parser: Box<dyn ConfigParser> = Box::new(TestParser);
        let config = parser.parse("", &[]).unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn test_parser_supported_extensions() {
        let parser = TestParser;
        assert_eq!(parser.supported_extensions(), &["test"]);
    }
}
