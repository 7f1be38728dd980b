// SPDX-License-Identifier: MIT OR Apache-2.0

//! Grouped-properties file format parser adapter.
//!
//! This module implements [`ConfigParser`] for the flat, line-oriented
//! grouped-properties format:
//!
//! ```text
//! ; a comment line
//! [ftp]
//! path=/tmp/                       ; inline comments are stripped
//! path<production>=/srv/var/tmp/
//! params=array,of,values
//! ```
//!
//! A `[group]` header opens a namespace for the property lines after it.
//! A key may embed an override tag in angle brackets; when the caller's
//! override list contains a matching tag the key is rewritten to its base
//! form, and when no supplied tag matches the line is dropped silently.
//! The silent drop is the contract, not an oversight: it is how several
//! environment-specific variants of one key coexist in a single file with
//! only the active variant materialized.

use crate::domain::{Config, ConfigError, Property, PropertyGroup, Result};
use crate::ports::ConfigParser;
use std::collections::HashMap;

/// Marker opening a comment, as a full line or as a value suffix.
const COMMENT_TAG: char = ';';

/// Marker opening a group header line.
const GROUP_START_TAG: char = '[';

/// Marker closing a group header line.
const GROUP_END_TAG: char = ']';

/// Delimiter between a property key and its value.
const PROPERTY_TOKENIZER: char = '=';

/// Marker opening an override tag inside a key.
const OVERRIDE_START_TAG: char = '<';

/// Marker closing an override tag inside a key.
const OVERRIDE_END_TAG: char = '>';

/// Accumulator threaded through the line fold.
///
/// `current_group` is the one piece of carried state: the namespace that
/// property lines bind to until the next group header replaces it.
#[derive(Debug, Default)]
struct ParseState {
    current_group: Option<String>,
    groups: HashMap<String, PropertyGroup>,
}

/// Parser for the grouped-properties format.
///
/// The whole file is consumed in a single pass as a fold over its lines;
/// nothing is queryable until every line has been folded in. The first
/// malformed line aborts the parse.
///
/// # Examples
///
/// ```
/// use groupcfg::adapters::PropertiesParser;
/// use groupcfg::domain::PropertyValue;
/// use groupcfg::ports::ConfigParser;
///
/// let parser = PropertiesParser::new();
/// let config = parser
///     .parse("[ftp]\npath=/tmp/\nenabled=false\n", &[])
///     .unwrap();
/// assert_eq!(config.get("ftp.enabled"), Some(&PropertyValue::Boolean(false)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertiesParser;

impl PropertiesParser {
    /// Creates a new grouped-properties parser.
    pub fn new() -> Self {
        PropertiesParser
    }

    /// Folds one trimmed input line into the accumulator.
    fn step(mut state: ParseState, line: &str, overrides: &[String]) -> Result<ParseState> {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT_TAG) {
            return Ok(state);
        }

        if line.starts_with(GROUP_START_TAG) && line.ends_with(GROUP_END_TAG) {
            // inner text taken verbatim; re-declaring a group merges into it
            state.current_group = Some(line[1..line.len() - 1].to_string());
            return Ok(state);
        }

        let group = match state
            .current_group
            .as_deref()
            .filter(|group| !group.trim().is_empty())
        {
            Some(group) => group.to_string(),
            None => {
                tracing::error!(line, "property line without a group header");
                return Err(ConfigError::PropertyGroupMissing {
                    line: line.to_string(),
                });
            }
        };

        if !line.contains(PROPERTY_TOKENIZER) {
            tracing::error!(line, "line is neither a group, comment nor property");
            return Err(ConfigError::InvalidPropertyDefinition {
                line: line.to_string(),
            });
        }

        let tokens = split_property_line(line);
        if tokens.len() != 2 {
            tracing::error!(line, "expected exactly one key=value pair");
            return Err(ConfigError::InvalidPropertyDefinition {
                line: line.to_string(),
            });
        }

        let raw_key = tokens[0];
        let mut raw_value = tokens[1];

        // inline comments are stripped from the value, never from the key
        if let Some(comment) = raw_value.find(COMMENT_TAG) {
            raw_value = &raw_value[..comment];
        }

        let mut key = raw_key.to_string();
        if override_applicable(&key, overrides) {
            for tag in overrides {
                if key.contains(tag.as_str()) {
                    if let Some(marker) = key.find(OVERRIDE_START_TAG) {
                        key.truncate(marker);
                    }
                }
            }
        }

        // a key still carrying the tag marker matched none of the supplied
        // overrides and is dropped without error
        if !key.contains(OVERRIDE_START_TAG) {
            let key = key.trim().to_string();
            let value = raw_value.trim();
            let property = Property::new(&key, Some(value))?;
            state.groups.entry(group).or_default().insert(key, property);
        }

        Ok(state)
    }
}

impl ConfigParser for PropertiesParser {
    fn parse(&self, content: &str, overrides: &[String]) -> Result<Config> {
        let state = content
            .lines()
            .try_fold(ParseState::default(), |state, line| {
                Self::step(state, line, overrides)
            })?;
        Ok(Config::from_groups(state.groups))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["properties"]
    }
}

/// Splits a property line on `=`, dropping trailing empty tokens.
///
/// `key=` therefore splits into a single token and fails the pair check,
/// while `=value` keeps its leading empty key token and fails later as a
/// blank key.
fn split_property_line(line: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = line.split(PROPERTY_TOKENIZER).collect();
    while tokens.last().is_some_and(|token| token.is_empty()) {
        tokens.pop();
    }
    tokens
}

/// Whether override resolution applies to this key at all.
///
/// Requires a non-empty override list and both tag markers present past the
/// start of the key; a marker at position zero leaves the key untouched.
fn override_applicable(key: &str, overrides: &[String]) -> bool {
    !overrides.is_empty()
        && key.find(OVERRIDE_START_TAG).is_some_and(|at| at > 0)
        && key.find(OVERRIDE_END_TAG).is_some_and(|at| at > 0)
}
