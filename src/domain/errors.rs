// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the closed error taxonomy raised while loading and
//! querying configuration. All errors use `thiserror` for proper error
//! handling and conversion, and every failure on the load path aborts the
//! whole load: a partially populated configuration is never returned.

use crate::domain::property::ValueKind;
use std::fmt;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// Each variant corresponds to one named failure condition of the loader or
/// of typed value access. The machine-readable condition is available via
/// [`ConfigError::kind`] so callers can branch without matching on payloads.
///
/// # Examples
///
/// ```
/// use groupcfg::domain::errors::{ConfigError, ErrorKind};
///
/// let error = ConfigError::ConfigFileNotFound {
///     path: "/etc/myapp/app.properties".to_string(),
/// };
/// assert_eq!(error.kind(), ErrorKind::ConfigFileNotFound);
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The config file path argument was empty or blank.
    #[error("invalid empty or blank config file path")]
    InvalidConfigFilePath,

    /// The config file path does not resolve to an existing file.
    #[error("can't find config file at path: {path}")]
    ConfigFileNotFound {
        /// The path that was probed
        path: String,
    },

    /// An I/O failure occurred while reading the config file.
    #[error("error reading config file at path: {path}")]
    FailedToReadConfigFile {
        /// The path being read
        path: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A property line appeared before any group header.
    #[error("property can't have a blank group, at line: {line}")]
    PropertyGroupMissing {
        /// The offending line
        line: String,
    },

    /// A property line lacks `=`, or splits into a token count other than two.
    #[error("line is neither a group, comment nor property: {line}")]
    InvalidPropertyDefinition {
        /// The offending line
        line: String,
    },

    /// A property was constructed with a blank key.
    #[error("invalid blank property key")]
    InvalidPropertyKey,

    /// A property was constructed with an absent value.
    #[error("invalid absent property value for key: {key}")]
    InvalidPropertyValue {
        /// The key whose value was absent
        key: String,
    },

    /// A typed accessor was used against the wrong value variant.
    ///
    /// This is the one variant never raised by the loader itself; it only
    /// comes out of the typed accessors on a parsed value.
    #[error("expected a {expected} value but found {actual}")]
    TypeMismatch {
        /// The kind the accessor asked for
        expected: ValueKind,
        /// The kind actually held
        actual: ValueKind,
    },
}

/// Stable machine-readable error discriminant.
///
/// `ErrorKind` mirrors the variants of [`ConfigError`] without their payloads,
/// giving callers a cheap, `Copy` handle for branching and assertions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// See [`ConfigError::InvalidConfigFilePath`].
    InvalidConfigFilePath,
    /// See [`ConfigError::ConfigFileNotFound`].
    ConfigFileNotFound,
    /// See [`ConfigError::FailedToReadConfigFile`].
    FailedToReadConfigFile,
    /// See [`ConfigError::PropertyGroupMissing`].
    PropertyGroupMissing,
    /// See [`ConfigError::InvalidPropertyDefinition`].
    InvalidPropertyDefinition,
    /// See [`ConfigError::InvalidPropertyKey`].
    InvalidPropertyKey,
    /// See [`ConfigError::InvalidPropertyValue`].
    InvalidPropertyValue,
    /// See [`ConfigError::TypeMismatch`].
    TypeMismatch,
}

impl ConfigError {
    /// Returns the stable machine-readable kind of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use groupcfg::domain::errors::{ConfigError, ErrorKind};
    ///
    /// let error = ConfigError::InvalidConfigFilePath;
    /// assert_eq!(error.kind(), ErrorKind::InvalidConfigFilePath);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::InvalidConfigFilePath => ErrorKind::InvalidConfigFilePath,
            ConfigError::ConfigFileNotFound { .. } => ErrorKind::ConfigFileNotFound,
            ConfigError::FailedToReadConfigFile { .. } => ErrorKind::FailedToReadConfigFile,
            ConfigError::PropertyGroupMissing { .. } => ErrorKind::PropertyGroupMissing,
            ConfigError::InvalidPropertyDefinition { .. } => ErrorKind::InvalidPropertyDefinition,
            ConfigError::InvalidPropertyKey => ErrorKind::InvalidPropertyKey,
            ConfigError::InvalidPropertyValue { .. } => ErrorKind::InvalidPropertyValue,
            ConfigError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidConfigFilePath => "InvalidConfigFilePath",
            ErrorKind::ConfigFileNotFound => "ConfigFileNotFound",
            ErrorKind::FailedToReadConfigFile => "FailedToReadConfigFile",
            ErrorKind::PropertyGroupMissing => "PropertyGroupMissing",
            ErrorKind::InvalidPropertyDefinition => "InvalidPropertyDefinition",
            ErrorKind::InvalidPropertyKey => "InvalidPropertyKey",
            ErrorKind::InvalidPropertyValue => "InvalidPropertyValue",
            ErrorKind::TypeMismatch => "TypeMismatch",
        };
        write!(f, "{}", name)
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_file_path_display() {
        let error = ConfigError::InvalidConfigFilePath;
        assert_eq!(error.to_string(), "invalid empty or blank config file path");
    }

    #[test]
    fn test_config_file_not_found_display() {
        let error = ConfigError::ConfigFileNotFound {
            path: "/tmp/missing.properties".to_string(),
        };
        assert!(error.to_string().contains("/tmp/missing.properties"));
    }

    #[test]
    fn test_failed_to_read_carries_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = ConfigError::FailedToReadConfigFile {
            path: "/tmp/app.properties".to_string(),
            source: io_error,
        };
        assert_eq!(error.kind(), ErrorKind::FailedToReadConfigFile);
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_property_group_missing_display() {
        let error = ConfigError::PropertyGroupMissing {
            line: "path=/tmp/".to_string(),
        };
        assert!(error.to_string().contains("path=/tmp/"));
    }

    #[test]
    fn test_invalid_property_definition_display() {
        let error = ConfigError::InvalidPropertyDefinition {
            line: "just some text".to_string(),
        };
        assert!(error.to_string().contains("just some text"));
    }

    #[test]
    fn test_type_mismatch_display() {
        let error = ConfigError::TypeMismatch {
            expected: ValueKind::Integer,
            actual: ValueKind::String,
        };
        assert_eq!(error.to_string(), "expected a integer value but found string");
    }

    #[test]
    fn test_kind_is_stable_over_payload() {
        let a = ConfigError::ConfigFileNotFound {
            path: "a".to_string(),
        };
        let b = ConfigError::ConfigFileNotFound {
            path: "b".to_string(),
        };
        assert_eq!(a.kind(), b.kind());
    }

    #[test]
    fn test_error_kind_display_names() {
        assert_eq!(
            ErrorKind::InvalidPropertyDefinition.to_string(),
            "InvalidPropertyDefinition"
        );
        assert_eq!(ErrorKind::TypeMismatch.to_string(), "TypeMismatch");
    }
}
