// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed property model and value classification.
//!
//! This module provides the [`PropertyValue`] tagged union, which holds a
//! configuration value as exactly one of five typed variants, and the
//! [`Property`] pair that binds a value to its key. Classification happens
//! once, at parse time; lookups hand back the already-typed value.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Delimiter that turns a raw value into a list of strings.
const LIST_DELIMITER: char = ',';

/// The discriminant of a [`PropertyValue`].
///
/// Useful for branching on the active variant without destructuring, and for
/// reporting the expected/actual pair in a type mismatch.
///
/// # Examples
///
/// ```
/// use groupcfg::domain::property::{PropertyValue, ValueKind};
///
/// let value = PropertyValue::classify("2147483648");
/// assert_eq!(value.kind(), ValueKind::Integer);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// A signed 64-bit integer.
    Integer,
    /// A 64-bit floating point number.
    Float,
    /// A boolean.
    Boolean,
    /// A list of raw strings.
    List,
    /// A raw string.
    String,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Boolean => "boolean",
            ValueKind::List => "list",
            ValueKind::String => "string",
        };
        write!(f, "{}", name)
    }
}

/// A typed configuration value.
///
/// `PropertyValue` is a tagged union: exactly one variant is active, decided
/// once by [`PropertyValue::classify`] when the value is parsed. Call sites
/// use the typed accessors ([`as_integer`](PropertyValue::as_integer) and
/// friends), which return a [`ConfigError::TypeMismatch`] when the value is
/// accessed as the wrong variant.
///
/// # Examples
///
/// ```
/// use groupcfg::domain::property::PropertyValue;
///
/// let value = PropertyValue::classify("26214400");
/// assert_eq!(value.as_integer().unwrap(), 26214400);
/// assert!(value.as_boolean().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    /// A signed 64-bit integer value.
    Integer(i64),
    /// A 64-bit floating point value.
    Float(f64),
    /// A boolean value.
    Boolean(bool),
    /// A comma-delimited list of raw string elements.
    List(Vec<String>),
    /// A plain string value.
    String(String),
}

impl PropertyValue {
    /// Classifies raw text into its typed variant.
    ///
    /// The decision is ordered and the first match wins, because the
    /// membership sets overlap (`"123"` is a valid integer and also a valid
    /// float):
    ///
    /// 1. parses as `i64` → [`Integer`](PropertyValue::Integer)
    /// 2. parses as `f64` → [`Float`](PropertyValue::Float)
    /// 3. equals `"true"`/`"false"` case-insensitively → [`Boolean`](PropertyValue::Boolean)
    /// 4. contains `,` → [`List`](PropertyValue::List), split on `,` with no
    ///    per-element trimming and no nested typing of elements
    /// 5. anything else → [`String`](PropertyValue::String), text unchanged
    ///
    /// Total over any input; the empty string classifies as `String("")`.
    /// Numeric parsing is locale-independent and accepts no thousands
    /// separators.
    ///
    /// # Examples
    ///
    /// ```
    /// use groupcfg::domain::property::PropertyValue;
    ///
    /// assert_eq!(PropertyValue::classify("123"), PropertyValue::Integer(123));
    /// assert_eq!(PropertyValue::classify("123.45"), PropertyValue::Float(123.45));
    /// assert_eq!(PropertyValue::classify("TRUE"), PropertyValue::Boolean(true));
    /// assert_eq!(
    ///     PropertyValue::classify("a,b,c"),
    ///     PropertyValue::List(vec!["a".into(), "b".into(), "c".into()])
    /// );
    /// assert_eq!(
    ///     PropertyValue::classify("hello world"),
    ///     PropertyValue::String("hello world".into())
    /// );
    /// ```
    pub fn classify(raw: &str) -> Self {
        if let Ok(n) = raw.parse::<i64>() {
            return PropertyValue::Integer(n);
        }
        if let Ok(f) = raw.parse::<f64>() {
            return PropertyValue::Float(f);
        }
        if raw.eq_ignore_ascii_case("true") {
            return PropertyValue::Boolean(true);
        }
        if raw.eq_ignore_ascii_case("false") {
            return PropertyValue::Boolean(false);
        }
        if raw.contains(LIST_DELIMITER) {
            let elements = raw.split(LIST_DELIMITER).map(str::to_string).collect();
            return PropertyValue::List(elements);
        }
        PropertyValue::String(raw.to_string())
    }

    /// Returns the discriminant of the active variant.
    pub fn kind(&self) -> ValueKind {
        match self {
            PropertyValue::Integer(_) => ValueKind::Integer,
            PropertyValue::Float(_) => ValueKind::Float,
            PropertyValue::Boolean(_) => ValueKind::Boolean,
            PropertyValue::List(_) => ValueKind::List,
            PropertyValue::String(_) => ValueKind::String,
        }
    }

    /// Returns the integer value, or a type mismatch for any other variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use groupcfg::domain::property::PropertyValue;
    ///
    /// assert_eq!(PropertyValue::classify("42").as_integer().unwrap(), 42);
    /// ```
    pub fn as_integer(&self) -> Result<i64> {
        match self {
            PropertyValue::Integer(n) => Ok(*n),
            other => Err(other.mismatch(ValueKind::Integer)),
        }
    }

    /// Returns the float value, or a type mismatch for any other variant.
    ///
    /// An integer-classified value does not coerce; `"42"` is an integer and
    /// `as_float` on it fails.
    pub fn as_float(&self) -> Result<f64> {
        match self {
            PropertyValue::Float(f) => Ok(*f),
            other => Err(other.mismatch(ValueKind::Float)),
        }
    }

    /// Returns the boolean value, or a type mismatch for any other variant.
    pub fn as_boolean(&self) -> Result<bool> {
        match self {
            PropertyValue::Boolean(b) => Ok(*b),
            other => Err(other.mismatch(ValueKind::Boolean)),
        }
    }

    /// Returns the list elements, or a type mismatch for any other variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use groupcfg::domain::property::PropertyValue;
    ///
    /// let value = PropertyValue::classify("array,of,values");
    /// assert_eq!(value.as_list().unwrap().len(), 3);
    /// ```
    pub fn as_list(&self) -> Result<&[String]> {
        match self {
            PropertyValue::List(elements) => Ok(elements),
            other => Err(other.mismatch(ValueKind::List)),
        }
    }

    /// Returns the string value, or a type mismatch for any other variant.
    pub fn as_str(&self) -> Result<&str> {
        match self {
            PropertyValue::String(s) => Ok(s),
            other => Err(other.mismatch(ValueKind::String)),
        }
    }

    fn mismatch(&self, expected: ValueKind) -> ConfigError {
        ConfigError::TypeMismatch {
            expected,
            actual: self.kind(),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Integer(n) => write!(f, "{}", n),
            PropertyValue::Float(x) => write!(f, "{}", x),
            PropertyValue::Boolean(b) => write!(f, "{}", b),
            PropertyValue::List(elements) => write!(f, "{}", elements.join(",")),
            PropertyValue::String(s) => write!(f, "{}", s),
        }
    }
}

/// A single typed key/value pair within a group.
///
/// Immutable once constructed: the constructor validates its inputs and
/// classifies the value, and there is no mutation API afterwards.
///
/// # Examples
///
/// ```
/// use groupcfg::domain::property::{Property, ValueKind};
///
/// let property = Property::new("basic_size_limit", Some("26214400")).unwrap();
/// assert_eq!(property.key(), "basic_size_limit");
/// assert_eq!(property.value().kind(), ValueKind::Integer);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    key: String,
    value: PropertyValue,
}

impl Property {
    /// Builds a property from a key and an optional raw value.
    ///
    /// Fails with [`ConfigError::InvalidPropertyKey`] when the key is blank
    /// and with [`ConfigError::InvalidPropertyValue`] when the value is
    /// absent. An empty value string is valid and classifies as `String("")`.
    ///
    /// # Examples
    ///
    /// ```
    /// use groupcfg::domain::errors::ErrorKind;
    /// use groupcfg::domain::property::Property;
    ///
    /// let err = Property::new("  ", Some("value")).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidPropertyKey);
    ///
    /// let err = Property::new("key", None).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidPropertyValue);
    /// ```
    pub fn new(key: &str, value: Option<&str>) -> Result<Self> {
        if key.trim().is_empty() {
            return Err(ConfigError::InvalidPropertyKey);
        }
        let raw = value.ok_or_else(|| ConfigError::InvalidPropertyValue {
            key: key.to_string(),
        })?;
        Ok(Self {
            key: key.to_string(),
            value: PropertyValue::classify(raw),
        })
    }

    /// Returns the property key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the typed value.
    pub fn value(&self) -> &PropertyValue {
        &self.value
    }

    /// Consumes the property and returns its typed value.
    pub fn into_value(self) -> PropertyValue {
        self.value
    }
}
