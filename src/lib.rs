// SPDX-License-Identifier: MIT OR Apache-2.0

//! A grouped configuration file loading crate with environment override
//! support.
//!
//! This crate parses a flat, line-oriented configuration format into a typed,
//! queryable in-memory store. Keys live inside named groups, values are
//! classified into one of five typed kinds at parse time, and a single key
//! can carry several environment-tagged variants of which only the variant
//! matching the caller's override tags survives the parse.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and business logic (`Property`,
//!   `PropertyValue`, `Config`, errors)
//! - **Ports**: Trait definitions that define interfaces (`ConfigParser`,
//!   `ConfigCache`)
//! - **Adapters**: Implementations of the ports (the grouped-properties
//!   parser, the in-memory cache)
//! - **Service**: The loader that orchestrates path validation, file I/O,
//!   parsing, and memoization
//!
//! # File format
//!
//! ```text
//! ; comment line, ignored
//! [ftp]
//! path=/tmp/                      ; inline comments after ; are stripped
//! path<production>=/srv/var/tmp/
//! path<ubuntu>=/etc/var/uploads
//! params=array,of,values
//! enabled=false
//! ```
//!
//! Loading this file with overrides `["ubuntu"]` materializes `ftp.path` as
//! `/etc/var/uploads`; loading it with no overrides keeps `/tmp/`. Tagged
//! lines whose tag matches none of the supplied overrides are dropped
//! silently — that is the mechanism, not an error.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use groupcfg::prelude::*;
//!
//! # fn main() -> groupcfg::domain::Result<()> {
//! let mut loader = ConfigLoader::new();
//! let overrides = vec!["ubuntu".to_string(), "production".to_string()];
//!
//! let config = loader.load("/etc/myapp/app.properties", &overrides)?;
//! if let Some(value) = config.get("ftp.path") {
//!     println!("upload path: {}", value);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Lookup is total: `Config::get` returns `None` for unknown, blank, or
//! malformed keys and never fails. Loading is fail-fast: the first malformed
//! line aborts the whole load and nothing partial is returned.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for
/// convenient access.
pub mod prelude {
    pub use crate::adapters::{MemoryCache, PropertiesParser};
    pub use crate::domain::{
        Config, ConfigError, ErrorKind, Property, PropertyValue, Result, ValueKind,
    };
    pub use crate::ports::{ConfigCache, ConfigParser};
    pub use crate::service::{cache_signature, default_config_path, load_config, ConfigLoader};
}
