// SPDX-License-Identifier: MIT OR Apache-2.0

//! The configuration loading service.
//!
//! This module orchestrates path validation, file I/O, parsing, and
//! memoization into the crate's main entry points.

pub mod loader;

pub use loader::{cache_signature, default_config_path, load_config, ConfigLoader};
