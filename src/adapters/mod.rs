// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters implementing the crate's ports.
//!
//! [`PropertiesParser`] implements the parser port for the grouped-properties
//! file format; [`MemoryCache`] implements the cache port with an in-process
//! map.

pub mod memory_cache;
pub mod properties;

pub use memory_cache::MemoryCache;
pub use properties::PropertiesParser;
