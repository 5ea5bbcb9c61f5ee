//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema used to drive the layer
//! look, the playback timings and the UI, plus helpers to load it from disk.

mod load;
mod schema;

pub use load::resolve_config_path;
pub use schema::*;

#[cfg(test)]
mod tests;
