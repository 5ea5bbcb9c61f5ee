//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and ties the loaded content, the
//! scroll tracker and the playback controller together.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
