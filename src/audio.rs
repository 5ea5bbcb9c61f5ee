//! Audio output used by the playback controller.
//!
//! The controller only starts, stops and polls for the natural end of a
//! track; decoding and mixing happen inside rodio's output stream.

mod player;
mod sink;
mod types;

pub use player::open_output;
pub use types::*;
