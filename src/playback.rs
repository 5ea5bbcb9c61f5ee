//! Playback state machine of the landing page.
//!
//! `PlaybackController` decides which track plays and what visual phase each
//! layer is in; the audio itself goes through an `AudioOutput`.

mod controller;
mod phase;

pub use controller::PlaybackController;
pub use phase::{EndReason, PlaybackEvent, TrackPhase, VisualPhase};
