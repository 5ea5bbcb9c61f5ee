//! Phase and event types of the playback controller.

use std::time::Duration;

/// Where a track is in its playback lifecycle. Idle tracks are not stored.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TrackPhase {
    Idle,
    /// Selected; audio starts once the zoom has had a head start.
    Starting,
    Playing,
    /// Torn down visually and stopped; idle after the settle delay.
    Ending,
}

/// Visual feedback of a playing layer. Only ever advances while playing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum VisualPhase {
    Normal,
    Darkened,
    InfoShown,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EndReason {
    /// Another track was selected.
    Interrupted,
    /// The playing track was selected again.
    Toggled,
    /// The cancel key.
    Cancelled,
    /// The audio ran out.
    Finished,
}

/// Transitions reported by the controller, in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    Starting { index: usize },
    Playing { index: usize },
    Ending { index: usize, reason: EndReason },
    Idle { index: usize },
    /// Audio could not start; the track went straight back to idle.
    Failed { index: usize, error: String },
}

/// The track in Starting or Playing, with the time its phase was entered.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) struct Active {
    pub index: usize,
    pub phase: TrackPhase,
    pub since: Duration,
}

/// A track settling in Ending.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) struct Releasing {
    pub index: usize,
    pub since: Duration,
}
