//! Audio-related small types.
//!
//! This module defines the output trait the playback controller drives and
//! the error reported when a track cannot start.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum AudioError {
    /// No output device could be opened.
    NoDevice(String),
    /// The track has no local media file.
    NoSource { index: usize },
    Open { path: PathBuf, source: std::io::Error },
    Decode { path: PathBuf, reason: String },
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::NoDevice(reason) => write!(f, "no audio output device: {reason}"),
            AudioError::NoSource { index } => write!(f, "track {index} has no playable audio file"),
            AudioError::Open { path, source } => {
                write!(f, "failed to open {}: {source}", path.display())
            }
            AudioError::Decode { path, reason } => {
                write!(f, "failed to decode {}: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for AudioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AudioError::Open { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Something that can play one catalog track at a time.
pub trait AudioOutput {
    /// Start track `index` from the beginning, replacing whatever was playing.
    fn play(&mut self, index: usize) -> Result<(), AudioError>;
    /// Stop and rewind; a no-op when nothing plays.
    fn stop(&mut self);
    /// True once the started track has played to its end.
    fn finished(&self) -> bool;
}
