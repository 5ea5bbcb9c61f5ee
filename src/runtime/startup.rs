use std::path::PathBuf;

use tracing::{info, warn};

use crate::catalog::{Track, resolve};
use crate::config::DataSettings;
use crate::content::{DataDir, Landing, LoadState, load_landing};

/// Content the event loop starts with, plus the audio file of every track.
pub struct Startup {
    pub source: DataDir,
    pub landing: LoadState<Landing>,
    pub sources: Vec<Option<PathBuf>>,
}

/// Local audio file for each track, in catalog order.
pub fn audio_sources(tracks: &[Track], data: &DataSettings) -> Vec<Option<PathBuf>> {
    tracks
        .iter()
        .map(|t| {
            let file = t
                .audio_or(data.default_audio.as_deref())
                .and_then(|loc| resolve(&data.media_root, loc));
            if file.is_none() {
                warn!("track {:?} has no playable audio locator", t.title);
            }
            file
        })
        .collect()
}

pub fn load(data: &DataSettings) -> Startup {
    let source = DataDir::new(data);
    let landing = load_landing(&source);

    let sources = match &landing {
        LoadState::Ready(l) => {
            info!("loaded {} tracks", l.tracks.len());
            audio_sources(&l.tracks, data)
        }
        _ => Vec::new(),
    };

    Startup {
        source,
        landing,
        sources,
    }
}
