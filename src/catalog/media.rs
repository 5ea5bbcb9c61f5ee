use std::path::{Path, PathBuf};
use std::time::Duration;

use lofty::prelude::*;
use tracing::debug;

/// Resolve a site-absolute locator (`/audio/a.wav`) against `media_root`.
///
/// Locators with a scheme (`https://...`) are not local files and yield `None`.
pub fn resolve(media_root: &Path, locator: &str) -> Option<PathBuf> {
    let locator = locator.trim();
    if locator.is_empty() || locator.contains("://") {
        return None;
    }
    Some(media_root.join(locator.trim_start_matches('/')))
}

/// Read the playing time of an audio file from its properties.
pub fn probe_duration(path: &Path) -> Option<Duration> {
    match lofty::read_from_path(path) {
        Ok(tagged) => Some(tagged.properties().duration()),
        Err(e) => {
            debug!("no duration for {}: {e}", path.display());
            None
        }
    }
}
