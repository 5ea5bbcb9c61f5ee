//! File logging. The terminal belongs to the UI, so log lines go to the
//! configured file or nowhere.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing::Level;

use crate::config::LogSettings;

/// Install the global subscriber. Returns `Ok(false)` when no log file is set.
pub fn init(settings: &LogSettings) -> Result<bool, Box<dyn std::error::Error>> {
    let Some(path) = &settings.file else {
        return Ok(false);
    };

    let level: Level = settings
        .level
        .parse()
        .map_err(|e| format!("invalid log level {:?}: {e}", settings.level))?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| e as Box<dyn std::error::Error>)?;
    Ok(true)
}
