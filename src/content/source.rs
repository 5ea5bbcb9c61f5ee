use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tracing::error;

use crate::catalog::Track;
use crate::config::DataSettings;

/// Where the views fetch their documents from.
///
/// Each call answers the way the site's endpoints do: the document on
/// success, `{"error": "..."}` on failure.
pub trait ContentSource {
    fn songs(&self) -> Value;
    fn profile(&self) -> Value;
    fn license(&self) -> Value;
}

/// Reads the catalog spreadsheet and the JSON documents from a data directory.
pub struct DataDir {
    songs: PathBuf,
    profile: PathBuf,
    license: PathBuf,
}

impl DataDir {
    pub fn new(settings: &DataSettings) -> Self {
        Self {
            songs: settings.dir.join(&settings.songs_file),
            profile: settings.dir.join(&settings.profile_file),
            license: settings.dir.join(&settings.license_file),
        }
    }
}

impl ContentSource for DataDir {
    fn songs(&self) -> Value {
        match read_songs_csv(&self.songs) {
            Ok(tracks) => json!(tracks),
            Err(e) => {
                error!("Error reading CSV {}: {e}", self.songs.display());
                json!({ "error": "Failed to load songs" })
            }
        }
    }

    fn profile(&self) -> Value {
        match read_json(&self.profile) {
            Ok(v) => v,
            Err(e) => {
                error!("Error reading profile {}: {e}", self.profile.display());
                json!({ "error": "Failed to load profile" })
            }
        }
    }

    fn license(&self) -> Value {
        match read_json(&self.license) {
            Ok(v) => v,
            Err(e) => {
                error!("Error reading license data {}: {e}", self.license.display());
                json!({ "error": "Failed to load license data" })
            }
        }
    }
}

/// Parse the catalog sheet: a header row, then one track per row.
pub fn read_songs_csv(path: &Path) -> Result<Vec<Track>, Box<dyn std::error::Error>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_path(path)?;

    let mut tracks = Vec::new();
    for record in reader.deserialize::<Track>() {
        tracks.push(record?);
    }
    Ok(tracks)
}

fn read_json(path: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
