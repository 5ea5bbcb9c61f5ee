use serde::{Deserialize, Serialize};

/// One catalog record. Column names follow the site's spreadsheet header.
///
/// Every column is optional; missing ones read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub release_date: String,
    pub genre: String,
    /// Free-text duration as written in the sheet; the song card probes the file instead.
    pub duration: String,
    pub streaming_url: String,
    pub download_url: String,
    pub description: String,
    /// Comma separated.
    pub tags: String,
    pub original_tracks: String,
    pub audio_path: String,
    pub cover_image_path: String,
}

impl Track {
    /// Tags split on commas, trimmed, empties dropped.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// The audio locator, or `fallback` when the sheet leaves it blank.
    pub fn audio_or<'a>(&'a self, fallback: Option<&'a str>) -> Option<&'a str> {
        non_blank(&self.audio_path).or(fallback)
    }

    /// The cover locator, or `fallback` when the sheet leaves it blank.
    pub fn cover_or<'a>(&'a self, fallback: Option<&'a str>) -> Option<&'a str> {
        non_blank(&self.cover_image_path).or(fallback)
    }
}

fn non_blank(s: &str) -> Option<&str> {
    let s = s.trim();
    if s.is_empty() { None } else { Some(s) }
}
