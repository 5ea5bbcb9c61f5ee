use std::fmt;

use serde_json::Value;
use tracing::{error, warn};

use crate::catalog::{Track, duplicate_titles};

use super::model::{License, Profile};
use super::source::ContentSource;

#[derive(Debug)]
pub enum LoadError {
    /// The source answered with `{"error": ...}`.
    Remote(String),
    /// The document did not have the expected shape.
    Shape(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Remote(msg) => write!(f, "source error: {msg}"),
            LoadError::Shape(msg) => write!(f, "unexpected document: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Shape(e.to_string())
    }
}

/// What a view shows while and after fetching its data.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    /// User-facing message; loads are not retried.
    Failed(String),
    Ready(T),
}

impl<T> LoadState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(v) => Some(v),
            _ => None,
        }
    }
}

pub const CATALOG_FAILED: &str = "Failed to load the song catalog";
pub const LICENSE_FAILED: &str = "Failed to load the license terms";

/// Everything the landing page needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Landing {
    pub tracks: Vec<Track>,
    pub profile: Option<Profile>,
}

fn remote_error(doc: &Value) -> Option<String> {
    doc.get("error").map(|e| match e {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

/// Interpret a catalog response. Anything but an array of records is an error.
pub fn load_catalog(doc: Value) -> Result<Vec<Track>, LoadError> {
    if let Some(msg) = remote_error(&doc) {
        return Err(LoadError::Remote(msg));
    }
    if !doc.is_array() {
        return Err(LoadError::Shape("catalog is not an array".to_string()));
    }
    let tracks: Vec<Track> = serde_json::from_value(doc)?;
    for title in duplicate_titles(&tracks) {
        warn!("duplicate track title in catalog: {title:?}");
    }
    Ok(tracks)
}

/// Interpret a profile response; a missing or failed profile is simply absent.
pub fn load_profile(doc: Value) -> Option<Profile> {
    if doc.is_null() {
        return None;
    }
    if let Some(msg) = remote_error(&doc) {
        warn!("profile unavailable: {msg}");
        return None;
    }
    match serde_json::from_value(doc) {
        Ok(p) => Some(p),
        Err(e) => {
            warn!("profile has an unexpected shape: {e}");
            None
        }
    }
}

pub fn load_license(doc: Value) -> Result<License, LoadError> {
    if let Some(msg) = remote_error(&doc) {
        return Err(LoadError::Remote(msg));
    }
    Ok(serde_json::from_value(doc)?)
}

/// Fetch catalog and profile for the landing page.
pub fn load_landing(source: &dyn ContentSource) -> LoadState<Landing> {
    let songs = source.songs();
    let profile = load_profile(source.profile());
    match load_catalog(songs) {
        Ok(tracks) => LoadState::Ready(Landing { tracks, profile }),
        Err(e) => {
            error!("catalog load failed: {e}");
            LoadState::Failed(CATALOG_FAILED.to_string())
        }
    }
}

pub fn load_license_page(source: &dyn ContentSource) -> LoadState<License> {
    match load_license(source.license()) {
        Ok(l) => LoadState::Ready(l),
        Err(e) => {
            error!("license load failed: {e}");
            LoadState::Failed(LICENSE_FAILED.to_string())
        }
    }
}
