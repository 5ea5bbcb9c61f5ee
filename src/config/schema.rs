use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/folio/config.toml` or `~/.config/folio/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `FOLIO__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub data: DataSettings,
    pub layers: LayerSettings,
    pub motion: MotionSettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DataSettings {
    /// Directory holding the catalog and the profile/license documents.
    pub dir: PathBuf,
    /// Catalog file name inside `dir` (CSV with a camelCase header row).
    pub songs_file: String,
    pub profile_file: String,
    pub license_file: String,
    /// Directory that site-absolute media paths (`/audio/...`) resolve against.
    pub media_root: PathBuf,
    /// Used when a track has no `audioPath`.
    pub default_audio: Option<String>,
    /// Used when a track has no `coverImagePath`.
    pub default_cover: Option<String>,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
            songs_file: "songs.csv".to_string(),
            profile_file: "profile.json".to_string(),
            license_file: "license.json".to_string(),
            media_root: PathBuf::from("public"),
            default_audio: None,
            default_cover: None,
        }
    }
}

/// Scroll-derived look of the background layers.
///
/// Fractions are relative to the layer height (one viewport).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LayerSettings {
    /// Length of the neutral band after a layer's start, as a fraction of its height.
    pub reveal_fraction: f64,
    /// Floor for the pre-reveal dimming.
    pub min_brightness: f64,
    /// Brightness lost per layer-height of distance before the start threshold.
    pub darken_depth: f64,
    /// Scroll distance over which the post-reveal fade completes.
    pub fade_distance_fraction: f64,
    /// Brightness reached at the end of the post-reveal fade.
    pub peak_brightness: f64,
    /// Saturation reached at the end of the post-reveal fade.
    pub min_saturation: f64,
    pub faded_contrast: f64,
    pub faded_sepia: f64,
    /// Multiplier applied to the brightness of a darkened (playing) layer.
    pub active_darken: f64,
    /// Speed of the profile section relative to the scroll once it enters.
    pub profile_parallax: f64,
}

impl Default for LayerSettings {
    fn default() -> Self {
        Self {
            reveal_fraction: 0.25,
            min_brightness: 0.3,
            darken_depth: 0.7,
            fade_distance_fraction: 0.5,
            peak_brightness: 1.2,
            min_saturation: 0.4,
            faded_contrast: 0.9,
            faded_sepia: 0.1,
            active_darken: 0.55,
            profile_parallax: 0.5,
        }
    }
}

/// Timings (milliseconds) and scale values of the playback animations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MotionSettings {
    /// Background scale of a layer at rest.
    pub rest_scale: f64,
    /// Background scale of the playing layer.
    pub active_scale: f64,
    pub scale_ms: u64,
    /// Duration of the smooth scroll to a selected layer.
    pub scroll_ms: u64,
    /// Delay between selecting a track and starting its audio.
    pub start_delay_ms: u64,
    /// Delay before an ending track is considered idle.
    pub settle_ms: u64,
    /// Time after playback start at which the layer darkens.
    pub darken_after_ms: u64,
    /// Time after playback start at which the info overlay appears.
    pub info_after_ms: u64,
    pub info_fade_ms: u64,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            rest_scale: 1.35,
            active_scale: 1.0,
            scale_ms: 1200,
            scroll_ms: 400,
            start_delay_ms: 300,
            settle_ms: 100,
            darken_after_ms: 1000,
            info_after_ms: 1500,
            info_fade_ms: 500,
        }
    }
}

impl MotionSettings {
    pub fn scale_duration(&self) -> Duration {
        Duration::from_millis(self.scale_ms)
    }

    pub fn scroll_duration(&self) -> Duration {
        Duration::from_millis(self.scroll_ms)
    }

    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.start_delay_ms)
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn darken_after(&self) -> Duration {
        Duration::from_millis(self.darken_after_ms)
    }

    pub fn info_after(&self) -> Duration {
        Duration::from_millis(self.info_after_ms)
    }

    pub fn info_fade(&self) -> Duration {
        Duration::from_millis(self.info_fade_ms)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// Site title rendered in the landing header.
    pub header_text: String,
    /// Line rendered under the title.
    pub tagline: String,
    /// Rows scrolled per `j`/`k` or wheel notch.
    pub scroll_step: u16,
    /// Frame interval of the event loop (milliseconds).
    pub frame_ms: u64,
    /// Capture the mouse for wheel scrolling and click-to-play.
    pub mouse: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: "NewLabel".to_string(),
            tagline: "A portfolio of music works".to_string(),
            scroll_step: 2,
            frame_ms: 16,
            mouse: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log file; logging is disabled when unset since the terminal belongs to the UI.
    pub file: Option<PathBuf>,
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}
