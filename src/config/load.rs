use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `FOLIO__`), then an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("FOLIO")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        let layers = &self.layers;
        if !(layers.reveal_fraction > 0.0 && layers.reveal_fraction <= 1.0) {
            return Err("layers.reveal_fraction must be in (0, 1]".to_string());
        }
        if layers.fade_distance_fraction <= 0.0 {
            return Err("layers.fade_distance_fraction must be > 0".to_string());
        }
        if !(0.0..=1.0).contains(&layers.min_brightness) {
            return Err("layers.min_brightness must be in [0, 1]".to_string());
        }
        if !(0.0..=1.0).contains(&layers.min_saturation) {
            return Err("layers.min_saturation must be in [0, 1]".to_string());
        }
        if layers.peak_brightness < 1.0 {
            return Err("layers.peak_brightness must be >= 1".to_string());
        }
        if layers.active_darken < 0.0 {
            return Err("layers.active_darken must be >= 0".to_string());
        }

        let motion = &self.motion;
        if motion.rest_scale <= 0.0 || motion.active_scale <= 0.0 {
            return Err("motion scales must be > 0".to_string());
        }
        if motion.darken_after_ms > motion.info_after_ms {
            return Err("motion.darken_after_ms must not exceed motion.info_after_ms".to_string());
        }

        if self.ui.frame_ms == 0 {
            return Err("ui.frame_ms must be >= 1".to_string());
        }
        if self.log.level.parse::<tracing::Level>().is_err() {
            return Err(format!("log.level {:?} is not a tracing level", self.log.level));
        }
        Ok(())
    }
}

/// Resolve the config path from `FOLIO_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("FOLIO_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/folio/config.toml`
/// or `~/.config/folio/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("folio").join("config.toml"))
}
