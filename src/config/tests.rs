use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_folio_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("FOLIO_CONFIG_PATH", "/tmp/folio-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/folio-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("folio")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("folio")
            .join("config.toml")
    );
}

#[test]
fn defaults_are_valid_and_match_the_site_tuning() {
    let s = Settings::default();
    assert!(s.validate().is_ok());
    assert_eq!(s.motion.rest_scale, 1.35);
    assert_eq!(s.motion.active_scale, 1.0);
    assert_eq!(s.motion.scale_ms, 1200);
    assert_eq!(s.motion.scroll_ms, 400);
    assert_eq!(s.motion.start_delay_ms, 300);
    assert_eq!(s.motion.settle_ms, 100);
    assert_eq!(s.layers.reveal_fraction, 0.25);
    assert!(s.log.file.is_none());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[data]
dir = "/srv/site/data"
songs_file = "catalog.csv"
media_root = "/srv/site/public"
default_cover = "/images/covers/42.jpg"

[layers]
reveal_fraction = 0.5
active_darken = 0.4

[motion]
rest_scale = 1.5
start_delay_ms = 0
info_after_ms = 2000

[ui]
header_text = "hello"
scroll_step = 4
mouse = false

[log]
file = "/tmp/folio.log"
level = "debug"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("FOLIO_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("FOLIO__MOTION__SCALE_MS");

    let s = Settings::load().unwrap();
    assert_eq!(s.data.dir, std::path::PathBuf::from("/srv/site/data"));
    assert_eq!(s.data.songs_file, "catalog.csv");
    assert_eq!(s.data.profile_file, "profile.json");
    assert_eq!(s.data.default_cover.as_deref(), Some("/images/covers/42.jpg"));
    assert!(s.data.default_audio.is_none());
    assert_eq!(s.layers.reveal_fraction, 0.5);
    assert_eq!(s.layers.active_darken, 0.4);
    assert_eq!(s.layers.min_brightness, 0.3);
    assert_eq!(s.motion.rest_scale, 1.5);
    assert_eq!(s.motion.start_delay_ms, 0);
    assert_eq!(s.motion.info_after_ms, 2000);
    assert_eq!(s.motion.scale_ms, 1200);
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(s.ui.scroll_step, 4);
    assert!(!s.ui.mouse);
    assert_eq!(s.log.file, Some(std::path::PathBuf::from("/tmp/folio.log")));
    assert_eq!(s.log.level, "debug");
    assert!(s.validate().is_ok());
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[motion]
scale_ms = 1200
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("FOLIO_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("FOLIO__MOTION__SCALE_MS", "600");

    let s = Settings::load().unwrap();
    assert_eq!(s.motion.scale_ms, 600);
}

#[test]
fn validate_rejects_unusable_values() {
    let mut s = Settings::default();
    s.layers.reveal_fraction = 0.0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.motion.darken_after_ms = 2000;
    s.motion.info_after_ms = 1500;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.log.level = "loud".into();
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.ui.frame_ms = 0;
    assert!(s.validate().is_err());
}

#[test]
fn default_settings_serialize_to_toml_and_back() {
    let text = toml::to_string_pretty(&Settings::default()).unwrap();
    assert!(text.contains("[motion]"));
    let parsed: Settings = toml::from_str(&text).unwrap();
    assert_eq!(parsed.motion.info_after_ms, 1500);
    assert_eq!(parsed.ui.header_text, "NewLabel");
}
