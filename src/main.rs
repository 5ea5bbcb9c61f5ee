use std::env;

mod app;
mod audio;
mod catalog;
mod config;
mod content;
mod layers;
mod logging;
mod motion;
mod playback;
mod runtime;
mod scroll;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    match env::args().nth(1).as_deref() {
        Some("--print-config") => {
            print!("{}", toml::to_string_pretty(&config::Settings::default())?);
            Ok(())
        }
        Some("--config-path") => {
            match config::resolve_config_path() {
                Some(p) => println!("{}", p.display()),
                None => println!("(no config path: set FOLIO_CONFIG_PATH or HOME)"),
            }
            Ok(())
        }
        Some(other) => Err(format!("unknown argument {other:?} (try --print-config)").into()),
        None => runtime::run(),
    }
}
