use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::audio::open_output;
use crate::logging;
use crate::ui;

mod event_loop;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, config_problem) = settings::load_settings();
    if let Some(msg) = &config_problem {
        eprintln!("folio: {msg}");
    }
    match logging::init(&settings.log) {
        Ok(true) => {
            if let Some(msg) = &config_problem {
                warn!("{msg}");
            }
            info!("folio starting");
        }
        Ok(false) => {}
        Err(e) => eprintln!("folio: logging disabled: {e}"),
    }

    let startup = startup::load(&settings.data);
    let mut audio = open_output(startup.sources);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if settings.ui.mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let rows = terminal.size()?.height;
        let mut app = App::new(&settings, ui::viewport_height(rows));
        app.set_landing(startup.landing);

        let mut state = event_loop::EventLoopState::new();
        event_loop::run(
            &mut terminal,
            &settings,
            &mut app,
            &startup.source,
            audio.as_mut(),
            &mut state,
        )
    })();

    disable_raw_mode()?;
    if settings.ui.mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("folio exiting");
    run_result
}
