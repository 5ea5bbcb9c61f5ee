use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info};

use crate::app::{App, Page};
use crate::audio::AudioOutput;
use crate::config;
use crate::content::ContentSource;
use crate::playback::PlaybackEvent;
use crate::ui;

/// Poll interval while nothing on screen moves.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Zero of every timestamp handed to the app.
    epoch: Instant,
    /// Internal two-key prefix state used for `gg` handling.
    pending_gg: bool,
}

impl EventLoopState {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            pending_gg: false,
        }
    }

    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// Everything a key or mouse handler may touch.
struct Ctx<'a> {
    settings: &'a config::Settings,
    app: &'a mut App,
    source: &'a dyn ContentSource,
    audio: &'a mut dyn AudioOutput,
    state: &'a mut EventLoopState,
}

/// Main terminal event loop: one tick and one redraw per frame, input in
/// between. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    source: &dyn ContentSource,
    audio: &mut dyn AudioOutput,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    let frame = Duration::from_millis(settings.ui.frame_ms.max(1));
    let idle = frame.max(IDLE_POLL);

    loop {
        let now = state.now();
        for ev in app.tick(now, audio) {
            log_event(&ev, app);
        }

        terminal.draw(|f| ui::draw(f, app, &settings.ui, now))?;

        let timeout = if app.is_animating(now) { frame } else { idle };
        if !event::poll(timeout)? {
            continue;
        }
        let mut ctx = Ctx {
            settings,
            app: &mut *app,
            source,
            audio: &mut *audio,
            state: &mut *state,
        };
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if handle_key_event(key, &mut ctx) {
                    ctx.audio.stop();
                    return Ok(());
                }
            }
            Event::Mouse(mouse) if settings.ui.mouse => handle_mouse_event(mouse, &mut ctx),
            Event::Resize(_, rows) => ctx.app.on_resize(ui::viewport_height(rows)),
            _ => {}
        }
    }
}

fn log_event(ev: &PlaybackEvent, app: &App) {
    let title = |i: usize| app.tracks().get(i).map_or("?", |t| t.title.as_str());
    match ev {
        PlaybackEvent::Starting { index } => info!("starting {:?}", title(*index)),
        PlaybackEvent::Playing { index } => info!("playing {:?}", title(*index)),
        PlaybackEvent::Ending { index, reason } => {
            info!("ending {:?} ({reason:?})", title(*index))
        }
        PlaybackEvent::Idle { index } => debug!("{:?} settled", title(*index)),
        PlaybackEvent::Failed { index, error } => {
            debug!("{:?} back to idle after failure: {error}", title(*index))
        }
    }
}

/// Returns `true` when the app should quit.
fn handle_key_event(key: KeyEvent, ctx: &mut Ctx<'_>) -> bool {
    let gg = std::mem::take(&mut ctx.state.pending_gg);
    let now = ctx.state.now();
    let step = f64::from(ctx.settings.ui.scroll_step);

    // Space stops a running track on every page; its page action only
    // applies when nothing was playing.
    if key.code == KeyCode::Char(' ') && ctx.app.cancel(now, ctx.audio) {
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('L') => ctx.app.open_page(Page::License, ctx.source),
        KeyCode::Char('c') => ctx.app.open_page(Page::Contact, ctx.source),
        KeyCode::Char('h') => ctx.app.open_page(Page::Home, ctx.source),
        KeyCode::Tab => {
            let next = match ctx.app.page {
                Page::Home => Page::License,
                Page::License => Page::Contact,
                Page::Contact => Page::Home,
            };
            ctx.app.open_page(next, ctx.source);
        }
        KeyCode::Esc => {
            if ctx.app.song_card.is_some() {
                ctx.app.toggle_song_card();
            } else {
                ctx.app.open_page(Page::Home, ctx.source);
            }
        }
        _ if ctx.app.page == Page::License => handle_license_key(key, ctx),
        _ if ctx.app.page == Page::Home => handle_landing_key(key, ctx, now, step, gg),
        _ => {}
    }
    false
}

fn handle_license_key(key: KeyEvent, ctx: &mut Ctx<'_>) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => ctx.app.scroll_license(1),
        KeyCode::Char('k') | KeyCode::Up => ctx.app.scroll_license(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => ctx.app.scroll_license(10),
        KeyCode::PageUp => ctx.app.scroll_license(-10),
        _ => {}
    }
}

fn handle_landing_key(key: KeyEvent, ctx: &mut Ctx<'_>, now: Duration, step: f64, gg: bool) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => ctx.app.scroll_by(step),
        KeyCode::Char('k') | KeyCode::Up => ctx.app.scroll_by(-step),
        KeyCode::PageDown => ctx.app.page_down(),
        KeyCode::PageUp => ctx.app.page_up(),
        KeyCode::Char('g') => {
            if gg {
                ctx.app.scroll_to(0.0);
            } else {
                ctx.state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => {
            let max = ctx.app.max_scroll();
            ctx.app.scroll_to(max);
        }
        KeyCode::Enter => ctx.app.select_visible(now, ctx.audio),
        KeyCode::Char(d @ '1'..='9') => {
            if let Some(n) = d.to_digit(10) {
                ctx.app.select(n as usize - 1, now, ctx.audio);
            }
        }
        KeyCode::Char(' ') => ctx.app.page_down(),
        KeyCode::Char('i') => ctx.app.toggle_song_card(),
        _ => {}
    }
}

fn handle_mouse_event(mouse: MouseEvent, ctx: &mut Ctx<'_>) {
    let step = f64::from(ctx.settings.ui.scroll_step);
    match (ctx.app.page, mouse.kind) {
        (Page::Home, MouseEventKind::ScrollDown) => ctx.app.scroll_by(step),
        (Page::Home, MouseEventKind::ScrollUp) => ctx.app.scroll_by(-step),
        (Page::License, MouseEventKind::ScrollDown) => ctx.app.scroll_license(1),
        (Page::License, MouseEventKind::ScrollUp) => ctx.app.scroll_license(-1),
        (Page::Home, MouseEventKind::Down(MouseButton::Left)) => {
            if ctx.app.song_card.is_some() {
                ctx.app.toggle_song_card();
            } else if f64::from(mouse.row) < ctx.app.scroll.viewport_height {
                let now = ctx.state.now();
                ctx.app.select_at_row(mouse.row, now, ctx.audio);
            }
        }
        _ => {}
    }
}
