//! Application model types: `App`, `Page` and the per-layer `LayerView`.
//!
//! Every method taking `now` expects the time elapsed since the runtime's
//! epoch; the model never reads the clock itself.

use std::path::PathBuf;
use std::time::Duration;

use crate::audio::AudioOutput;
use crate::catalog::{self, Track};
use crate::config::{DataSettings, LayerSettings, MotionSettings, Settings};
use crate::content::{ContentSource, Landing, License, LoadState, Profile, load_license_page};
use crate::layers::{self, LayerFilter};
use crate::motion::Tween;
use crate::playback::{PlaybackController, PlaybackEvent, TrackPhase, VisualPhase};
use crate::scroll::{ScrollState, max_offset};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    License,
    Contact,
}

/// Everything the renderer needs to draw one layer at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerView {
    /// Rows the layer has slid down from the viewport top.
    pub translate: f64,
    pub filter: LayerFilter,
    pub scale: f64,
    pub phase: TrackPhase,
    pub visual: VisualPhase,
    pub info_opacity: f64,
}

/// The song card popup: which track and its probed audio length.
#[derive(Debug, Clone, PartialEq)]
pub struct SongCard {
    pub index: usize,
    pub duration: Option<Duration>,
}

/// The main application model.
pub struct App {
    pub page: Page,
    pub landing: LoadState<Landing>,
    /// `None` until the license page is first opened.
    pub license: Option<LoadState<License>>,
    pub scroll: ScrollState,
    pub playback: PlaybackController,
    pub song_card: Option<SongCard>,
    pub license_scroll: u16,

    scroll_anim: Option<Tween>,
    layer_settings: LayerSettings,
    motion: MotionSettings,
    data: DataSettings,
}

impl App {
    pub fn new(settings: &Settings, viewport_height: u16) -> Self {
        Self {
            page: Page::Home,
            landing: LoadState::Loading,
            license: None,
            scroll: ScrollState::new(f64::from(viewport_height)),
            playback: PlaybackController::new(0, settings.motion.clone()),
            song_card: None,
            license_scroll: 0,
            scroll_anim: None,
            layer_settings: settings.layers.clone(),
            motion: settings.motion.clone(),
            data: settings.data.clone(),
        }
    }

    /// Install the landing content and rebuild playback state for its tracks.
    pub fn set_landing(&mut self, landing: LoadState<Landing>) {
        let count = landing.ready().map_or(0, |l| l.tracks.len());
        self.landing = landing;
        self.playback = PlaybackController::new(count, self.motion.clone());
        self.song_card = None;
        self.scroll_anim = None;
        let max = self.max_scroll();
        self.scroll.on_scroll(self.scroll.offset, max);
    }

    pub fn tracks(&self) -> &[Track] {
        self.landing.ready().map_or(&[], |l| l.tracks.as_slice())
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.landing.ready().and_then(|l| l.profile.as_ref())
    }

    /// Header line about the catalog; only shown once it loaded.
    pub fn catalog_message(&self) -> Option<String> {
        match self.landing.ready()?.tracks.len() {
            0 => Some("No tracks yet".to_string()),
            n => Some(format!("{n} tracks found")),
        }
    }

    pub fn max_scroll(&self) -> f64 {
        max_offset(self.tracks().len(), self.scroll.viewport_height)
    }

    pub fn on_resize(&mut self, viewport_height: u16) {
        let h = f64::from(viewport_height);
        let max = max_offset(self.tracks().len(), h);
        self.scroll.on_resize(h, max);
        self.scroll_anim = None;
    }

    /// Manual scroll; cancels any smooth scroll in flight.
    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_anim = None;
        let max = self.max_scroll();
        self.scroll.scroll_by(delta, max);
    }

    pub fn scroll_to(&mut self, offset: f64) {
        self.scroll_anim = None;
        let max = self.max_scroll();
        self.scroll.on_scroll(offset, max);
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.scroll.viewport_height);
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-self.scroll.viewport_height);
    }

    pub fn is_smooth_scrolling(&self) -> bool {
        self.scroll_anim.is_some()
    }

    /// Whether the next frames will differ from the current one without input.
    pub fn is_animating(&self, now: Duration) -> bool {
        self.is_smooth_scrolling() || !self.playback.is_settled(now)
    }

    /// The layer filling the viewport.
    pub fn visible_layer(&self) -> Option<usize> {
        layers::layer_at(&self.scroll, self.tracks().len())
    }

    /// Select track `index` and, when it starts, glide to its layer.
    pub fn select(&mut self, index: usize, now: Duration, audio: &mut dyn AudioOutput) {
        self.playback.select(index, now, audio);
        if self.playback.phase(index) == TrackPhase::Starting {
            let target = layers::layer_start(index, self.scroll.viewport_height)
                .min(self.max_scroll());
            self.scroll_anim = Some(Tween::new(
                self.scroll.offset,
                target,
                now,
                self.motion.scroll_duration(),
            ));
        }
    }

    pub fn select_visible(&mut self, now: Duration, audio: &mut dyn AudioOutput) {
        if let Some(i) = self.visible_layer() {
            self.select(i, now, audio);
        }
    }

    /// Mouse click on viewport row `row`.
    pub fn select_at_row(&mut self, row: u16, now: Duration, audio: &mut dyn AudioOutput) {
        let hit = layers::layer_at_row(&self.scroll, self.tracks().len(), f64::from(row));
        if let Some(i) = hit {
            self.select(i, now, audio);
        }
    }

    /// The cancel input. True when consumed by playback.
    pub fn cancel(&mut self, now: Duration, audio: &mut dyn AudioOutput) -> bool {
        self.playback.cancel(now, audio)
    }

    /// Per-frame update. Returns the playback transitions since the last frame.
    pub fn tick(&mut self, now: Duration, audio: &mut dyn AudioOutput) -> Vec<PlaybackEvent> {
        self.playback.tick(now, audio);

        if let Some(anim) = self.scroll_anim {
            let max = self.max_scroll();
            self.scroll.on_scroll(anim.value_at(now), max);
            if anim.is_finished(now) {
                self.scroll_anim = None;
            }
        }

        self.playback.drain_events()
    }

    pub fn layer_view(&self, index: usize, now: Duration) -> LayerView {
        let visual = self.playback.visual_phase(index, now);
        let mut filter = layers::layer_filter(&self.scroll, index, &self.layer_settings);
        if visual >= VisualPhase::Darkened {
            filter = filter.darkened(self.layer_settings.active_darken);
        }
        LayerView {
            translate: layers::translation(&self.scroll, index),
            filter,
            scale: self.playback.scale(index, now),
            phase: self.playback.phase(index),
            visual,
            info_opacity: self.playback.info_opacity(index, now),
        }
    }

    pub fn profile_translation(&self) -> f64 {
        layers::profile_translation(&self.scroll, self.tracks().len(), &self.layer_settings)
    }

    /// Local file behind a track's audio locator, with the configured fallback.
    pub fn audio_file(&self, track: &Track) -> Option<PathBuf> {
        track
            .audio_or(self.data.default_audio.as_deref())
            .and_then(|loc| catalog::resolve(&self.data.media_root, loc))
    }

    /// What a layer's colour derives from: its cover locator, the configured
    /// default cover, or the title.
    pub fn cover_key<'a>(&'a self, track: &'a Track) -> &'a str {
        track
            .cover_or(self.data.default_cover.as_deref())
            .unwrap_or(&track.title)
    }

    /// Open the song card for the visible layer, or close it.
    pub fn toggle_song_card(&mut self) {
        if self.song_card.take().is_some() {
            return;
        }
        let Some(index) = self.visible_layer() else {
            return;
        };
        let duration = self
            .tracks()
            .get(index)
            .and_then(|t| self.audio_file(t))
            .and_then(|p| catalog::probe_duration(&p));
        self.song_card = Some(SongCard { index, duration });
    }

    /// Switch pages. The license document is fetched on first visit only.
    pub fn open_page(&mut self, page: Page, source: &dyn ContentSource) {
        if page == Page::License && self.license.is_none() {
            self.license = Some(load_license_page(source));
        }
        if page != Page::Home {
            self.song_card = None;
        }
        self.license_scroll = 0;
        self.page = page;
    }

    /// Scroll the license page, keeping its last line on screen.
    pub fn scroll_license(&mut self, delta: i16) {
        let lines = self
            .license
            .as_ref()
            .and_then(LoadState::ready)
            .map_or(0, License::line_count);
        let last = u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX);
        self.license_scroll = self.license_scroll.saturating_add_signed(delta).min(last);
    }
}
