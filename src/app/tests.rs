use super::*;
use crate::audio::{AudioError, AudioOutput};
use crate::config::Settings;
use crate::content::{ContentSource, LoadState, load_landing};
use crate::playback::{PlaybackEvent, TrackPhase, VisualPhase};
use serde_json::{Value, json};
use std::cell::Cell;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[derive(Default)]
struct SilentOutput {
    playing: Option<usize>,
}

impl AudioOutput for SilentOutput {
    fn play(&mut self, index: usize) -> Result<(), AudioError> {
        self.playing = Some(index);
        Ok(())
    }

    fn stop(&mut self) {
        self.playing = None;
    }

    fn finished(&self) -> bool {
        false
    }
}

struct Docs {
    songs: Value,
    license: Value,
    license_reads: Cell<usize>,
}

impl Docs {
    fn with_songs(songs: Value) -> Self {
        Self {
            songs,
            license: json!({ "error": "Failed to load license data" }),
            license_reads: Cell::new(0),
        }
    }
}

impl ContentSource for Docs {
    fn songs(&self) -> Value {
        self.songs.clone()
    }

    fn profile(&self) -> Value {
        json!({ "name": "Mika", "contact": { "email": "mika@example.org" } })
    }

    fn license(&self) -> Value {
        self.license_reads.set(self.license_reads.get() + 1);
        self.license.clone()
    }
}

fn two_section_license() -> Value {
    json!({
        "title": "Usage Terms",
        "lastUpdated": "2025-01-20",
        "sections": [
            { "id": "a", "title": "Personal", "content": "one\ntwo" },
            { "id": "b", "title": "Videos", "content": "three" }
        ],
        "contact": { "email": "mika@example.org" }
    })
}

fn songs(n: usize) -> Value {
    Value::Array(
        (0..n)
            .map(|i| json!({ "title": format!("Song {i}"), "artist": "Mika" }))
            .collect(),
    )
}

fn app_with(source: &Docs) -> App {
    let mut app = App::new(&Settings::default(), 40);
    app.set_landing(load_landing(source));
    app
}

#[test]
fn catalog_message_counts_loaded_tracks() {
    assert_eq!(
        app_with(&Docs::with_songs(songs(3))).catalog_message(),
        Some("3 tracks found".to_string())
    );
    assert_eq!(
        app_with(&Docs::with_songs(songs(0))).catalog_message(),
        Some("No tracks yet".to_string())
    );
}

#[test]
fn error_catalog_never_reports_tracks_found() {
    let app = app_with(&Docs::with_songs(json!({ "error": "Failed to load songs" })));
    assert!(matches!(app.landing, LoadState::Failed(_)));
    assert_eq!(app.catalog_message(), None);
    assert!(app.tracks().is_empty());
    assert_eq!(app.max_scroll(), 0.0);
    assert_eq!(app.visible_layer(), None);
}

#[test]
fn loading_state_has_no_message() {
    let app = App::new(&Settings::default(), 40);
    assert_eq!(app.landing, LoadState::Loading);
    assert_eq!(app.catalog_message(), None);
}

#[test]
fn profile_comes_with_the_landing_content() {
    let app = app_with(&Docs::with_songs(songs(1)));
    assert_eq!(app.profile().map(|p| p.name.as_str()), Some("Mika"));
}

#[test]
fn selecting_glides_to_the_layer_start() {
    let mut app = app_with(&Docs::with_songs(songs(3)));
    let mut out = SilentOutput::default();

    app.select(2, ms(0), &mut out);
    assert!(app.is_smooth_scrolling());
    app.tick(ms(200), &mut out);
    assert!(app.scroll.offset > 0.0 && app.scroll.offset < 80.0);
    app.tick(ms(400), &mut out);
    assert_eq!(app.scroll.offset, 80.0);
    assert!(!app.is_smooth_scrolling());
    assert_eq!(app.visible_layer(), Some(2));
}

#[test]
fn manual_scroll_cancels_the_glide() {
    let mut app = app_with(&Docs::with_songs(songs(3)));
    let mut out = SilentOutput::default();

    app.select(2, ms(0), &mut out);
    app.tick(ms(100), &mut out);
    let reached = app.scroll.offset;
    app.scroll_by(-2.0);
    assert!(!app.is_smooth_scrolling());
    app.tick(ms(400), &mut out);
    assert_eq!(app.scroll.offset, (reached - 2.0).max(0.0));
}

#[test]
fn toggling_off_does_not_scroll() {
    let mut app = app_with(&Docs::with_songs(songs(2)));
    let mut out = SilentOutput::default();

    app.select(0, ms(0), &mut out);
    app.tick(ms(400), &mut out);
    app.scroll_to(10.0);
    app.select(0, ms(500), &mut out);
    assert!(!app.is_smooth_scrolling());
    assert_eq!(app.scroll.offset, 10.0);
}

#[test]
fn tick_reports_playback_transitions() {
    let mut app = app_with(&Docs::with_songs(songs(2)));
    let mut out = SilentOutput::default();

    app.select_visible(ms(0), &mut out);
    let events = app.tick(ms(300), &mut out);
    assert_eq!(
        events,
        vec![
            PlaybackEvent::Starting { index: 0 },
            PlaybackEvent::Playing { index: 0 },
        ]
    );
    assert_eq!(out.playing, Some(0));
}

#[test]
fn darkened_layer_view_multiplies_the_scroll_brightness() {
    let mut app = app_with(&Docs::with_songs(songs(2)));
    let mut out = SilentOutput::default();

    app.select(1, ms(0), &mut out);
    app.tick(ms(300), &mut out);
    let before = app.layer_view(1, ms(1299));
    let after = app.layer_view(1, ms(1300));
    assert_eq!(before.visual, VisualPhase::Normal);
    assert_eq!(after.visual, VisualPhase::Darkened);
    assert!((after.filter.brightness - before.filter.brightness * 0.55).abs() < 1e-12);
    assert_eq!(after.phase, TrackPhase::Playing);
}

#[test]
fn click_selects_the_layer_under_the_pointer() {
    let mut app = app_with(&Docs::with_songs(songs(3)));
    let mut out = SilentOutput::default();

    app.scroll_to(10.0);
    app.select_at_row(5, ms(0), &mut out);
    assert_eq!(app.playback.active_index(), Some(1));
}

#[test]
fn cancel_is_only_consumed_while_a_track_runs() {
    let mut app = app_with(&Docs::with_songs(songs(2)));
    let mut out = SilentOutput::default();

    assert!(!app.cancel(ms(0), &mut out));
    app.select(0, ms(0), &mut out);
    assert!(app.cancel(ms(10), &mut out));
    assert!(!app.cancel(ms(20), &mut out));
}

#[test]
fn license_is_fetched_once_on_first_visit() {
    let docs = Docs::with_songs(songs(1));
    let mut app = app_with(&docs);
    assert_eq!(app.license, None);

    app.open_page(Page::Contact, &docs);
    assert_eq!(docs.license_reads.get(), 0);

    app.open_page(Page::License, &docs);
    app.open_page(Page::Home, &docs);
    app.open_page(Page::License, &docs);
    assert_eq!(docs.license_reads.get(), 1);
    assert!(matches!(app.license, Some(LoadState::Failed(_))));
}

#[test]
fn resize_keeps_the_offset_inside_the_document() {
    let mut app = app_with(&Docs::with_songs(songs(2)));
    app.scroll_to(80.0);
    app.on_resize(20);
    assert_eq!(app.scroll.offset, 40.0);
    assert_eq!(app.max_scroll(), 40.0);
}

#[test]
fn song_card_toggles_for_the_visible_layer() {
    let mut app = app_with(&Docs::with_songs(songs(2)));
    app.scroll_to(45.0);
    app.toggle_song_card();
    assert_eq!(
        app.song_card,
        Some(SongCard {
            index: 1,
            duration: None
        })
    );
    app.toggle_song_card();
    assert_eq!(app.song_card, None);
}

#[test]
fn cover_key_falls_back_to_the_title() {
    let app = app_with(&Docs::with_songs(songs(1)));
    let mut track = app.tracks()[0].clone();
    assert_eq!(app.cover_key(&track), "Song 0");
    track.cover_image_path = "/images/a.jpg".into();
    assert_eq!(app.cover_key(&track), "/images/a.jpg");
}

#[test]
fn license_scroll_stops_at_the_last_line() {
    let mut docs = Docs::with_songs(songs(1));
    docs.license = two_section_license();
    let mut app = app_with(&docs);

    // Before the page is opened there is nothing to scroll.
    app.scroll_license(5);
    assert_eq!(app.license_scroll, 0);

    app.open_page(Page::License, &docs);
    app.scroll_license(100);
    assert_eq!(app.license_scroll, 11);
    app.scroll_license(-1);
    assert_eq!(app.license_scroll, 10);
    app.scroll_license(-100);
    assert_eq!(app.license_scroll, 0);
}
