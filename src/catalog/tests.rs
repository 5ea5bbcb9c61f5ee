use super::*;
use std::path::{Path, PathBuf};
use std::time::Duration;

fn track(title: &str) -> Track {
    Track {
        title: title.into(),
        artist: "noiseOK".into(),
        album: "Happy Ending".into(),
        release_date: "2024-05-01".into(),
        genre: "Vocaloid".into(),
        tags: " pop, ,synth ,live".into(),
        ..Track::default()
    }
}

#[test]
fn tag_list_trims_and_drops_empties() {
    assert_eq!(track("A").tag_list(), vec!["pop", "synth", "live"]);
    assert!(Track::default().tag_list().is_empty());
}

#[test]
fn locators_fall_back_when_blank() {
    let mut t = track("A");
    assert_eq!(t.cover_or(Some("/images/covers/42.jpg")), Some("/images/covers/42.jpg"));
    assert_eq!(t.audio_or(None), None);
    t.audio_path = " /audio/a.wav ".into();
    assert_eq!(t.audio_or(Some("/audio/default.wav")), Some("/audio/a.wav"));
}

#[test]
fn format_mss_pads_seconds_only() {
    assert_eq!(format_mss(Duration::from_secs(0)), "0:00");
    assert_eq!(format_mss(Duration::from_secs(65)), "1:05");
    assert_eq!(format_mss(Duration::from_millis(754_900)), "12:34");
}

#[test]
fn byline_skips_blank_parts() {
    assert_eq!(byline(&track("A")), "noiseOK • Happy Ending");
    let mut t = track("A");
    t.album.clear();
    assert_eq!(byline(&t), "noiseOK");
}

#[test]
fn info_lines_list_title_then_labelled_fields() {
    let mut t = track("Askey");
    t.album = "  ".into();
    assert_eq!(
        info_lines(&t),
        vec!["Askey".to_string(), "Artist: noiseOK".into(), "Genre: Vocaloid".into()]
    );
}

#[test]
fn song_card_prefers_probed_duration_and_lists_links() {
    let mut t = track("Askey");
    t.duration = "4:00".into();
    t.original_tracks = "Theme A".into();
    t.download_url = "https://example.com/dl".into();

    let card = song_card_text(&t, Some(Duration::from_secs(125)));
    assert!(card.starts_with("Askey  [2:05]"));
    assert!(card.contains("[Vocaloid] #pop #synth #live"));
    assert!(card.contains("Original: Theme A"));
    assert!(card.contains("Download: https://example.com/dl"));
    assert!(!card.contains("Listen:"));
    assert!(card.ends_with("Released: 2024-05-01"));

    let card = song_card_text(&t, None);
    assert!(card.starts_with("Askey  [4:00]"));
}

#[test]
fn resolve_joins_site_paths_under_the_media_root() {
    let root = Path::new("/srv/public");
    assert_eq!(
        resolve(root, "/audio/a.wav"),
        Some(PathBuf::from("/srv/public/audio/a.wav"))
    );
    assert_eq!(resolve(root, "images/x.jpg"), Some(PathBuf::from("/srv/public/images/x.jpg")));
    assert_eq!(resolve(root, "https://cdn.example.com/a.wav"), None);
    assert_eq!(resolve(root, "  "), None);
}

#[test]
fn probe_duration_is_none_for_non_audio() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("fake.wav");
    std::fs::write(&p, b"not a real wav").unwrap();
    assert_eq!(probe_duration(&p), None);
    assert_eq!(probe_duration(&dir.path().join("missing.wav")), None);
}

#[test]
fn duplicate_titles_reports_each_once() {
    let tracks = vec![track("A"), track("B"), track("A"), track("A"), track("B"), track("C")];
    assert_eq!(duplicate_titles(&tracks), vec!["A", "B"]);
}
