use std::time::Duration;

use super::model::Track;

/// Format a duration as `m:ss` (minutes unpadded).
pub fn format_mss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// `artist • album`, skipping blank parts.
pub fn byline(track: &Track) -> String {
    [track.artist.trim(), track.album.trim()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" • ")
}

/// Lines of the info overlay shown on a playing layer.
pub fn info_lines(track: &Track) -> Vec<String> {
    let mut lines = vec![track.title.clone()];
    for (label, value) in [
        ("Artist", &track.artist),
        ("Album", &track.album),
        ("Genre", &track.genre),
    ] {
        let value = value.trim();
        if !value.is_empty() {
            lines.push(format!("{label}: {value}"));
        }
    }
    lines
}

/// Full text of the song card popup.
///
/// `duration` is the probed length of the audio file; when it is unknown the
/// sheet's free-text column is used, then `0:00`.
pub fn song_card_text(track: &Track, duration: Option<Duration>) -> String {
    let mut out: Vec<String> = Vec::new();

    let length = match duration {
        Some(d) => format_mss(d),
        None if !track.duration.trim().is_empty() => track.duration.trim().to_string(),
        None => format_mss(Duration::ZERO),
    };
    out.push(format!("{}  [{}]", track.title, length));

    let by = byline(track);
    if !by.is_empty() {
        out.push(by);
    }
    if !track.description.trim().is_empty() {
        out.push(String::new());
        out.push(track.description.trim().to_string());
    }

    let mut chips: Vec<String> = Vec::new();
    if !track.genre.trim().is_empty() {
        chips.push(format!("[{}]", track.genre.trim()));
    }
    chips.extend(track.tag_list().into_iter().map(|t| format!("#{t}")));
    if !chips.is_empty() {
        out.push(String::new());
        out.push(chips.join(" "));
    }

    if !track.original_tracks.trim().is_empty() {
        out.push(format!("Original: {}", track.original_tracks.trim()));
    }

    out.push(String::new());
    if !track.streaming_url.trim().is_empty() {
        out.push(format!("Listen: {}", track.streaming_url.trim()));
    }
    if !track.download_url.trim().is_empty() {
        out.push(format!("Download: {}", track.download_url.trim()));
    }
    out.push(format!("Released: {}", track.release_date.trim()));

    out.join("\n")
}
