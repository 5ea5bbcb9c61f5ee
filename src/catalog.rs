//! Song catalog: the track record, its text renderings and media lookups.

mod display;
mod media;
mod model;

pub use display::{byline, format_mss, info_lines, song_card_text};
pub use media::{probe_duration, resolve};
pub use model::Track;

/// Titles that appear more than once, in first-seen order.
pub fn duplicate_titles(tracks: &[Track]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    let mut dups: Vec<&str> = Vec::new();
    for t in tracks {
        let title = t.title.as_str();
        if seen.contains(&title) {
            if !dups.contains(&title) {
                dups.push(title);
            }
        } else {
            seen.push(title);
        }
    }
    dups
}

#[cfg(test)]
mod tests;
