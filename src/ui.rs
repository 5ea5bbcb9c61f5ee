//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`. The
//! landing page is drawn back to front: parallax layers (last track first),
//! then the scrolling document (header, profile) on top, then popups.

mod palette;

use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::app::{App, LayerView, Page};
use crate::catalog::{Track, byline, info_lines, song_card_text};
use crate::config::UiSettings;
use crate::content::{License, LoadState, Profile};
use crate::playback::{TrackPhase, VisualPhase};

use palette::{Rgb, apply, ink_for, seed_color};

/// Rows of the landing header at the top of the document.
const HEADER_ROWS: u16 = 6;

const CONTROLS: &[(&str, &str)] = &[
    ("j/k", "scroll"),
    ("enter", "play/stop"),
    ("1-9", "play track"),
    ("space", "stop/page"),
    ("i", "song card"),
    ("L/c/h", "license/contact/home"),
    ("q", "quit"),
];

fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Split the terminal into the scrolling viewport and the one-row footer.
pub fn split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Height of the scrolling viewport for a terminal of `rows` rows.
pub fn viewport_height(rows: u16) -> u16 {
    rows.saturating_sub(1)
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10).min(r.width);
    height = height.min(r.height.saturating_sub(2)).max(5).min(r.height);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Rows of `area` that remain visible when its top edge moves to `top`
/// (relative, possibly negative), and how many rows were cut off above.
fn shifted(area: Rect, top: f64, height: u16) -> Option<(Rect, u16)> {
    let top = top.round();
    let bottom = top + f64::from(height);
    if bottom <= 0.0 || top >= f64::from(area.height) {
        return None;
    }
    let skipped = (-top).max(0.0) as u16;
    let y = top.max(0.0) as u16;
    let h = height
        .saturating_sub(skipped)
        .min(area.height.saturating_sub(y));
    Some((
        Rect {
            x: area.x,
            y: area.y + y,
            width: area.width,
            height: h,
        },
        skipped,
    ))
}

/// Render the entire UI into the provided `frame`.
pub fn draw(frame: &mut Frame, app: &App, ui: &UiSettings, now: Duration) {
    let (view, footer) = split(frame.area());

    match app.page {
        Page::Home => draw_landing(frame, app, ui, view, now),
        Page::License => draw_license(frame, app, view),
        Page::Contact => draw_contact(frame, app.profile(), view),
    }

    draw_footer(frame, app, footer);
}

fn draw_landing(frame: &mut Frame, app: &App, ui: &UiSettings, area: Rect, now: Duration) {
    let tracks = app.tracks();

    for index in (0..tracks.len()).rev() {
        let view = app.layer_view(index, now);
        let Some((rect, _)) = shifted(area, view.translate, area.height) else {
            continue;
        };
        let track = &tracks[index];
        draw_layer(frame, rect, &view, seed_color(app.cover_key(track)), index, track);
    }

    let offset = app.scroll.offset;
    if let Some((rect, skipped)) = shifted(area, -offset, HEADER_ROWS) {
        draw_header(frame, app, ui, rect, skipped);
    }

    let doc_top = tracks.len() as f64 * app.scroll.viewport_height;
    if let Some(profile) = app.profile() {
        let top = doc_top - offset + app.profile_translation();
        if let Some((rect, _)) = shifted(area, top, area.height) {
            draw_profile(frame, profile, rect);
        }
    }

    if let Some(card) = &app.song_card
        && let Some(track) = tracks.get(card.index)
    {
        let popup = centered_rect_sized(72, 16, area);
        frame.render_widget(Clear, popup);
        let body = Paragraph::new(song_card_text(track, card.duration))
            .block(
                Block::default()
                    .padding(Padding {
                        left: 1,
                        right: 1,
                        top: 0,
                        bottom: 0,
                    })
                    .borders(Borders::ALL)
                    .title(" song (i closes) "),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(body, popup);
    }
}

fn draw_layer(
    frame: &mut Frame,
    area: Rect,
    view: &LayerView,
    base: Rgb,
    index: usize,
    track: &Track,
) {
    let bg = apply(base, &view.filter);
    let ink = ink_for(bg);
    frame.render_widget(Block::default().style(Style::default().bg(Color::from(bg))), area);

    // The cover panel stands in for the background image; it shrinks as the
    // layer zooms from rest to active scale.
    let w = (f64::from(area.width) * 0.45 * view.scale).round() as u16;
    let h = (f64::from(area.height) * 0.45 * view.scale).round() as u16;
    let cover = centered_rect_sized(w, h, area);
    let panel = apply(base.mix(Rgb::WHITE, 0.18), &view.filter);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::from(bg.mix(ink, 0.35))))
            .style(Style::default().bg(Color::from(panel))),
        cover,
    );

    if area.height > 2 {
        let label = Line::from(vec![
            Span::raw(format!(" {} ", index + 1)).reversed(),
            Span::raw(format!(" {}", track.title)),
        ]);
        let row = Rect {
            y: area.y + area.height - 2,
            height: 1,
            ..area
        };
        frame.render_widget(
            Paragraph::new(label).style(Style::default().fg(Color::from(bg.mix(ink, 0.7)))),
            row,
        );
    }

    let indicator = match view.phase {
        TrackPhase::Starting => Some("◌ starting"),
        TrackPhase::Playing => Some("▮▮▮ playing"),
        _ => None,
    };
    if let Some(text) = indicator
        && area.height > 1
    {
        let row = Rect {
            x: area.x + 2,
            y: area.y + 1,
            width: area.width.saturating_sub(4),
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(Color::Black).bg(Color::White)),
            row,
        );
    }

    if view.visual == VisualPhase::InfoShown && view.info_opacity > 0.0 {
        let fg = bg.mix(ink, view.info_opacity);
        let lines: Vec<Line> = info_lines(track)
            .into_iter()
            .enumerate()
            .map(|(i, l)| {
                if i == 0 {
                    Line::from(l).bold()
                } else {
                    Line::from(l)
                }
            })
            .collect();
        let height = lines.len() as u16;
        let rect = centered_rect_sized(area.width.saturating_sub(4), height, area);
        let rect = Rect {
            height: height.min(rect.height),
            ..rect
        };
        frame.render_widget(
            Paragraph::new(Text::from(lines))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::from(fg))),
            rect,
        );
    }
}

fn draw_header(frame: &mut Frame, app: &App, ui: &UiSettings, area: Rect, skipped: u16) {
    let message = match &app.landing {
        LoadState::Loading => "Loading…".to_string(),
        LoadState::Failed(msg) => msg.clone(),
        LoadState::Ready(_) => app.catalog_message().unwrap_or_default(),
    };
    let lines = vec![
        Line::from(ui.header_text.as_str()).bold(),
        Line::from(ui.tagline.as_str()).italic(),
        Line::from("License [L]   Contact [c]").dim(),
        Line::default(),
        Line::from(message),
    ];
    let header = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Black).bg(Color::White))
        .block(Block::default().borders(Borders::BOTTOM))
        .scroll((skipped, 0));
    frame.render_widget(header, area);
}

fn profile_text(profile: &Profile) -> Text<'_> {
    let mut lines = vec![
        Line::from("Profile").bold().centered(),
        Line::default(),
        Line::from(profile.name.as_str()).bold(),
    ];
    if !profile.bio.trim().is_empty() {
        lines.push(Line::from(profile.bio.trim()));
    }
    if !profile.genres.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(format!("Genres: {}", profile.genres.join(", "))));
    }
    if !profile.equipment.trim().is_empty() {
        lines.push(Line::from(format!("Equipment: {}", profile.equipment.trim())));
    }
    let links = profile.contact.links();
    if !links.is_empty() {
        lines.push(Line::default());
        for (label, target) in links {
            lines.push(Line::from(format!("{label}: {target}")));
        }
    }
    Text::from(lines)
}

fn draw_profile(frame: &mut Frame, profile: &Profile, area: Rect) {
    let text = profile_text(profile);
    let height = text.height() as u16 + 2;
    let card = centered_rect_sized(76, height, area);
    frame.render_widget(Clear, card);
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(Color::Black).bg(Color::White))
            .block(Block::bordered().padding(Padding::horizontal(1)))
            .wrap(Wrap { trim: true }),
        card,
    );
}

fn license_text(license: &License) -> Text<'_> {
    let mut lines = vec![
        Line::from(license.title.as_str()).bold(),
        Line::from(format!("Last updated: {}", license.last_updated)).dim(),
    ];
    for (i, section) in license.sections.iter().enumerate() {
        lines.push(Line::default());
        lines.push(Line::from(format!("{}. {}", i + 1, section.title)).bold());
        lines.extend(section.content.lines().map(Line::from));
    }
    let rows = license.contact_rows();
    if !rows.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from("Contact").bold());
        lines.extend(rows.into_iter().map(|(label, v)| Line::from(format!("{label}: {v}"))));
    }
    Text::from(lines)
}

fn draw_license(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::bordered()
        .title(" license (h back) ")
        .padding(Padding::horizontal(1));
    let body = match &app.license {
        None | Some(LoadState::Loading) => Paragraph::new("Loading…"),
        Some(LoadState::Failed(msg)) => Paragraph::new(msg.as_str()).red(),
        Some(LoadState::Ready(license)) => {
            Paragraph::new(license_text(license)).scroll((app.license_scroll, 0))
        }
    };
    frame.render_widget(body.block(block).wrap(Wrap { trim: false }), area);
}

fn draw_contact(frame: &mut Frame, profile: Option<&Profile>, area: Rect) {
    let block = Block::bordered()
        .title(" contact (h back) ")
        .padding(Padding::horizontal(1));
    let text = match profile {
        Some(p) if !p.contact.links().is_empty() => {
            let mut lines = vec![Line::from(p.name.as_str()).bold(), Line::default()];
            lines.extend(
                p.contact
                    .links()
                    .into_iter()
                    .map(|(label, target)| Line::from(format!("{label}: {target}"))),
            );
            Text::from(lines)
        }
        _ => Text::from("No contact details available"),
    };
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut parts: Vec<String> = Vec::new();
    if let Some(i) = app.playback.active_index()
        && let Some(track) = app.tracks().get(i)
    {
        let by = byline(track);
        if by.is_empty() {
            parts.push(format!("♪ {}", track.title));
        } else {
            parts.push(format!("♪ {} ({by})", track.title));
        }
    }
    parts.push(controls_text());
    frame.render_widget(Paragraph::new(parts.join(" • ")).reversed(), area);
}
