//! Pure scroll-to-visual derivations for the parallax layers.
//!
//! Layer `i` is one viewport tall and starts at offset `i * h`. Every function
//! here takes the scroll state (plus the layer index) and returns a value; none
//! of them touch playback state, which is composed on top by the caller.

use crate::config::LayerSettings;
use crate::motion::ease_out_cubic;
use crate::scroll::ScrollState;

/// Colour adjustments applied to a layer's background, CSS-filter style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerFilter {
    pub brightness: f64,
    pub saturate: f64,
    pub contrast: f64,
    pub sepia: f64,
}

impl LayerFilter {
    pub const NEUTRAL: LayerFilter = LayerFilter {
        brightness: 1.0,
        saturate: 1.0,
        contrast: 1.0,
        sepia: 0.0,
    };

    /// Compose the playback darken multiplier with the scroll-derived brightness.
    pub fn darkened(self, multiplier: f64) -> Self {
        Self {
            brightness: self.brightness * multiplier,
            ..self
        }
    }
}

/// Scroll offset at which layer `index` fills the viewport.
pub fn layer_start(index: usize, viewport_height: f64) -> f64 {
    index as f64 * viewport_height
}

/// End of the neutral band of layer `index`.
pub fn reveal_end(index: usize, viewport_height: f64, settings: &LayerSettings) -> f64 {
    layer_start(index, viewport_height) + viewport_height * settings.reveal_fraction
}

/// Downward translation of layer `index`.
///
/// The first layer moves with the page; later layers stay pinned until the
/// scroll reaches their start.
pub fn translation(state: &ScrollState, index: usize) -> f64 {
    if index == 0 {
        state.offset
    } else {
        (state.offset - layer_start(index, state.viewport_height)).max(0.0)
    }
}

/// Three-region filter of layer `index`: dimmed before its start, neutral
/// through the reveal band, then fading towards a bright, washed-out look.
pub fn layer_filter(state: &ScrollState, index: usize, settings: &LayerSettings) -> LayerFilter {
    let h = state.viewport_height;
    if h <= 0.0 {
        return LayerFilter::NEUTRAL;
    }

    let s = state.offset;
    let start = layer_start(index, h);
    let end = reveal_end(index, h, settings);

    if s < start {
        let darkness = ((start - s) / h).max(0.0);
        let brightness = (1.0 - darkness * settings.darken_depth).max(settings.min_brightness);
        return LayerFilter {
            brightness,
            ..LayerFilter::NEUTRAL
        };
    }

    if s <= end {
        return LayerFilter::NEUTRAL;
    }

    let max_fade = h * settings.fade_distance_fraction;
    let progress = ((s - end) / max_fade).min(1.0);
    let eased = ease_out_cubic(progress);
    LayerFilter {
        brightness: 1.0 + (settings.peak_brightness - 1.0) * eased,
        saturate: 1.0 - (1.0 - settings.min_saturation) * eased,
        contrast: 1.0 - (1.0 - settings.faded_contrast) * eased,
        sepia: settings.faded_sepia * eased,
    }
}

/// Downward translation of the profile section that follows `layers` layers.
pub fn profile_translation(state: &ScrollState, layers: usize, settings: &LayerSettings) -> f64 {
    (state.offset - layer_start(layers, state.viewport_height)).max(0.0) * settings.profile_parallax
}

/// Index of the layer currently filling the viewport, if any.
pub fn layer_at(state: &ScrollState, layers: usize) -> Option<usize> {
    if layers == 0 {
        return None;
    }
    if state.viewport_height <= 0.0 {
        return Some(0);
    }
    let i = (state.offset / state.viewport_height).floor().max(0.0) as usize;
    Some(i.min(layers - 1))
}

/// Topmost layer covering screen `row` (rows counted from the viewport top).
///
/// Layer 0 is drawn above layer 1 and so on; a layer covers everything below
/// its translated top edge.
///
/// Edges are rounded to whole rows the way they are drawn.
pub fn layer_at_row(state: &ScrollState, layers: usize, row: f64) -> Option<usize> {
    (0..layers).find(|&i| {
        let top = translation(state, i).round();
        row >= top && top < state.viewport_height
    })
}
