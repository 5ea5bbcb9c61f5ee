//! Viewport scroll tracking.

/// Current vertical scroll offset and viewport height, in terminal rows.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    pub offset: f64,
    pub viewport_height: f64,
}

impl ScrollState {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            offset: 0.0,
            viewport_height: viewport_height.max(0.0),
        }
    }

    /// Record a scroll event. The offset is kept inside `[0, max]`.
    pub fn on_scroll(&mut self, offset: f64, max: f64) {
        self.offset = offset.clamp(0.0, max.max(0.0));
    }

    pub fn scroll_by(&mut self, delta: f64, max: f64) {
        self.on_scroll(self.offset + delta, max);
    }

    /// Record a resize event; the offset is re-clamped against the new `max`.
    pub fn on_resize(&mut self, viewport_height: f64, max: f64) {
        self.viewport_height = viewport_height.max(0.0);
        self.on_scroll(self.offset, max);
    }
}

/// Largest offset for a page of `layers` full-height layers followed by one
/// viewport of trailing content.
pub fn max_offset(layers: usize, viewport_height: f64) -> f64 {
    layers as f64 * viewport_height
}
