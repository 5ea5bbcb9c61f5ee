//! Layer colours: a stable base colour per cover and CSS-style filters on top.

use ratatui::style::Color;

use crate::layers::LayerFilter;

/// Linear RGB with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
        }
    }

    fn clamped(self) -> Self {
        self.map(|c| c.clamp(0.0, 1.0))
    }

    pub fn mix(self, other: Rgb, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    pub fn luminance(self) -> f64 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        let c = c.clamped();
        let byte = |v: f64| (v * 255.0).round() as u8;
        Color::Rgb(byte(c.r), byte(c.g), byte(c.b))
    }
}

fn fnv1a(s: &str) -> u64 {
    s.bytes().fold(0xcbf2_9ce4_8422_2325, |h, b| {
        (h ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
    })
}

fn hsl(h: f64, s: f64, l: f64) -> Rgb {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = (h / 60.0) % 6.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    Rgb {
        r: r + m,
        g: g + m,
        b: b + m,
    }
}

/// Stable base colour for a cover locator.
pub fn seed_color(seed: &str) -> Rgb {
    let hue = (fnv1a(seed) % 360) as f64;
    hsl(hue, 0.45, 0.38)
}

fn saturate(c: Rgb, s: f64) -> Rgb {
    Rgb {
        r: (0.213 + 0.787 * s) * c.r + (0.715 - 0.715 * s) * c.g + (0.072 - 0.072 * s) * c.b,
        g: (0.213 - 0.213 * s) * c.r + (0.715 + 0.285 * s) * c.g + (0.072 - 0.072 * s) * c.b,
        b: (0.213 - 0.213 * s) * c.r + (0.715 - 0.715 * s) * c.g + (0.072 + 0.928 * s) * c.b,
    }
}

fn sepia(c: Rgb, amount: f64) -> Rgb {
    let k = 1.0 - amount.clamp(0.0, 1.0);
    Rgb {
        r: (0.393 + 0.607 * k) * c.r + (0.769 - 0.769 * k) * c.g + (0.189 - 0.189 * k) * c.b,
        g: (0.349 - 0.349 * k) * c.r + (0.686 + 0.314 * k) * c.g + (0.168 - 0.168 * k) * c.b,
        b: (0.272 - 0.272 * k) * c.r + (0.534 - 0.534 * k) * c.g + (0.131 + 0.869 * k) * c.b,
    }
}

/// Apply `filter` the way a browser applies `brightness saturate contrast sepia`.
pub fn apply(c: Rgb, filter: &LayerFilter) -> Rgb {
    let c = c.map(|v| v * filter.brightness).clamped();
    let c = saturate(c, filter.saturate).clamped();
    let c = c.map(|v| (v - 0.5) * filter.contrast + 0.5).clamped();
    sepia(c, filter.sepia).clamped()
}

/// Readable text colour over `bg`.
pub fn ink_for(bg: Rgb) -> Rgb {
    if bg.luminance() > 0.55 {
        Rgb {
            r: 0.08,
            g: 0.08,
            b: 0.1,
        }
    } else {
        Rgb::WHITE
    }
}
