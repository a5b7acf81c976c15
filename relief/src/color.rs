//! RGB and HSL color representations.
//!
//! Hue is kept in sector units: one unit per 60°, so a full turn is
//! [`HUE_TURN`] and every hue lies in `[0, 6)`.

/// Number of hue units in a full turn of the color wheel.
pub const HUE_TURN: f64 = 6.0;

const CHANNEL_MAX: f64 = 255.0;

/// An 8-bit per channel color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: u8::MAX }
    }

    /// Returns this color with alpha forced to fully opaque.
    pub const fn to_opaque(self) -> Self {
        Self { a: u8::MAX, ..self }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 3]> for Rgba {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::opaque(r, g, b)
    }
}

/// A color in hue/saturation/lightness space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsla {
    /// Hue in sector units, `[0, 6)`.
    pub h: f64,
    /// Saturation, `[0, 1]`.
    pub s: f64,
    /// Lightness, `[0, 1]`.
    pub l: f64,
    /// Alpha, `[0, 1]`.
    pub a: f64,
}

impl From<Rgba> for Hsla {
    fn from(Rgba { r, g, b, a }: Rgba) -> Self {
        let (r, g, b) = (f64::from(r), f64::from(g), f64::from(b));
        let min = r.min(g).min(b);
        let max = r.max(g).max(b);

        let (h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let chroma = max - min;
            // Ties on the smallest channel resolve in blue, red, green
            // order, which lands primaries and secondaries on their
            // exact sector boundary.
            let h = if b <= r && b <= g {
                (g - r) / chroma + 1.0
            } else if r <= g && r <= b {
                (b - g) / chroma + 3.0
            } else {
                (r - b) / chroma + 5.0
            };
            let s = chroma / (CHANNEL_MAX - (max + min - CHANNEL_MAX).abs());
            (h, s)
        };

        Self {
            h,
            s,
            l: (max + min) / 2.0 / CHANNEL_MAX,
            a: f64::from(a) / CHANNEL_MAX,
        }
    }
}

impl From<Hsla> for Rgba {
    fn from(Hsla { h, s, l, a }: Hsla) -> Self {
        let spread = s * (1.0 - (2.0 * l - 1.0).abs()) / 2.0;
        let max = l + spread;
        let min = l - spread;
        let span = max - min;
        let h = h.rem_euclid(HUE_TURN);

        let (r, g, b) = if h < 1.0 {
            (max, min + span * h, min)
        } else if h < 2.0 {
            (min + span * (2.0 - h), max, min)
        } else if h < 3.0 {
            (min, max, min + span * (h - 2.0))
        } else if h < 4.0 {
            (min, min + span * (4.0 - h), max)
        } else if h < 5.0 {
            (min + span * (h - 4.0), min, max)
        } else {
            (max, min, min + span * (HUE_TURN - h))
        };

        Self {
            r: to_channel(r),
            g: to_channel(g),
            b: to_channel(b),
            a: to_channel(a),
        }
    }
}

/// Scales a `[0, 1]` intensity to the nearest 8-bit channel value.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(v: f64) -> u8 {
    (v * CHANNEL_MAX).round().clamp(0.0, CHANNEL_MAX) as u8
}
