//! Shield tint and pulse alpha.

use serde::{Deserialize, Serialize};

/// Lowest alpha a shield colour may carry.
pub const MIN_ALPHA: f32 = 0.05;

/// Alpha used for the border tint.
pub const BORDER_ALPHA: f32 = 0.35;

/// RGBA tint of a shield, components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShieldColor {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha, at least [`MIN_ALPHA`].
    pub a: f32,
}

impl ShieldColor {
    /// Stock blue tint.
    pub const DEFAULT: Self = Self {
        r: 0.2,
        g: 0.45,
        b: 0.85,
        a: 1.0,
    };

    /// Build a colour, clamping every channel into range. Non-finite
    /// channels fall back to the default colour's value.
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        let d = Self::DEFAULT;
        Self {
            r: unit(r, d.r),
            g: unit(g, d.g),
            b: unit(b, d.b),
            a: unit(a, d.a).max(MIN_ALPHA),
        }
    }

    /// The same colour with every channel clamped.
    pub fn clamped(self) -> Self {
        Self::new(self.r, self.g, self.b, self.a)
    }

    /// Alpha used for region fill.
    pub fn base_alpha(&self) -> f32 {
        self.a.clamp(MIN_ALPHA, 1.0)
    }

    /// The colour used for border cells.
    pub fn border_color(&self) -> Self {
        Self {
            a: BORDER_ALPHA,
            ..*self
        }
    }

    /// Fill alpha at animation time `t` seconds:
    /// `base * 0.25 * (0.85 + 0.15 * sin(0.9 t))`.
    pub fn pulse_alpha(&self, t: f32) -> f32 {
        self.base_alpha() * 0.25 * (0.85 + 0.15 * (0.9 * t).sin())
    }

    /// Channel bit patterns, for content hashing.
    pub fn to_bits(&self) -> [u32; 4] {
        [
            self.r.to_bits(),
            self.g.to_bits(),
            self.b.to_bits(),
            self.a.to_bits(),
        ]
    }
}

impl Default for ShieldColor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn unit(v: f32, fallback: f32) -> f32 {
    if v.is_finite() {
        v.clamp(0.0, 1.0)
    } else {
        fallback
    }
}
