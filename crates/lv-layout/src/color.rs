//! Value-to-color mapping.
//!
//! A two-stop gradient from a "low" to a "high" color, with a sub-linear
//! power curve (`ratio^0.4`) that pulls low-but-nonzero values toward the
//! high end early — near-zero regions stay visually distinct from true
//! zero. Total over its domain: zero maxima and non-finite inputs fall
//! back to the low color rather than producing an invalid channel.

use lv_core::Real;

/// An 8-bit sRGB triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColorRgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl ColorRgb {
    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Hex form `#rrggbb` as consumed by SVG/CSS renderers.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A fixed nonlinear two-stop gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Color at ratio 0 (and the `max_value == 0` fallback).
    pub low: ColorRgb,
    /// Color at ratio 1.
    pub high: ColorRgb,
    /// Power-curve exponent applied to the ratio before interpolation.
    pub gamma: Real,
}

impl Palette {
    /// Red → green, the default instance (`#ef4444` → `#22c55e`).
    pub const GREEN: Self = Self {
        low: ColorRgb::new(239, 68, 68),
        high: ColorRgb::new(34, 197, 94),
        gamma: 0.4,
    };

    /// Red → emerald variant (`#ef4444` → `#34d399`).
    pub const EMERALD: Self = Self {
        high: ColorRgb::new(52, 211, 153),
        ..Self::GREEN
    };

    /// Map `value` relative to `max_value` onto the gradient.
    ///
    /// `max_value == 0` short-circuits to the low color (guards the
    /// divide-by-zero when every value in the lattice is zero); non-finite
    /// values count as zero. The ratio is clamped to `[0, 1]` both before
    /// and after the power transform.
    pub fn color(&self, value: Real, max_value: Real) -> ColorRgb {
        if max_value == 0.0 {
            return self.low;
        }
        let value = if value.is_finite() { value } else { 0.0 };
        let mut ratio = value / max_value;
        if !ratio.is_finite() {
            ratio = 0.0;
        }
        let ratio = ratio.clamp(0.0, 1.0).powf(self.gamma).clamp(0.0, 1.0);
        ColorRgb {
            r: lerp(self.low.r, self.high.r, ratio),
            g: lerp(self.low.g, self.high.g, ratio),
            b: lerp(self.low.b, self.high.b, ratio),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::GREEN
    }
}

fn lerp(a: u8, b: u8, t: Real) -> u8 {
    (a as Real + (b as Real - a as Real) * t).round() as u8
}
