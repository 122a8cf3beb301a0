//! RGB colors with clamped channel arithmetic
//!
//! Every construction from a wider integer or a real goes through
//! [`clamp_intensity`], so a `Color` can never hold an out-of-range channel.
//! Non-color images are never coerced implicitly: the adapters at the bottom of
//! this module are mapped over them explicitly before display.

use crate::math::{clamp_intensity, intensity_from_f64};

/// An opaque RGB color with 8-bit channels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red intensity
    pub red: u8,
    /// Green intensity
    pub green: u8,
    /// Blue intensity
    pub blue: u8,
}

impl Color {
    /// Black
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// White
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Pure red
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Pure green
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Pure blue
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Yellow
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    /// Cyan
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    /// Magenta
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);

    /// Create a color from in-range channels
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a color from arbitrary integer intensities, clamping each channel
    pub const fn clamped(red: i64, green: i64, blue: i64) -> Self {
        Self {
            red: clamp_intensity(red) as u8,
            green: clamp_intensity(green) as u8,
            blue: clamp_intensity(blue) as u8,
        }
    }

    /// Multiply every channel by `factor`, truncating and clamping
    pub fn scale(self, factor: f64) -> Self {
        Self {
            red: intensity_from_f64(f64::from(self.red) * factor),
            green: intensity_from_f64(f64::from(self.green) * factor),
            blue: intensity_from_f64(f64::from(self.blue) * factor),
        }
    }

    /// Channel-wise sum, clamped at full intensity
    pub const fn saturating_add(self, other: Self) -> Self {
        Self {
            red: self.red.saturating_add(other.red),
            green: self.green.saturating_add(other.green),
            blue: self.blue.saturating_add(other.blue),
        }
    }

    /// Linear interpolation towards `other`; `weight` is clamped to `[0, 1]`
    pub fn lerp(self, other: Self, weight: f64) -> Self {
        let weight = if weight.is_nan() {
            0.0
        } else {
            weight.clamp(0.0, 1.0)
        };
        let channel = |from: u8, to: u8| {
            let from = f64::from(from);
            intensity_from_f64((f64::from(to) - from).mul_add(weight, from).round())
        };
        Self {
            red: channel(self.red, other.red),
            green: channel(self.green, other.green),
            blue: channel(self.blue, other.blue),
        }
    }

    /// Channels as an `[r, g, b]` array
    pub const fn to_array(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::rgb(red, green, blue)
    }
}

/// Adapter mapping `true` to `on` and `false` to `off`
pub fn bool_to_color(on: Color, off: Color) -> impl Fn(bool) -> Color + Copy {
    move |value| if value { on } else { off }
}

/// Adapter mapping an intensity in `[0, 1]` onto the segment from `low` to `high`
///
/// Intensities outside the unit range are clamped to its ends.
pub fn intensity_to_color(low: Color, high: Color) -> impl Fn(f64) -> Color + Copy {
    move |value| low.lerp(high, value)
}

/// Gray level for an intensity in `[0, 1]`
pub fn gray(value: f64) -> Color {
    Color::BLACK.lerp(Color::WHITE, value)
}
