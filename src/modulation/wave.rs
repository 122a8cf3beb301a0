//! Cosine wave parameters and scalar wave fields

use crate::algebra::image::Image;
use crate::io::error::{Result, invalid_parameter};
use crate::math::distance;
use crate::render::animation::Animation;
use crate::spatial::Coord;
use std::f64::consts::TAU;

/// Parameters of `F(d) = A·cos(B·d − C) + D`
///
/// `B = 2π / period` and `C = phase_shift · B`, so `phase_shift` is measured
/// in the same units as `d` and shifting it by one period is a no-op.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wave {
    phase_shift: f64,
    vert_shift: f64,
    amplitude: f64,
    period: f64,
}

impl Wave {
    /// Create validated wave parameters
    ///
    /// # Errors
    ///
    /// Returns [`crate::AlgebraError::InvalidParameter`] if any parameter is not
    /// finite or the period is zero.
    pub fn new(phase_shift: f64, vert_shift: f64, amplitude: f64, period: f64) -> Result<Self> {
        for (parameter, value) in [
            ("phase_shift", phase_shift),
            ("vert_shift", vert_shift),
            ("amplitude", amplitude),
            ("period", period),
        ] {
            if !value.is_finite() {
                return Err(invalid_parameter(parameter, &value, &"must be finite"));
            }
        }
        if period == 0.0 {
            return Err(invalid_parameter("period", &period, &"must be non-zero"));
        }

        Ok(Self {
            phase_shift,
            vert_shift,
            amplitude,
            period,
        })
    }

    /// Phase shift `C / B`
    pub const fn phase_shift(&self) -> f64 {
        self.phase_shift
    }

    /// Vertical shift `D`
    pub const fn vert_shift(&self) -> f64 {
        self.vert_shift
    }

    /// Amplitude `A`
    pub const fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Distance covered by one full cycle
    pub const fn period(&self) -> f64 {
        self.period
    }

    /// Angular frequency `B = 2π / period`
    pub fn frequency(&self) -> f64 {
        TAU / self.period
    }

    /// Evaluate the wave at `d`
    pub fn evaluate(&self, d: f64) -> f64 {
        let b = self.frequency();
        let c = self.phase_shift * b;
        self.amplitude.mul_add(b.mul_add(d, -c).cos(), self.vert_shift)
    }

    /// The same wave with its phase shift replaced by `time * speed`
    pub fn advanced(self, time: f64, speed: f64) -> Self {
        Self {
            phase_shift: time * speed,
            ..self
        }
    }

    /// Smallest and largest values the wave takes
    pub fn range(&self) -> (f64, f64) {
        let reach = self.amplitude.abs();
        (self.vert_shift - reach, self.vert_shift + reach)
    }

    /// Whether the wave reaches zero somewhere
    pub fn crosses_zero(&self) -> bool {
        let (low, high) = self.range();
        low <= 0.0 && high >= 0.0
    }
}

/// Wave evaluated at each coordinate's distance from the origin
pub fn wave_intensity(wave: Wave) -> Image<f64> {
    Image::new(move |c| wave.evaluate(distance(c, Coord::ORIGIN)))
}

/// Wave evaluated at each coordinate's distance from `center`
pub fn wave_intensity_about(wave: Wave, center: Coord) -> Image<f64> {
    Image::new(move |c| wave.evaluate(distance(c, center)))
}

/// Time-only variant: frame `t` is the constant image `F(t)`
pub fn pulse(wave: Wave) -> Animation<f64> {
    Animation::new(move |time| Image::constant(wave.evaluate(time)))
}
