//! Periodic modulation of coordinates and color
//!
//! Every modulator evaluates `F(d) = A·cos(B·d − C) + D` with `B = 2π / period`
//! and `C = phase_shift · B`, where `d` is a distance from a reference point, a
//! coordinate along one axis, or elapsed time. Animations advance the phase
//! shift with time so the pattern moves while its spatial shape stays fixed.

/// Wave-driven scale, color and translation transforms
pub mod ripple;
/// Wave parameters and the scalar wave field
pub mod wave;

pub use ripple::{
    Displacement, wave_color, wave_color_about_origin, wave_scale, wave_scale_about_origin,
    wave_translate, wave_translate_about,
};
pub use wave::{Wave, pulse, wave_intensity, wave_intensity_about};
