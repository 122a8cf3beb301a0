//! Color channel intensity range

/// Lowest representable channel intensity
pub const MIN_INTENSITY: i64 = 0;

/// Highest representable channel intensity
pub const MAX_INTENSITY: i64 = 255;

/// Clamp an intensity into `[MIN_INTENSITY, MAX_INTENSITY]`
///
/// Out-of-range intensities are produced routinely by scaling and summing
/// colors; they are clamped, never rejected.
pub const fn clamp_intensity(value: i64) -> i64 {
    if value < MIN_INTENSITY {
        MIN_INTENSITY
    } else if value > MAX_INTENSITY {
        MAX_INTENSITY
    } else {
        value
    }
}

/// Truncate a real intensity and clamp it into a channel value
///
/// `NaN` maps to zero, infinities saturate to the range bounds.
pub fn intensity_from_f64(value: f64) -> u8 {
    clamp_intensity(value as i64) as u8
}
