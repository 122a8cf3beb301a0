//! Mathematical utilities shared by the image algebra

/// Clamping of color channel intensities
pub mod intensity;
/// Euclidean distance between coordinates
pub mod metric;
/// Remainders that stay non-negative for negative operands
pub mod modular;

pub use intensity::{MAX_INTENSITY, MIN_INTENSITY, clamp_intensity, intensity_from_f64};
pub use metric::distance;
pub use modular::positive_mod;
