//! Geometric image transforms
//!
//! Origin-relative transforms are plain pullbacks. Positioned variants are
//! never written by hand: they wrap the origin-relative transform with
//! [`about_point`], which shifts the center to the origin, applies the
//! transform and shifts back.

use crate::algebra::transform::{AndThen, CoordTransform, ImageTransform, coord_transform};
use crate::io::error::{AlgebraError, Result};
use crate::spatial::Coord;

/// An origin-relative transform re-centered at an arbitrary point
pub type AboutPoint<T, Tr> = AndThen<AndThen<CoordTransform<T>, Tr>, CoordTransform<T>>;

/// Move an image by `d_col` columns and `d_row` rows
pub fn translate<T: 'static>(d_col: f64, d_row: f64) -> CoordTransform<T> {
    coord_transform(move |c: Coord| Coord::new(c.col - d_col, c.row - d_row))
}

/// Move an image by `offset`
pub fn translate_by<T: 'static>(offset: Coord) -> CoordTransform<T> {
    translate(offset.col, offset.row)
}

pub(crate) fn validate_scale_factor(factor: f64) -> Result<f64> {
    if factor == 0.0 || !factor.is_finite() {
        return Err(AlgebraError::InvalidScaleFactor { factor });
    }
    Ok(factor)
}

/// Zoom about the origin; factors above one magnify, below one shrink
///
/// # Errors
///
/// Returns [`AlgebraError::InvalidScaleFactor`] for a zero or non-finite factor,
/// before any division takes place.
pub fn scale_about_origin<T: 'static>(factor: f64) -> Result<CoordTransform<T>> {
    let factor = validate_scale_factor(factor)?;
    Ok(coord_transform(move |c: Coord| c / factor))
}

/// Rotate about the origin by `angle` radians, clockwise on screen
///
/// Rows grow downward, so sampling through the inverse matrix turns the
/// visible image clockwise for a positive angle.
pub fn rotate_about_origin<T: 'static>(angle: f64) -> CoordTransform<T> {
    coord_transform(move |c: Coord| c.rotated(-angle))
}

/// Rotation whose angle grows linearly with distance from the origin
pub fn swirl_about_origin<T: 'static>(strength: f64) -> CoordTransform<T> {
    coord_transform(move |c: Coord| c.rotated(-(strength * c.length())))
}

/// Apply an origin-relative transform about `center`
///
/// Equivalent to `translate(-center).and_then(transform).and_then(translate(center))`.
pub fn about_point<T, Tr>(transform: Tr, center: Coord) -> AboutPoint<T, Tr>
where
    T: 'static,
    Tr: ImageTransform<T>,
{
    translate_by::<T>(-center)
        .and_then(transform)
        .and_then(translate_by(center))
}

/// Zoom by `factor` about `center`
///
/// # Errors
///
/// Returns [`AlgebraError::InvalidScaleFactor`] for a zero or non-finite factor
pub fn scale<T: 'static>(factor: f64, center: Coord) -> Result<AboutPoint<T, CoordTransform<T>>> {
    Ok(about_point(scale_about_origin(factor)?, center))
}

/// Rotate by `angle` radians about `center`
pub fn rotate<T: 'static>(angle: f64, center: Coord) -> AboutPoint<T, CoordTransform<T>> {
    about_point(rotate_about_origin(angle), center)
}

/// Swirl about `center`
pub fn swirl<T: 'static>(strength: f64, center: Coord) -> AboutPoint<T, CoordTransform<T>> {
    about_point(swirl_about_origin(strength), center)
}
