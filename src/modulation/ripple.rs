//! Wave-driven transforms
//!
//! The scale variant produces concentric magnification ripples, the color
//! variant a pulsing brightness ripple, and the translate variant a sinusoidal
//! displacement across the image.

use crate::algebra::color::Color;
use crate::algebra::transform::{CoordTransform, ValueTransform, coord_transform, value_transform};
use crate::io::error::{AlgebraError, Result};
use crate::math::distance;
use crate::modulation::wave::Wave;
use crate::spatial::Coord;
use crate::spatial::transforms::{AboutPoint, about_point};

/// Direction in which [`wave_translate`] displaces the image
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Displacement {
    /// Rows shift up and down as a wave running along the columns
    Vertical,
    /// Columns shift left and right as a wave running along the rows
    Horizontal,
}

/// Zoom level that varies with distance from the origin
///
/// At each coordinate the wave value is used as the scale factor of
/// `scale_about_origin`, so the image is magnified where the wave is above
/// one and shrunk where it is below.
///
/// # Errors
///
/// Returns [`AlgebraError::InvalidScaleFactor`] if the wave's range contains
/// zero, since some coordinate would then be divided by zero.
pub fn wave_scale_about_origin<T: 'static>(wave: Wave) -> Result<CoordTransform<T>> {
    if wave.crosses_zero() {
        return Err(AlgebraError::InvalidScaleFactor { factor: 0.0 });
    }
    Ok(coord_transform(move |c: Coord| {
        c / wave.evaluate(distance(c, Coord::ORIGIN))
    }))
}

/// [`wave_scale_about_origin`] centered at `center`
///
/// # Errors
///
/// Returns [`AlgebraError::InvalidScaleFactor`] if the wave's range contains zero
pub fn wave_scale<T: 'static>(
    wave: Wave,
    center: Coord,
) -> Result<AboutPoint<T, CoordTransform<T>>> {
    Ok(about_point(wave_scale_about_origin(wave)?, center))
}

/// Brightness ripple: every channel is multiplied by the wave value, then clamped
pub fn wave_color_about_origin(wave: Wave) -> ValueTransform<Color> {
    value_transform(move |c: Coord, color: Color| {
        color.scale(wave.evaluate(distance(c, Coord::ORIGIN)))
    })
}

/// [`wave_color_about_origin`] centered at `center`
pub fn wave_color(wave: Wave, center: Coord) -> AboutPoint<Color, ValueTransform<Color>> {
    about_point(wave_color_about_origin(wave), center)
}

/// Sinusoidal displacement along one axis
///
/// The offset is the wave intensity at the coordinate projected onto the
/// other axis, so it depends only on the distance from the origin along that
/// axis. The displaced axis is held at zero, which makes the pattern mirror
/// symmetric about the origin.
pub fn wave_translate<T: 'static>(wave: Wave, direction: Displacement) -> CoordTransform<T> {
    match direction {
        Displacement::Vertical => coord_transform(move |c: Coord| {
            let offset = wave.evaluate(distance(Coord::new(c.col, 0.0), Coord::ORIGIN));
            Coord::new(c.col, c.row - offset)
        }),
        Displacement::Horizontal => coord_transform(move |c: Coord| {
            let offset = wave.evaluate(distance(Coord::new(0.0, c.row), Coord::ORIGIN));
            Coord::new(c.col - offset, c.row)
        }),
    }
}

/// [`wave_translate`] with the wave argument measured from `center`
pub fn wave_translate_about<T: 'static>(
    wave: Wave,
    direction: Displacement,
    center: Coord,
) -> AboutPoint<T, CoordTransform<T>> {
    about_point(wave_translate(wave, direction), center)
}
