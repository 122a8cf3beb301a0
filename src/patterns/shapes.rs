//! Boolean pattern masks
//!
//! Each mask repeats over the whole plane, negative coordinates included;
//! periodic patterns use `positive_mod` so the phase is never negative.

use crate::algebra::color::{Color, bool_to_color};
use crate::algebra::image::Image;
use crate::io::error::{Result, invalid_parameter};
use crate::math::{distance, positive_mod};
use crate::spatial::Coord;

fn positive_length(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(invalid_parameter(parameter, &value, &"must be positive and finite"))
    }
}

/// Grid lines `line_thickness` wide, repeating every `cell_size`
///
/// A coordinate lies on a line when its phase within the cell, on either axis,
/// is below the thickness.
///
/// # Errors
///
/// Returns an error if `cell_size` is not positive or `line_thickness` is
/// negative or not finite
pub fn grid_mask(cell_size: f64, line_thickness: f64) -> Result<Image<bool>> {
    let cell_size = positive_length("cell_size", cell_size)?;
    if !(line_thickness.is_finite() && line_thickness >= 0.0) {
        return Err(invalid_parameter(
            "line_thickness",
            &line_thickness,
            &"must be non-negative and finite",
        ));
    }

    Ok(Image::new(move |c: Coord| {
        positive_mod(c.col, cell_size) < line_thickness
            || positive_mod(c.row, cell_size) < line_thickness
    }))
}

/// [`grid_mask`] colored with `line` on the lines and `background` elsewhere
///
/// # Errors
///
/// Returns an error if `cell_size` is not positive or `line_thickness` is
/// negative or not finite
pub fn grid(
    cell_size: f64,
    line_thickness: f64,
    line: Color,
    background: Color,
) -> Result<Image<Color>> {
    Ok(grid_mask(cell_size, line_thickness)?.map(bool_to_color(line, background)))
}

/// Alternating squares of side `square_size`, `true` on the square at the origin
///
/// # Errors
///
/// Returns an error if `square_size` is not positive and finite
pub fn checkerboard(square_size: f64) -> Result<Image<bool>> {
    let square_size = positive_length("square_size", square_size)?;
    Ok(Image::new(move |c: Coord| {
        let col = (c.col / square_size).floor() as i64;
        let row = (c.row / square_size).floor() as i64;
        positive_mod(col.wrapping_add(row), 2) == 0
    }))
}

/// Vertical bands of width `stripe_width`, `true` on the band starting at column zero
///
/// # Errors
///
/// Returns an error if `stripe_width` is not positive and finite
pub fn vertical_stripes(stripe_width: f64) -> Result<Image<bool>> {
    let stripe_width = positive_length("stripe_width", stripe_width)?;
    Ok(Image::new(move |c: Coord| {
        positive_mod(c.col, 2.0 * stripe_width) < stripe_width
    }))
}

/// Closed disk of `radius` around `center`
pub fn disk(center: Coord, radius: f64) -> Image<bool> {
    Image::new(move |c| distance(c, center) <= radius)
}

/// Concentric rings of width `spacing` around the origin, `true` on the innermost
///
/// # Errors
///
/// Returns an error if `spacing` is not positive and finite
pub fn rings(spacing: f64) -> Result<Image<bool>> {
    let spacing = positive_length("spacing", spacing)?;
    Ok(Image::new(move |c: Coord| {
        positive_mod(c.length(), 2.0 * spacing) < spacing
    }))
}
