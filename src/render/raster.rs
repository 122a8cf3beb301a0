//! Rasterization of continuous images into fixed-size pixel buffers
//!
//! A pixel's color is exactly the image evaluated at its integer coordinate:
//! no pixel-center offset, no interpolation, no anti-aliasing. Every call
//! overwrites the whole buffer.

use crate::algebra::color::Color;
use crate::algebra::image::Image;
use image::{Rgba, RgbaImage};
use ndarray::{Array2, Axis};
use rayon::prelude::*;

/// A width × height grid of colors, indexed by `(x, y)`
///
/// Stored row-major as an `Array2` of shape `(height, width)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Array2<Color>,
}

impl PixelBuffer {
    /// Create a black buffer
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Color::BLACK)
    }

    /// Create a buffer with every pixel set to `color`
    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        Self {
            pixels: Array2::from_elem((height, width), color),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Color at column `x`, row `y`, if inside the buffer
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        self.pixels.get([y, x]).copied()
    }

    /// The underlying `(height, width)` array
    pub const fn pixels(&self) -> &Array2<Color> {
        &self.pixels
    }

    /// Convert to an opaque RGBA image for encoding
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            let color = self.get(x as usize, y as usize).unwrap_or_default();
            Rgba([color.red, color.green, color.blue, u8::MAX])
        })
    }
}

/// How the rasterizer walks the pixel grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RasterMode {
    /// One thread, row by row
    #[default]
    Sequential,
    /// Disjoint rows sampled concurrently on the rayon pool
    Parallel,
}

/// Sample `image` at every pixel of `buffer`
pub fn rasterize(image: &Image<Color>, buffer: &mut PixelBuffer) {
    for (y, mut row) in buffer.pixels.axis_iter_mut(Axis(0)).enumerate() {
        for (x, pixel) in row.iter_mut().enumerate() {
            *pixel = image.at(x as f64, y as f64);
        }
    }
}

/// Sample `image` at every pixel of `buffer`, one rayon task per row
///
/// Images are pure, so sampling order does not matter; each task writes only
/// its own row and the result equals [`rasterize`].
pub fn rasterize_parallel(image: &Image<Color>, buffer: &mut PixelBuffer) {
    buffer
        .pixels
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(y, mut row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = image.at(x as f64, y as f64);
            }
        });
}

/// Rasterize with the given mode
pub fn rasterize_with(image: &Image<Color>, buffer: &mut PixelBuffer, mode: RasterMode) {
    match mode {
        RasterMode::Sequential => rasterize(image, buffer),
        RasterMode::Parallel => rasterize_parallel(image, buffer),
    }
}

/// Rasterize into a freshly allocated buffer
pub fn render(image: &Image<Color>, width: usize, height: usize, mode: RasterMode) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(width, height);
    rasterize_with(image, &mut buffer, mode);
    buffer
}
