//! Bitmaps wrapped as infinitely tiled images

use crate::algebra::color::Color;
use crate::algebra::image::Image;
use crate::io::error::{AlgebraError, Result};
use crate::math::positive_mod;
use ndarray::Array2;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A decoded grid of colors with known width and height
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    pixels: Array2<Color>,
}

impl Bitmap {
    /// Load and decode an image file, discarding alpha
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened or decoded
    /// - The decoded image has no pixels
    #[tracing::instrument(fields(path = %path.display()), skip(path))]
    pub fn open(path: &Path) -> Result<Self> {
        let decoded = image::open(path).map_err(|e| AlgebraError::BitmapLoad {
            path: path.to_path_buf(),
            source: e,
        })?;

        let rgb = decoded.to_rgb8();
        let (width, height) = rgb.dimensions();
        if width == 0 || height == 0 {
            return Err(AlgebraError::EmptyBitmap {
                path: path.to_path_buf(),
            });
        }

        let mut pixels = Array2::from_elem((height as usize, width as usize), Color::BLACK);
        for (x, y, pixel) in rgb.enumerate_pixels() {
            if let Some(slot) = pixels.get_mut([y as usize, x as usize]) {
                *slot = Color::from(pixel.0);
            }
        }

        tracing::debug!(width, height, "bitmap loaded");
        Ok(Self { pixels })
    }

    /// Wrap an in-memory `(height, width)` grid
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::EmptyBitmap`] if the grid has no pixels
    pub fn from_pixels(pixels: Array2<Color>) -> Result<Self> {
        if pixels.is_empty() {
            return Err(AlgebraError::EmptyBitmap {
                path: PathBuf::from("<memory>"),
            });
        }
        Ok(Self { pixels })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Color at column `x`, row `y`, if inside the bitmap
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        self.pixels.get([y, x]).copied()
    }

    /// Tile the bitmap across the whole plane
    ///
    /// Coordinates are truncated towards zero and wrapped with a positive
    /// modulus, so negative and out-of-range coordinates repeat the bitmap in
    /// every direction.
    pub fn into_image(self) -> Image<Color> {
        let width = self.width() as i64;
        let height = self.height() as i64;
        let pixels = Arc::new(self.pixels);

        Image::new(move |c| {
            let x = positive_mod(c.col.trunc() as i64, width) as usize;
            let y = positive_mod(c.row.trunc() as i64, height) as usize;
            pixels.get([y, x]).copied().unwrap_or_default()
        })
    }
}
