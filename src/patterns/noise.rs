//! Seeded lattice noise
//!
//! A square lattice of random intensities is drawn once from a seeded RNG; the
//! image looks up the lattice cell under each coordinate and tiles the lattice
//! across the plane. Sampling is pure: the same seed always gives the same
//! image.

use crate::algebra::image::Image;
use crate::io::error::{Result, invalid_parameter};
use crate::math::positive_mod;
use crate::spatial::Coord;
use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::sync::Arc;

/// Blocky noise with intensities in `[0, 1)`
///
/// The lattice has `lattice_size × lattice_size` cells, each `cell_size`
/// units wide.
///
/// # Errors
///
/// Returns an error if `lattice_size` is zero or `cell_size` is not positive
/// and finite
pub fn lattice_noise(seed: u64, lattice_size: usize, cell_size: f64) -> Result<Image<f64>> {
    if lattice_size == 0 {
        return Err(invalid_parameter(
            "lattice_size",
            &lattice_size,
            &"must be positive",
        ));
    }
    if !(cell_size.is_finite() && cell_size > 0.0) {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &"must be positive and finite",
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let lattice = Arc::new(Array2::from_shape_simple_fn((lattice_size, lattice_size), || {
        rng.random::<f64>()
    }));
    let size = lattice_size as i64;

    Ok(Image::new(move |c: Coord| {
        let col = positive_mod((c.col / cell_size).floor() as i64, size) as usize;
        let row = positive_mod((c.row / cell_size).floor() as i64, size) as usize;
        lattice.get([row, col]).copied().unwrap_or_default()
    }))
}
