//! Ready-made pattern images to build scenes from

/// Seeded lattice noise
pub mod noise;
/// Boolean masks: grids, checkerboards, stripes, disks and rings
pub mod shapes;

pub use noise::lattice_noise;
pub use shapes::{checkerboard, disk, grid, grid_mask, rings, vertical_stripes};
