//! Coordinates on the continuous plane and the geometric transforms over them
//!
//! Every geometric transform is a pullback: it maps a destination coordinate
//! back to the source coordinate sampled there. Positioned transforms are built
//! by wrapping an origin-relative transform with [`transforms::about_point`].

/// Real-valued (column, row) coordinates
pub mod coordinate;
/// Translate, scale, rotate, swirl and the about-point wrapper
pub mod transforms;

pub use coordinate::Coord;
pub use transforms::{
    AboutPoint, about_point, rotate, rotate_about_origin, scale, scale_about_origin, swirl,
    swirl_about_origin, translate, translate_by,
};
