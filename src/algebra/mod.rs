//! The functional image algebra
//!
//! Images are shared, immutable callables; transforms take an image and return
//! a new one. Nothing here touches pixel data until the rasterizer runs.

/// Colors, channel arithmetic and explicit value adapters
pub mod color;
/// Pointwise combination of several images
pub mod combine;
/// The `Image<T>` callable and its unary combinators
pub mod image;
/// Image transforms and their composition
pub mod transform;

pub use color::{Color, bool_to_color, gray, intensity_to_color};
pub use combine::{blend, combine_image, combine_many, cond, constant_image, map_image, sum};
pub use image::Image;
pub use transform::{
    AndThen, BoxedTransform, CoordTransform, Identity, ImageTransform, ValueTransform,
    coord_transform, identity, value_transform,
};
