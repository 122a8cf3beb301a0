//! Images and animations as pure functions over the continuous plane
//!
//! An image maps a real-valued (column, row) coordinate to a value; an animation
//! maps time to an image. Combinators build new images by pulling coordinates
//! back through geometric transforms, by rewriting values pointwise, and by
//! combining several images. A rasterizer samples the result at integer pixel
//! coordinates into a buffer that display sinks present as PNG or GIF.

#![forbid(unsafe_code)]

/// Image, color and transform primitives
pub mod algebra;
/// Named demo scenes and the registry that selects them
pub mod demos;
/// Input/output glue: errors, configuration, bitmaps, display sinks and CLI
pub mod io;
/// Distance, positive modulus and intensity clamping
pub mod math;
/// Cosine wave modulation of scale, translation and color
pub mod modulation;
/// Boolean and scalar pattern images
pub mod patterns;
/// Rasterization and animation stepping
pub mod render;
/// Coordinates and geometric transforms
pub mod spatial;

pub use algebra::{Color, Image, ImageTransform};
pub use io::error::{AlgebraError, Result};
pub use render::{Animation, AnimationDriver, PixelBuffer};
pub use spatial::Coord;
