//! Sampling images into pixels, once or once per animation frame

/// Animations and the driver that steps them
pub mod animation;
/// Pixel buffers and the rasterizer
pub mod raster;

pub use animation::{Animation, AnimationDriver, CancelToken, DriverState};
pub use raster::{PixelBuffer, RasterMode, rasterize, rasterize_parallel, rasterize_with, render};
