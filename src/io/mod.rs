//! Input/output glue around the image algebra

/// Bitmap files wrapped as infinitely tiled images
pub mod bitmap;
/// Command-line interface for rendering named demos
pub mod cli;
/// Rendering constants and runtime configuration defaults
pub mod configuration;
/// Display sinks that present pixel buffers
pub mod display;
/// Error types shared across the crate
pub mod error;
/// Progress bars for multi-demo renders
pub mod progress;
