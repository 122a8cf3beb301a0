//! Rendering constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};
use crate::render::raster::RasterMode;

// Canvas defaults for demos that do not pick their own size
/// Default canvas width in pixels
pub const DEFAULT_WIDTH: usize = 400;
/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: usize = 400;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas dimension
pub const MAX_RASTER_DIMENSION: usize = 10_000;

/// Time added to the animation clock after every frame
pub const DEFAULT_TIME_STEP: f64 = 0.1;

/// Frames rendered per animated demo
pub const DEFAULT_FRAME_COUNT: usize = 60;

/// Fixed seed for reproducible noise patterns
pub const DEFAULT_SEED: u64 = 42;

/// Side length of the random lattice behind the noise pattern
pub const NOISE_LATTICE_SIZE: usize = 64;

// Output settings
/// Directory that receives rendered demos
pub const DEFAULT_OUTPUT_DIR: &str = "out";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 40;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

/// Canvas and clock settings for a render run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    /// Canvas width in pixels
    pub width: usize,
    /// Canvas height in pixels
    pub height: usize,
    /// Frames rendered per animation
    pub frames: usize,
    /// Time added after every frame
    pub time_step: f64,
    /// GIF frame delay in milliseconds
    pub frame_delay_ms: u32,
    /// Sequential or row-parallel rasterization
    pub mode: RasterMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            frames: DEFAULT_FRAME_COUNT,
            time_step: DEFAULT_TIME_STEP,
            frame_delay_ms: GIF_FRAME_DELAY_MS,
            mode: RasterMode::default(),
        }
    }
}

impl RenderConfig {
    /// Check every field against its allowed range
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A canvas dimension is zero or exceeds `MAX_RASTER_DIMENSION`
    /// - The frame count is zero
    /// - The time step is not a positive finite number
    /// - The frame delay is zero
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_RASTER_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_RASTER_DIMENSION}"),
                ));
            }
        }
        if self.frames == 0 {
            return Err(invalid_parameter("frames", &self.frames, &"must be positive"));
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(invalid_parameter(
                "time_step",
                &self.time_step,
                &"must be positive and finite",
            ));
        }
        if self.frame_delay_ms == 0 {
            return Err(invalid_parameter(
                "frame_delay_ms",
                &self.frame_delay_ms,
                &"must be positive",
            ));
        }
        Ok(())
    }
}
