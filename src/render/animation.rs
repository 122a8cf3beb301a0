//! Animations as functions of time, and the driver that steps them
//!
//! The driver owns the only mutable state in the pipeline besides the pixel
//! buffer: the animation clock. Each tick resolves the animation at the current
//! time, rasterizes it, presents the buffer and only then advances the clock.
//! There is no internal stop condition; [`AnimationDriver::run`] keeps ticking
//! until its [`CancelToken`] is cancelled.

use crate::algebra::color::Color;
use crate::algebra::image::Image;
use crate::algebra::transform::ImageTransform;
use crate::io::display::DisplaySink;
use crate::io::error::{AlgebraError, Result, invalid_parameter};
use crate::render::raster::{PixelBuffer, RasterMode, rasterize_with};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

type Frames<T> = dyn Fn(f64) -> Result<Image<T>> + Send + Sync;

/// A pure function from time to an image
///
/// Resolving a frame may fail (for example when a time-dependent scale factor
/// hits zero); the driver treats such a failure as fatal to the run.
pub struct Animation<T> {
    frames: Arc<Frames<T>>,
}

impl<T> Clone for Animation<T> {
    fn clone(&self) -> Self {
        Self {
            frames: Arc::clone(&self.frames),
        }
    }
}

impl<T> fmt::Debug for Animation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animation").finish_non_exhaustive()
    }
}

impl<T: 'static> Animation<T> {
    /// Wrap an infallible frame function
    pub fn new<F>(frames: F) -> Self
    where
        F: Fn(f64) -> Image<T> + Send + Sync + 'static,
    {
        Self::try_new(move |time| Ok(frames(time)))
    }

    /// Wrap a frame function that may fail
    pub fn try_new<F>(frames: F) -> Self
    where
        F: Fn(f64) -> Result<Image<T>> + Send + Sync + 'static,
    {
        Self {
            frames: Arc::new(frames),
        }
    }

    /// An animation that shows `image` at every time
    pub fn still(image: Image<T>) -> Self {
        Self::new(move |_| image.clone())
    }

    /// A fixed image seen through a transform that changes with time
    pub fn transformed<F, Tr>(image: Image<T>, transform_at: F) -> Self
    where
        F: Fn(f64) -> Result<Tr> + Send + Sync + 'static,
        Tr: ImageTransform<T>,
    {
        Self::try_new(move |time| Ok(transform_at(time)?.apply(image.clone())))
    }

    /// Resolve the image shown at `time`
    ///
    /// # Errors
    ///
    /// Propagates whatever error the frame function reports
    pub fn at(&self, time: f64) -> Result<Image<T>> {
        (self.frames)(time)
    }

    /// Pointwise value transform applied to every frame
    pub fn map<U, F>(&self, f: F) -> Animation<U>
    where
        U: 'static,
        F: Fn(T) -> U + Clone + Send + Sync + 'static,
    {
        let source = self.clone();
        Animation::try_new(move |time| Ok(source.at(time)?.map(f.clone())))
    }
}

/// Shared flag that asks a running driver to stop between ticks
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token that is not cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; every clone observes it
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Lifecycle of an [`AnimationDriver`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    /// Constructed, clock not started
    Idle,
    /// Clock advancing, ticks allowed
    Running,
    /// Stopped by request, cancellation or a failed tick
    Stopped,
}

impl DriverState {
    const fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Stopped => "stopped",
        }
    }
}

impl fmt::Display for DriverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Steps an animation through time, one rasterized frame per tick
#[derive(Debug)]
pub struct AnimationDriver {
    animation: Animation<Color>,
    buffer: PixelBuffer,
    mode: RasterMode,
    time: f64,
    time_step: f64,
    state: DriverState,
    frames_rendered: usize,
}

impl AnimationDriver {
    /// Create an idle driver with its clock at zero
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidParameter`] unless `time_step` is positive
    /// and finite, since the clock must increase monotonically.
    pub fn new(
        animation: Animation<Color>,
        width: usize,
        height: usize,
        time_step: f64,
    ) -> Result<Self> {
        if !(time_step.is_finite() && time_step > 0.0) {
            return Err(invalid_parameter(
                "time_step",
                &time_step,
                &"must be positive and finite",
            ));
        }

        Ok(Self {
            animation,
            buffer: PixelBuffer::new(width, height),
            mode: RasterMode::default(),
            time: 0.0,
            time_step,
            state: DriverState::Idle,
            frames_rendered: 0,
        })
    }

    /// Select sequential or row-parallel rasterization
    #[must_use]
    pub fn with_mode(mut self, mode: RasterMode) -> Self {
        self.mode = mode;
        self
    }

    /// Start the clock at `time` instead of zero
    #[must_use]
    pub fn with_start_time(mut self, time: f64) -> Self {
        self.time = time;
        self
    }

    /// Current lifecycle state
    pub const fn state(&self) -> DriverState {
        self.state
    }

    /// Time the next tick will resolve
    pub const fn time(&self) -> f64 {
        self.time
    }

    /// Number of frames presented so far
    pub const fn frames_rendered(&self) -> usize {
        self.frames_rendered
    }

    /// The most recently rasterized frame
    pub const fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Move from `Idle` to `Running`
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidState`] unless the driver is idle
    pub fn start(&mut self) -> Result<()> {
        self.expect_state(DriverState::Idle)?;
        self.state = DriverState::Running;
        tracing::debug!(time = self.time, step = self.time_step, "animation started");
        Ok(())
    }

    /// Stop the driver; further ticks are rejected
    pub fn stop(&mut self) {
        if self.state != DriverState::Stopped {
            tracing::debug!(frames = self.frames_rendered, "animation stopped");
        }
        self.state = DriverState::Stopped;
    }

    /// Resolve, rasterize and present one frame, then advance the clock
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The driver is not running
    /// - The animation fails to resolve a frame at the current time
    /// - The sink fails to present the frame
    ///
    /// Frame and sink failures stop the driver.
    pub fn tick<S>(&mut self, sink: &mut S) -> Result<()>
    where
        S: DisplaySink + ?Sized,
    {
        self.expect_state(DriverState::Running)?;

        let frame = self
            .animation
            .at(self.time)
            .and_then(|image| {
                rasterize_with(&image, &mut self.buffer, self.mode);
                sink.present(&self.buffer)
            });
        if let Err(error) = frame {
            tracing::warn!(time = self.time, %error, "frame failed");
            self.stop();
            return Err(error);
        }

        tracing::trace!(time = self.time, frame = self.frames_rendered, "frame presented");
        self.time += self.time_step;
        self.frames_rendered += 1;
        Ok(())
    }

    /// Tick until `cancel` is cancelled, checking once before every tick
    ///
    /// Starts the driver if it is idle and leaves it stopped on return.
    /// Returns the number of frames presented during this call.
    ///
    /// # Errors
    ///
    /// Returns the first tick failure, or [`AlgebraError::InvalidState`] if the
    /// driver has already stopped.
    pub fn run<S>(&mut self, sink: &mut S, cancel: &CancelToken) -> Result<usize>
    where
        S: DisplaySink + ?Sized,
    {
        if self.state == DriverState::Idle {
            self.start()?;
        }
        self.expect_state(DriverState::Running)?;

        let mut presented = 0;
        while !cancel.is_cancelled() {
            self.tick(sink)?;
            presented += 1;
        }

        self.stop();
        Ok(presented)
    }

    fn expect_state(&self, expected: DriverState) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(AlgebraError::InvalidState {
                expected: expected.name(),
                found: self.state.name(),
            })
        }
    }
}
