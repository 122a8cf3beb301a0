//! Display sinks: where rasterized frames go
//!
//! The core hands a sink a finished buffer once per frame (or once for a still
//! image) and never reads pixels back from it. Sinks here write PNG stills and
//! animated GIFs through the `image` crate.

use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{AlgebraError, Result};
use crate::render::animation::CancelToken;
use crate::render::raster::PixelBuffer;
use image::{Delay, Frame};
use std::path::{Path, PathBuf};

/// Receives each finished frame for presentation
pub trait DisplaySink {
    /// Present a fully rasterized buffer
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot present the frame
    fn present(&mut self, buffer: &PixelBuffer) -> Result<()>;
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AlgebraError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}

/// Writes every presented frame to the same PNG file
#[derive(Debug, Clone)]
pub struct PngSink {
    path: PathBuf,
    presented: usize,
}

impl PngSink {
    /// Create a sink writing to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            presented: 0,
        }
    }

    /// Output path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of frames written so far
    pub const fn presented(&self) -> usize {
        self.presented
    }
}

impl DisplaySink for PngSink {
    fn present(&mut self, buffer: &PixelBuffer) -> Result<()> {
        ensure_parent_dir(&self.path)?;
        buffer
            .to_rgba_image()
            .save(&self.path)
            .map_err(|e| AlgebraError::ImageExport {
                path: self.path.clone(),
                source: e,
            })?;
        self.presented += 1;
        tracing::debug!(path = %self.path.display(), "png written");
        Ok(())
    }
}

/// Collects presented frames and encodes them as an animated GIF
///
/// Frame rates faster than viewers support are honoured by keeping every n-th
/// frame at the slowest supported delay, which preserves apparent speed.
pub struct GifSink {
    path: PathBuf,
    frames: Vec<Frame>,
    delay_ms: u32,
    skip_factor: usize,
    presented: usize,
}

impl GifSink {
    /// Create a sink that will encode to `path` with `frame_delay_ms` per frame
    pub fn new(path: impl Into<PathBuf>, frame_delay_ms: u32) -> Self {
        let frame_delay_ms = frame_delay_ms.max(1);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };

        Self {
            path: path.into(),
            frames: Vec::new(),
            delay_ms: frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS),
            skip_factor,
            presented: 0,
        }
    }

    /// Output path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of frames kept for encoding
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Delay written for each kept frame
    pub const fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Encode the collected frames and write the GIF
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were presented
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn finish(self) -> Result<PathBuf> {
        if self.frames.is_empty() {
            return Err(AlgebraError::EmptySequence {
                operation: "encode a GIF from",
            });
        }

        ensure_parent_dir(&self.path)?;
        let file = std::fs::File::create(&self.path).map_err(|e| AlgebraError::FileSystem {
            path: self.path.clone(),
            operation: "create file",
            source: e,
        })?;

        let frame_count = self.frames.len();
        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .set_repeat(image::codecs::gif::Repeat::Infinite)
            .and_then(|()| encoder.encode_frames(self.frames))
            .map_err(|e| AlgebraError::ImageExport {
                path: self.path.clone(),
                source: e,
            })?;

        tracing::debug!(path = %self.path.display(), frames = frame_count, "gif written");
        Ok(self.path)
    }
}

impl DisplaySink for GifSink {
    fn present(&mut self, buffer: &PixelBuffer) -> Result<()> {
        if self.presented % self.skip_factor == 0 {
            self.frames.push(Frame::from_parts(
                buffer.to_rgba_image(),
                0,
                0,
                Delay::from_numer_denom_ms(self.delay_ms, 1),
            ));
        }
        self.presented += 1;
        Ok(())
    }
}

/// Forwards frames to another sink and cancels a token once `limit` have passed
///
/// Pairs with [`crate::render::AnimationDriver::run`] to render a fixed number
/// of frames: the driver checks the token before each tick, so exactly `limit`
/// frames reach the inner sink. A limit of zero cancels immediately.
pub struct FrameLimit<'a, S: ?Sized> {
    inner: &'a mut S,
    cancel: CancelToken,
    limit: usize,
    presented: usize,
    on_frame: Option<Box<dyn FnMut(usize) + 'a>>,
}

impl<'a, S: DisplaySink + ?Sized> FrameLimit<'a, S> {
    /// Wrap `inner`, cancelling `cancel` after `limit` frames
    pub fn new(inner: &'a mut S, limit: usize, cancel: CancelToken) -> Self {
        if limit == 0 {
            cancel.cancel();
        }
        Self {
            inner,
            cancel,
            limit,
            presented: 0,
            on_frame: None,
        }
    }

    /// Call `callback` with the running frame count after every presented frame
    #[must_use]
    pub fn on_frame<F>(mut self, callback: F) -> Self
    where
        F: FnMut(usize) + 'a,
    {
        self.on_frame = Some(Box::new(callback));
        self
    }

    /// Frames forwarded so far
    pub const fn presented(&self) -> usize {
        self.presented
    }
}

impl<S: DisplaySink + ?Sized> DisplaySink for FrameLimit<'_, S> {
    fn present(&mut self, buffer: &PixelBuffer) -> Result<()> {
        self.inner.present(buffer)?;
        self.presented += 1;
        if let Some(callback) = self.on_frame.as_mut() {
            callback(self.presented);
        }
        if self.presented >= self.limit {
            self.cancel.cancel();
        }
        Ok(())
    }
}
