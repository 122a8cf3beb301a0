//! Command-line interface for rendering the built-in demos to disk

use crate::algebra::color::Color;
use crate::algebra::image::Image;
use crate::demos::{CatalogOptions, Demo, DemoEntry, Registry, standard_registry};
use crate::io::configuration::{
    DEFAULT_FRAME_COUNT, DEFAULT_OUTPUT_DIR, DEFAULT_SEED, DEFAULT_TIME_STEP, GIF_FRAME_DELAY_MS,
    RenderConfig,
};
use crate::io::display::{DisplaySink, FrameLimit, GifSink, PngSink};
use crate::io::error::{AlgebraError, Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::render::animation::{Animation, AnimationDriver, CancelToken};
use crate::render::raster::{RasterMode, render};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::Level;

#[derive(Debug, Parser)]
#[command(name = "funcimage")]
#[command(
    author,
    version,
    about = "Render still and animated demos of a functional image algebra"
)]
/// Command-line arguments for the demo renderer
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Names of the demos to render
    #[arg(value_name = "DEMO")]
    pub demos: Vec<String>,

    /// Render every registered demo
    #[arg(short, long)]
    pub all: bool,

    /// Print the registered demos and exit
    #[arg(short, long)]
    pub list: bool,

    /// Directory that receives the rendered files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Frames rendered for each animated demo
    #[arg(short, long, default_value_t = DEFAULT_FRAME_COUNT)]
    pub frames: usize,

    /// Time added to the animation clock after every frame
    #[arg(short, long, default_value_t = DEFAULT_TIME_STEP)]
    pub time_step: f64,

    /// Canvas width in pixels (implies square if height not specified)
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Canvas height in pixels
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Seed for the noise demo
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Rasterize rows in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output and all logging below errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Log driver and sink activity
    #[arg(short, long)]
    pub verbose: bool,

    /// Bitmap to tile for the `bitmap` demo
    #[arg(short, long)]
    pub bitmap: Option<PathBuf>,

    /// Delay between GIF frames in milliseconds
    #[arg(short = 'd', long, default_value_t = GIF_FRAME_DELAY_MS)]
    pub frame_delay: u32,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && !self.list
    }

    /// Most verbose level the log subscriber should emit
    pub const fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }

    /// Rasterization strategy selected by `--parallel`
    pub const fn raster_mode(&self) -> RasterMode {
        if self.parallel {
            RasterMode::Parallel
        } else {
            RasterMode::Sequential
        }
    }

    /// Inputs captured by the demo builders
    pub fn catalog_options(&self) -> CatalogOptions {
        CatalogOptions {
            seed: self.seed,
            bitmap: self.bitmap.clone(),
        }
    }

    /// Render settings for a demo whose preferred canvas is `default_size`
    pub fn render_config(&self, default_size: (usize, usize)) -> RenderConfig {
        let (width, height) = match (self.width, self.height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => (w, w),
            (None, Some(h)) => (h, h),
            (None, None) => default_size,
        };

        RenderConfig {
            width,
            height,
            frames: self.frames,
            time_step: self.time_step,
            frame_delay_ms: self.frame_delay,
            mode: self.raster_mode(),
        }
    }
}

/// Renders the selected demos with progress tracking
pub struct DemoProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl DemoProcessor {
    /// Create a new demo processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Render demos according to CLI arguments
    ///
    /// Returns the paths of the files written, in selection order. With
    /// `--list` nothing is rendered and the list is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No demo is selected, or a selected name is unknown
    /// - The render settings are out of range
    /// - A demo fails to build or a frame fails to resolve
    /// - An output file cannot be written
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let registry = standard_registry(&self.cli.catalog_options())?;

        if self.cli.list {
            Self::list(&registry)?;
            return Ok(Vec::new());
        }

        let selected = self.select(&registry)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(selected.len());
        }

        let mut written = Vec::with_capacity(selected.len());
        for (index, entry) in selected.iter().enumerate() {
            written.push(self.render_demo(index, entry)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    fn list(registry: &Registry) -> Result<()> {
        let width = registry
            .iter()
            .map(|entry| entry.name().len())
            .max()
            .unwrap_or_default();

        let mut stdout = std::io::stdout().lock();
        for entry in registry.iter() {
            let kind = match entry.build() {
                Ok(demo) if demo.is_animated() => "animated",
                Ok(_) => "still",
                Err(_) => "unavailable",
            };
            writeln!(
                stdout,
                "{:<width$}  {:<11} {}",
                entry.name(),
                kind,
                entry.summary()
            )
            .map_err(|source| AlgebraError::FileSystem {
                path: PathBuf::from("<stdout>"),
                operation: "list demos",
                source,
            })?;
        }
        Ok(())
    }

    fn select<'a>(&self, registry: &'a Registry) -> Result<Vec<&'a DemoEntry>> {
        if self.cli.all {
            return Ok(registry.iter().collect());
        }
        if self.cli.demos.is_empty() {
            return Err(invalid_parameter(
                "demos",
                &"",
                &"name at least one demo, or pass --all or --list",
            ));
        }
        self.cli
            .demos
            .iter()
            .map(|name| registry.get(name))
            .collect()
    }

    fn render_demo(&mut self, index: usize, entry: &DemoEntry) -> Result<PathBuf> {
        let config = self.cli.render_config(entry.size());
        config.validate()?;

        let _span = tracing::info_span!("demo", name = entry.name()).entered();
        let demo = entry.build()?;
        let frames = if demo.is_animated() { config.frames } else { 1 };

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_demo(index, entry.name(), frames);
        }

        let path = match demo {
            Demo::Still(image) => self.render_still(&image, entry.name(), &config)?,
            Demo::Animated(animation) => {
                self.render_animation(index, animation, entry.name(), &config)?
            }
        };

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_demo(index);
        }
        tracing::info!(path = %path.display(), frames, "demo written");

        Ok(path)
    }

    fn render_still(
        &self,
        image: &Image<Color>,
        name: &str,
        config: &RenderConfig,
    ) -> Result<PathBuf> {
        let buffer = render(image, config.width, config.height, config.mode);
        let mut sink = PngSink::new(self.cli.output.join(format!("{name}.png")));
        sink.present(&buffer)?;
        Ok(sink.path().to_path_buf())
    }

    fn render_animation(
        &mut self,
        index: usize,
        animation: Animation<Color>,
        name: &str,
        config: &RenderConfig,
    ) -> Result<PathBuf> {
        let mut driver =
            AnimationDriver::new(animation, config.width, config.height, config.time_step)?
                .with_mode(config.mode);
        let mut gif = GifSink::new(
            self.cli.output.join(format!("{name}.gif")),
            config.frame_delay_ms,
        );
        let cancel = CancelToken::new();

        let rendered = {
            let mut sink = FrameLimit::new(&mut gif, config.frames, cancel.clone());
            if let Some(pm) = self.progress_manager.as_mut() {
                sink = sink.on_frame(move |frame| pm.update_frame(index, frame));
            }
            driver.run(&mut sink, &cancel)?
        };
        tracing::debug!(frames = rendered, "animation finished");

        gif.finish()
    }
}
