//! Multi-demo progress tracking with automatic batching for large selections

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Progress of one demo in the rolling display
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct DemoProgress {
    label: String,
    frame: usize,
    frames: usize,
}

/// Coordinates progress display while demos render
///
/// Shows one frame bar per demo for small selections. Larger selections get an
/// additional batch bar and the frame bars roll over the most recent demos.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    demo_bars: Vec<ProgressBar>,
    demo_count: usize,
    demos: Vec<DemoProgress>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Demos: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a progress manager with no bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            demo_bars: Vec::new(),
            demo_count: 0,
            demos: Vec::new(),
        }
    }

    /// Create the bars for a run of `demo_count` demos
    pub fn initialize(&mut self, demo_count: usize) {
        self.demo_count = demo_count;

        if demo_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(demo_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..demo_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(FRAME_STYLE.clone());
            self.demo_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Number of demos announced by [`ProgressManager::initialize`]
    pub const fn demo_count(&self) -> usize {
        self.demo_count
    }

    /// Whether the run is large enough to show a batch bar
    pub const fn is_batched(&self) -> bool {
        self.batch_bar.is_some()
    }

    /// Begin tracking demo `index`, which renders `frames` frames
    pub fn start_demo(&mut self, index: usize, name: &str, frames: usize) {
        if index >= self.demos.len() {
            self.demos.resize(index + 1, DemoProgress::default());
        }
        if let Some(demo) = self.demos.get_mut(index) {
            *demo = DemoProgress {
                label: name.to_owned(),
                frame: 0,
                frames,
            };
        }
        self.update_bars();
    }

    /// Report that demo `index` has presented `frame` frames
    pub fn update_frame(&mut self, index: usize, frame: usize) {
        if let Some(demo) = self.demos.get_mut(index) {
            demo.frame = frame.min(demo.frames);
        }
        self.update_bars();
    }

    /// Mark demo `index` as finished
    pub fn complete_demo(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(demo) = self.demos.get_mut(index) {
            demo.label = format!("✓ {}", demo.label);
            demo.frame = demo.frames;
        }
        self.update_bars();
    }

    /// Frames reported so far for demo `index`
    pub fn frames_done(&self, index: usize) -> Option<usize> {
        self.demos.get(index).map(|demo| demo.frame)
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All demos rendered");
        }
        let _ = self.multi_progress.clear();
    }

    /// Point the bars at the most recently started demos
    fn update_bars(&self) {
        let started: Vec<&DemoProgress> = self
            .demos
            .iter()
            .filter(|demo| !demo.label.is_empty())
            .collect();

        let first_visible = started.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = started.get(first_visible..).unwrap_or(&[]);

        for (bar, demo) in self.demo_bars.iter().zip(visible) {
            bar.set_length(demo.frames as u64);
            bar.set_position(demo.frame as u64);
            let width = demo.frames.to_string().len();
            bar.set_message(format!("{:>width$}/{}", demo.frame, demo.frames));
            bar.set_prefix(demo.label.clone());
        }

        for bar in self.demo_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
