//! Multi-file progress tracking with automatic batching for large sets

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Processing stages reported for each file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reading and parsing the input text
    Parse,
    /// Applying grid transforms
    Transform,
    /// Writing rendered outputs
    Write,
}

impl Stage {
    /// Number of stages a file passes through
    pub const COUNT: u64 = 3;

    /// Stages completed once this stage has started
    pub const fn position(self) -> u64 {
        match self {
            Self::Parse => 0,
            Self::Transform => 1,
            Self::Write => 2,
        }
    }

    /// Label shown next to the progress bar
    pub const fn label(self) -> &'static str {
        match self {
            Self::Parse => "parsing",
            Self::Transform => "transforming",
            Self::Write => "writing",
        }
    }
}

/// Coordinates progress display for batch operations
///
/// Shows one bar per file for small batches and a single batch bar once the
/// file count exceeds `MAX_INDIVIDUAL_PROGRESS_BARS`
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    file_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Files: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_count: 0,
        }
    }

    /// Number of files announced by `initialize`
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    /// Whether a single batch bar replaces per-file bars
    pub const fn is_batched(&self) -> bool {
        self.batch_bar.is_some()
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;

        // Switch to batch mode for large file sets to avoid terminal spam
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
            return;
        }

        for _ in 0..file_count {
            let pb = ProgressBar::new(Stage::COUNT);
            pb.set_style(FILE_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Configure the progress bar for a new file
    pub fn start_file(&self, index: usize, path: &Path) {
        if let Some(bar) = self.file_bars.get(index) {
            let display_name = path.file_name().unwrap_or_default().to_string_lossy();
            bar.set_prefix(display_name.to_string());
        }
        self.update_stage(index, Stage::Parse);
    }

    /// Report the stage a file has reached
    pub fn update_stage(&self, index: usize, stage: Stage) {
        if let Some(bar) = self.file_bars.get(index) {
            bar.set_position(stage.position());
            bar.set_message(stage.label());
        }
    }

    /// Mark a file as completed and update batch progress
    pub fn complete_file(&self, index: usize, elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(bar) = self.file_bars.get(index) {
            bar.set_position(Stage::COUNT);
            bar.finish_with_message(format!("✓ {}ms", elapsed.as_millis()));
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }
}
