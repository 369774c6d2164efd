//! Command-line interface for batch rendering of text grids

use crate::io::configuration::{DEFAULT_IMAGE_SCALE, INPUT_EXTENSION, OUTPUT_SUFFIX};
use crate::io::error::{GridError, Result, io_error};
use crate::io::image::export_binary_png;
use crate::io::parse::char_grid;
use crate::io::progress::{ProgressManager, Stage};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "gridkit")]
#[command(author, version, about = "Render character grids with row and column indices")]
/// Command-line arguments for the grid rendering tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input text file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Swap rows and columns before rendering
    #[arg(short, long)]
    pub transpose: bool,

    /// Also export a PNG where cells equal to this character are black
    #[arg(short, long)]
    pub marker: Option<char>,

    /// Pixels per cell edge in the exported PNG
    #[arg(short, long, default_value_t = DEFAULT_IMAGE_SCALE)]
    pub scale: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch processing of grid files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if Self::is_input_file(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(io_error("Target file must be a .txt grid"))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            let entries =
                std::fs::read_dir(&self.cli.target).map_err(|e| GridError::FileSystem {
                    path: self.cli.target.clone(),
                    operation: "read directory",
                    source: e,
                })?;
            for entry in entries {
                let path = entry?.path();
                if Self::is_input_file(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(io_error("Target must be a .txt file or directory"))
        }
    }

    // Previous outputs share the extension, so they are excluded by suffix
    fn is_input_file(path: &Path) -> bool {
        path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION)
            && !path
                .file_stem()
                .and_then(|s| s.to_str())
                .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::output_path(input_path, INPUT_EXTENSION);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let text = std::fs::read_to_string(input_path).map_err(|e| GridError::FileSystem {
            path: input_path.to_path_buf(),
            operation: "read",
            source: e,
        })?;
        let mut grid = char_grid(&text)?;

        if let Some(ref pm) = self.progress_manager {
            pm.update_stage(index, Stage::Transform);
        }

        if self.cli.transpose {
            grid = grid.transposed();
        }

        if let Some(ref pm) = self.progress_manager {
            pm.update_stage(index, Stage::Write);
        }

        let output_path = Self::output_path(input_path, INPUT_EXTENSION);
        let mut rendered = grid.annotated();
        rendered.push('\n');
        std::fs::write(&output_path, rendered).map_err(|e| GridError::FileSystem {
            path: output_path.clone(),
            operation: "write",
            source: e,
        })?;

        if let Some(marker) = self.cli.marker {
            let mask = grid.map(|&cell| cell == marker);
            export_binary_png(&mask, &Self::output_path(input_path, "png"), self.cli.scale)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        Ok(())
    }

    /// Output path `<stem>_result.<extension>` next to the input
    pub fn output_path(input_path: &Path, extension: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.{extension}", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
