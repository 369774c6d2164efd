//! CLI entry point for rendering character grids

use clap::Parser;
use gridkit::io::cli::{Cli, FileProcessor};

fn main() -> gridkit::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
