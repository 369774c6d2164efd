//! Tests for command-line interface parsing and file processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use gridkit::io::cli::{Cli, FileProcessor};
    use gridkit::io::configuration::DEFAULT_IMAGE_SCALE;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn quiet_cli(target: &Path, extra: &[&str]) -> Cli {
        let mut args = vec!["program", "--quiet"];
        args.extend_from_slice(extra);
        let target = target.to_string_lossy().to_string();
        Cli::parse_from(args.into_iter().map(str::to_owned).chain([target]))
    }

    // Tests CLI parsing with only the required target argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "grid.txt"]);

        assert_eq!(cli.target, PathBuf::from("grid.txt"));
        assert_eq!(cli.scale, DEFAULT_IMAGE_SCALE);
        assert_eq!(cli.marker, None);
        assert!(!cli.transpose);
        assert!(cli.should_show_progress());
        assert!(cli.skip_existing());
    }

    // Tests CLI parsing with all available arguments
    // Verified by renaming the marker flag
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "grids",
            "--transpose",
            "--marker",
            "#",
            "--scale",
            "8",
            "--quiet",
            "--no-skip",
        ]);

        assert_eq!(cli.target, PathBuf::from("grids"));
        assert!(cli.transpose);
        assert_eq!(cli.marker, Some('#'));
        assert_eq!(cli.scale, 8);
        assert!(!cli.should_show_progress());
        assert!(!cli.skip_existing());
    }

    // Tests output naming keeps the input directory
    // Verified by dropping the parent directory
    #[test]
    fn test_output_path() {
        let output = FileProcessor::output_path(Path::new("/data/maze.txt"), "png");
        assert_eq!(output, PathBuf::from("/data/maze_result.png"));
    }

    // Tests a single file is rendered with indices and optionally transposed
    // Verified by skipping the transpose step
    #[test]
    fn test_process_single_file() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let input = temp_dir.path().join("maze.txt");
        assert!(fs::write(&input, "#..\n.#.\n").is_ok());

        let mut processor = FileProcessor::new(quiet_cli(&input, &["--transpose"]));
        assert!(processor.process().is_ok());

        let rendered = fs::read_to_string(temp_dir.path().join("maze_result.txt"));
        assert_eq!(
            rendered.ok().as_deref(),
            Some("  0 1\n0 # .\n1 . #\n2 . .\n")
        );
    }

    // Tests the marker flag exports a PNG next to the text output
    // Verified by never exporting images
    #[test]
    fn test_process_exports_marker_png() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let input = temp_dir.path().join("dots.txt");
        assert!(fs::write(&input, "#.\n.#\n").is_ok());

        let mut processor = FileProcessor::new(quiet_cli(&input, &["--marker", "#"]));
        assert!(processor.process().is_ok());
        assert!(temp_dir.path().join("dots_result.png").exists());
    }

    // Tests directories are scanned and previous outputs are skipped
    // Verified by treating result files as inputs
    #[test]
    fn test_process_directory_skips_existing() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let dir = temp_dir.path();
        assert!(fs::write(dir.join("a.txt"), "ab\n").is_ok());
        assert!(fs::write(dir.join("b.txt"), "cd\n").is_ok());
        assert!(fs::write(dir.join("b_result.txt"), "stale\n").is_ok());
        assert!(fs::write(dir.join("notes.md"), "ignored\n").is_ok());

        let mut processor = FileProcessor::new(quiet_cli(dir, &[]));
        assert!(processor.process().is_ok());

        assert!(dir.join("a_result.txt").exists());
        assert_eq!(
            fs::read_to_string(dir.join("b_result.txt")).ok().as_deref(),
            Some("stale\n")
        );
        assert!(!dir.join("a_result_result.txt").exists());
        assert!(!dir.join("notes_result.txt").exists());
    }

    // Tests no-skip reprocesses files with existing output
    // Verified by ignoring the no-skip flag
    #[test]
    fn test_process_no_skip_overwrites() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let input = temp_dir.path().join("b.txt");
        let output = temp_dir.path().join("b_result.txt");
        assert!(fs::write(&input, "x\n").is_ok());
        assert!(fs::write(&output, "stale\n").is_ok());

        let mut processor = FileProcessor::new(quiet_cli(&input, &["--no-skip"]));
        assert!(processor.process().is_ok());
        assert_eq!(
            fs::read_to_string(&output).ok().as_deref(),
            Some("  0\n0 x\n")
        );
    }

    // Tests invalid targets and ragged input surface as errors
    // Verified by silently skipping unparseable files
    #[test]
    fn test_process_errors() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let wrong_type = temp_dir.path().join("grid.csv");
        assert!(fs::write(&wrong_type, "1,2\n").is_ok());
        assert!(FileProcessor::new(quiet_cli(&wrong_type, &[])).process().is_err());

        let missing = temp_dir.path().join("missing");
        assert!(FileProcessor::new(quiet_cli(&missing, &[])).process().is_err());

        let ragged = temp_dir.path().join("ragged.txt");
        assert!(fs::write(&ragged, "###\n#\n").is_ok());
        assert!(FileProcessor::new(quiet_cli(&ragged, &[])).process().is_err());
    }
}
