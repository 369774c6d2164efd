//! Constants and runtime configuration defaults

// Input discovery
/// Extension of grid text files picked up by the CLI
pub const INPUT_EXTENSION: &str = "txt";

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";

/// Glyph for present cells when rasterizing positions
pub const PRESENT_GLYPH: char = '█';
/// Glyph for absent cells when rasterizing positions
pub const ABSENT_GLYPH: char = '·';

/// Pixels per cell edge in exported PNG images
pub const DEFAULT_IMAGE_SCALE: u32 = 4;

// Keeps exported images within a sane size for large grids
/// Maximum allowed pixels per cell edge
pub const MAX_IMAGE_SCALE: u32 = 64;

// Progress bar display settings
/// Threshold above which a batch progress bar is shown
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
