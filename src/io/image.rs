//! PNG export of boolean grids

use std::path::Path;

use image::{GrayImage, Luma};

use crate::io::configuration::MAX_IMAGE_SCALE;
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::spatial::{Grid, Point2};

const SET_PIXEL: Luma<u8> = Luma([0]);
const CLEAR_PIXEL: Luma<u8> = Luma([255]);

/// Render a boolean grid as a black-on-white image
///
/// Every cell becomes a `scale` by `scale` block of pixels.
///
/// # Errors
///
/// Returns an error if:
/// - `scale` is zero or above `MAX_IMAGE_SCALE`
/// - The grid has no cells
pub fn render_binary(grid: &Grid<bool>, scale: u32) -> Result<GrayImage> {
    if scale == 0 || scale > MAX_IMAGE_SCALE {
        return Err(invalid_parameter(
            "scale",
            &scale,
            &format!("must be between 1 and {MAX_IMAGE_SCALE}"),
        ));
    }
    if grid.is_empty() {
        return Err(invalid_parameter(
            "grid",
            &format!("{}x{}", grid.width(), grid.height()),
            &"cannot render a grid without cells",
        ));
    }

    let width = grid.width() as u32 * scale;
    let height = grid.height() as u32 * scale;

    Ok(GrayImage::from_fn(width, height, |px, py| {
        let set = grid
            .element_at(Point2::new((px / scale) as i64, (py / scale) as i64))
            .copied()
            .unwrap_or(false);
        if set { SET_PIXEL } else { CLEAR_PIXEL }
    }))
}

/// Export a boolean grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The grid cannot be rendered (see `render_binary`)
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_binary_png(grid: &Grid<bool>, output_path: &Path, scale: u32) -> Result<()> {
    let img = render_binary(grid, scale)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GridError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| GridError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
