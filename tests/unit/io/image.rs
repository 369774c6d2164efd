//! Tests for PNG rendering of boolean grids

#[cfg(test)]
mod tests {
    use gridkit::GridError;
    use gridkit::io::image::{export_binary_png, render_binary};
    use gridkit::spatial::Grid;
    use tempfile::TempDir;

    // Tests each cell becomes a scaled block with the right shade
    // Verified by dividing pixel coordinates by the wrong axis scale
    #[test]
    fn test_render_binary_scaling() {
        let grid = Grid::from_rows([[true, false, false], [false, false, true]]);
        let Ok(img) = render_binary(&grid, 2) else {
            unreachable!("rendering a non-empty grid should succeed");
        };

        assert_eq!(img.dimensions(), (6, 4));
        assert_eq!(img.get_pixel(0, 0).0, [0]);
        assert_eq!(img.get_pixel(1, 1).0, [0]);
        assert_eq!(img.get_pixel(2, 0).0, [255]);
        assert_eq!(img.get_pixel(5, 3).0, [0]);
        assert_eq!(img.get_pixel(4, 3).0, [0]);
        assert_eq!(img.get_pixel(3, 3).0, [255]);
    }

    // Tests invalid scale and empty grids are rejected
    // Verified by removing the scale validation
    #[test]
    fn test_render_binary_invalid_input() {
        let grid = Grid::from_rows([[true]]);
        assert!(matches!(
            render_binary(&grid, 0),
            Err(GridError::InvalidParameter {
                parameter: "scale",
                ..
            })
        ));
        assert!(render_binary(&grid, 1000).is_err());

        let empty = Grid::<bool>::from_rows(Vec::<Vec<bool>>::new());
        assert!(matches!(
            render_binary(&empty, 1),
            Err(GridError::InvalidParameter {
                parameter: "grid",
                ..
            })
        ));
    }

    // Tests export writes a readable PNG and creates parent directories
    // Verified by skipping directory creation
    #[test]
    fn test_export_binary_png() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let output = temp_dir.path().join("nested").join("mask.png");
        let grid = Grid::from_rows([[false, true], [true, false]]);

        assert!(export_binary_png(&grid, &output, 3).is_ok());
        assert!(output.exists());

        let Ok(loaded) = image::open(&output) else {
            unreachable!("exported PNG should load");
        };
        let gray = loaded.to_luma8();
        assert_eq!(gray.dimensions(), (6, 6));
        assert_eq!(gray.get_pixel(3, 0).0, [0]);
        assert_eq!(gray.get_pixel(0, 0).0, [255]);
    }
}
