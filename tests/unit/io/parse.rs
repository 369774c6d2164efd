//! Tests for text parsing into grids and points

#[cfg(test)]
mod tests {
    use gridkit::GridError;
    use gridkit::io::parse::{char_grid, digit_grid, lines, positions, token_grid};
    use gridkit::spatial::{Grid, Point2};

    // Tests one trailing newline is dropped
    // Verified by splitting without stripping the suffix
    #[test]
    fn test_lines_trailing_newline() {
        assert_eq!(lines("ab\ncd\n").collect::<Vec<_>>(), vec!["ab", "cd"]);
        assert_eq!(lines("ab\r\ncd\r\n").collect::<Vec<_>>(), vec!["ab", "cd"]);
        assert_eq!(lines("ab\n\n").collect::<Vec<_>>(), vec!["ab", ""]);
    }

    // Tests character grids keep one cell per character
    // Verified by collecting bytes instead of chars
    #[test]
    fn test_char_grid() {
        let grid = char_grid("#.█\n..#\n").ok();
        assert_eq!(grid, Some(Grid::from_rows([['#', '.', '█'], ['.', '.', '#']])));
    }

    // Tests empty input yields an empty grid
    // Verified by producing a single empty row
    #[test]
    fn test_char_grid_empty() {
        let grid = char_grid("").ok();
        assert_eq!(grid.map(|g| (g.width(), g.height())), Some((0, 0)));
    }

    // Tests a lone line ending is treated like empty text
    // Verified by checking emptiness before dropping the final newline
    #[test]
    fn test_char_grid_only_newline() {
        for text in ["\n", "\r\n"] {
            let grid = char_grid(text).ok();
            assert_eq!(grid.map(|g| (g.width(), g.height())), Some((0, 0)));
        }
        let digits = digit_grid("\n").ok();
        assert_eq!(digits.map(|g| (g.width(), g.height())), Some((0, 0)));
    }

    // Tests ragged lines are reported
    // Verified by padding short lines
    #[test]
    fn test_char_grid_ragged() {
        assert!(matches!(
            char_grid("###\n##\n"),
            Err(GridError::RaggedRows { row: 1, .. })
        ));
    }

    // Tests digit grids and the line number of bad input
    // Verified by counting lines from zero
    #[test]
    fn test_digit_grid() {
        assert_eq!(
            digit_grid("123\n456").ok(),
            Some(Grid::from_rows([[1, 2, 3], [4, 5, 6]]))
        );
        assert!(matches!(
            digit_grid("12\n3x"),
            Err(GridError::Parse { line: 2, .. })
        ));
    }

    // Tests whitespace-separated tokens parse into typed cells
    // Verified by splitting on single spaces only
    #[test]
    fn test_token_grid() {
        let grid = token_grid::<i64>("10  -2 3\n4 5   60\n").ok();
        assert_eq!(grid, Some(Grid::from_rows([[10, -2, 3], [4, 5, 60]])));

        assert!(matches!(
            token_grid::<u8>("1 2\n3 300"),
            Err(GridError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            token_grid::<u8>("1 2\n3"),
            Err(GridError::RaggedRows { .. })
        ));
    }

    // Tests point lists skip blank lines and report line numbers
    // Verified by keeping the line number from Point2 parsing
    #[test]
    fn test_positions() {
        let points = positions("0,0\n\n2, 1\n").ok();
        assert_eq!(points, Some(vec![Point2::new(0, 0), Point2::new(2, 1)]));

        assert!(matches!(
            positions("1,1\n2;2"),
            Err(GridError::Parse { line: 2, .. })
        ));
    }

    // Tests parsed positions feed sparse construction
    // Verified by swapping present and absent values
    #[test]
    fn test_positions_to_grid() {
        let points = positions("0,0\n2,1").unwrap_or_default();
        let grid = Grid::from_positions(points, 1, 0);
        assert_eq!(grid, Grid::from_rows([[1, 0, 0], [0, 0, 1]]));
    }
}
