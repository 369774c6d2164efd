//! Text rendering of grids for debugging output
//!
//! Every element is rendered with `Display` and right-aligned to the widest
//! rendering, so columns line up regardless of element width.

use std::fmt;

use crate::spatial::grid::Grid;

impl<T: fmt::Display> Grid<T> {
    /// One string per row with cells right-aligned and space-separated
    pub fn content_lines(&self) -> Vec<String> {
        let rendered = self.map(ToString::to_string);
        let cell_width = rendered
            .elements()
            .map(|cell| cell.chars().count())
            .max()
            .unwrap_or(0);

        rendered
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| format!("{cell:>cell_width$}"))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content_lines().join("\n"))
    }
}

// Row and column labels cycle through 0-9
fn index_digit(index: usize) -> char {
    char::from_digit((index % 10) as u32, 10).unwrap_or('?')
}

impl Grid<char> {
    /// Character grid with a column index header and row index prefixes
    ///
    /// Indices are shown modulo 10 so they stay one character wide.
    pub fn annotated(&self) -> String {
        let header: String = std::iter::once(' ')
            .chain((0..self.width()).flat_map(|x| [' ', index_digit(x)]))
            .collect();

        std::iter::once(header)
            .chain(
                self.content_lines()
                    .into_iter()
                    .enumerate()
                    .map(|(y, line)| format!("{} {line}", index_digit(y))),
            )
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Grid<bool> {
    /// Two characters per cell: `██` for set cells, `··` for clear ones
    pub fn binary_image(&self) -> String {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|&set| if set { "██" } else { "··" })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
