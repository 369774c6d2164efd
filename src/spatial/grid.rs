//! Dense rectangular grid addressed by `Point2`
//!
//! Storage is a row-major `Array2` of shape `(height, width)`. Cells are
//! enumerated row by row: `x` advances fastest and `y` only advances after a
//! full row, which is also the order of `Point2`'s `Ord`.
//!
//! Access comes in two flavours. `get`, indexing and `set` assert that the
//! coordinate lies inside the grid and panic otherwise; `element_at` and
//! friends return `None` for out-of-grid coordinates so edge probes can be
//! handled as ordinary control flow.

use std::iter::FusedIterator;
use std::ops::{Index, IndexMut};

use ndarray::{Array2, ArrayView1, Axis};

use crate::io::configuration::{ABSENT_GLYPH, PRESENT_GLYPH};
use crate::io::error::{GridError, Result};
use crate::math::true_mod;
use crate::spatial::point::Point2;

/// Dense rectangular 2D container
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    cells: Array2<T>,
}

impl<T> Grid<T> {
    /// Create a grid from a sequence of equally long rows
    ///
    /// Width is the length of the first row; an empty sequence gives a 0x0 grid.
    ///
    /// # Errors
    ///
    /// Returns `GridError::RaggedRows` if any row's length differs from the first
    pub fn try_from_rows<R, I>(rows: R) -> Result<Self>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (row, elements) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(elements);
            let found = cells.len() - before;

            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(GridError::RaggedRows {
                    row,
                    expected,
                    found,
                });
            }
            height += 1;
        }

        Ok(Self::from_row_major(width.unwrap_or(0), height, cells))
    }

    /// Create a grid from a sequence of equally long rows
    ///
    /// # Panics
    ///
    /// Panics if the rows are ragged
    // Ragged input is a programming error at construction sites
    #[allow(clippy::panic)]
    pub fn from_rows<R, I>(rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        match Self::try_from_rows(rows) {
            Ok(grid) => grid,
            Err(error) => panic!("{error}"),
        }
    }

    /// Create a grid by computing every cell from its position
    ///
    /// `element` is called exactly once per cell, in row-major order.
    pub fn from_fn(width: usize, height: usize, mut element: impl FnMut(Point2) -> T) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(element(Point2::new(x as i64, y as i64)));
            }
        }
        Self::from_row_major(width, height, cells)
    }

    fn from_row_major(width: usize, height: usize, cells: Vec<T>) -> Self {
        match Array2::from_shape_vec((height, width), cells) {
            Ok(cells) => Self { cells },
            Err(error) => unreachable!("row-major buffer always matches its shape: {error}"),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Test if the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Test whether `0 <= x < width` and `0 <= y < height`
    pub fn is_in_grid(&self, position: Point2) -> bool {
        self.cell_index(position).is_some()
    }

    // Storage index as (row, col), or None outside the grid
    fn cell_index(&self, position: Point2) -> Option<(usize, usize)> {
        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        (x < self.width() && y < self.height()).then_some((y, x))
    }

    // Out-of-grid access through the asserting accessors is a caller bug
    #[allow(clippy::panic)]
    fn expect_index(&self, position: Point2) -> (usize, usize) {
        let Some(index) = self.cell_index(position) else {
            panic!(
                "position {position} is outside the {}x{} grid",
                self.width(),
                self.height()
            );
        };
        index
    }

    /// Element at `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the grid
    pub fn get(&self, x: i64, y: i64) -> &T {
        &self[Point2::new(x, y)]
    }

    /// Mutable element at `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the grid
    pub fn get_mut(&mut self, x: i64, y: i64) -> &mut T {
        &mut self[Point2::new(x, y)]
    }

    /// Replace the element at `position`
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the grid
    pub fn set(&mut self, position: Point2, value: T) {
        self[position] = value;
    }

    /// Element at `position`, or `None` outside the grid
    pub fn element_at(&self, position: Point2) -> Option<&T> {
        self.cell_index(position)
            .and_then(|index| self.cells.get(index))
    }

    /// Mutable element at `position`, or `None` outside the grid
    pub fn element_at_mut(&mut self, position: Point2) -> Option<&mut T> {
        self.cell_index(position)
            .and_then(|index| self.cells.get_mut(index))
    }

    /// Position paired with its element, or `None` outside the grid
    pub fn indexed_element_at(&self, position: Point2) -> Option<(Point2, &T)> {
        self.element_at(position).map(|element| (position, element))
    }

    /// Fold an arbitrary position onto the grid, treating it as a torus
    ///
    /// # Panics
    ///
    /// Panics if the grid has zero width or zero height
    pub fn wrap(&self, position: Point2) -> Point2 {
        assert!(
            !self.is_empty(),
            "cannot wrap into a {}x{} grid",
            self.width(),
            self.height()
        );
        Point2::new(
            true_mod(position.x, self.width() as i64),
            true_mod(position.y, self.height() as i64),
        )
    }

    /// Element at `position` after wrapping it onto the grid
    ///
    /// # Panics
    ///
    /// Panics if the grid has zero width or zero height
    pub fn element_wrapping(&self, position: Point2) -> &T {
        &self[self.wrap(position)]
    }

    /// Borrowed view of row `y`
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`
    pub fn row(&self, y: usize) -> ArrayView1<'_, T> {
        assert!(y < self.height(), "row {y} out of range 0..{}", self.height());
        self.cells.row(y)
    }

    /// Lazy borrowed view of column `x`
    ///
    /// The view reads straight from the grid's storage; nothing is copied.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width`
    pub fn column(&self, x: usize) -> ArrayView1<'_, T> {
        assert!(x < self.width(), "column {x} out of range 0..{}", self.width());
        self.cells.column(x)
    }

    /// Views of every row, top to bottom
    pub fn rows(&self) -> impl ExactSizeIterator<Item = ArrayView1<'_, T>> + '_ {
        self.cells.axis_iter(Axis(0))
    }

    /// Views of every column, left to right
    pub fn columns(&self) -> impl ExactSizeIterator<Item = ArrayView1<'_, T>> + '_ {
        self.cells.axis_iter(Axis(1))
    }

    /// Swap two rows in place
    ///
    /// # Panics
    ///
    /// Panics if either row is out of range
    pub fn swap_rows(&mut self, first: usize, second: usize) {
        assert!(
            first < self.height() && second < self.height(),
            "rows {first} and {second} must both be below {}",
            self.height()
        );
        for x in 0..self.width() {
            self.cells.swap((first, x), (second, x));
        }
    }

    /// Every position in row-major order
    pub fn positions(&self) -> Positions {
        Positions::new(self.width(), self.height())
    }

    /// Every element in row-major order
    pub fn elements(&self) -> ndarray::iter::Iter<'_, T, ndarray::Ix2> {
        self.cells.iter()
    }

    /// Mutable elements in row-major order
    pub fn elements_mut(&mut self) -> ndarray::iter::IterMut<'_, T, ndarray::Ix2> {
        self.cells.iter_mut()
    }

    /// Every position paired with its element, in row-major order
    pub fn indexed(&self) -> impl Iterator<Item = (Point2, &T)> + '_ {
        self.positions().zip(self.elements())
    }

    /// Position following `position` in row-major order
    ///
    /// The successor of the last cell is `(0, height)`, the end position.
    pub fn index_after(&self, position: Point2) -> Point2 {
        successor(self.width(), position)
    }

    /// Position preceding `position` in row-major order
    pub fn index_before(&self, position: Point2) -> Point2 {
        predecessor(self.width(), position)
    }

    /// Axis-aligned neighbours of `position` that lie inside the grid
    ///
    /// Yields lazily in order Up, Right, Down, Left.
    pub fn neighbors(&self, position: Point2) -> impl Iterator<Item = &T> + '_ {
        position
            .neighbors()
            .into_iter()
            .filter_map(move |neighbor| self.element_at(neighbor))
    }

    /// Neighbours including diagonals, clockwise from Up, inside the grid
    pub fn neighbors_with_diagonals(&self, position: Point2) -> impl Iterator<Item = &T> + '_ {
        position
            .neighbors_with_diagonals()
            .into_iter()
            .filter_map(move |neighbor| self.element_at(neighbor))
    }

    /// Axis-aligned in-grid neighbours together with their positions
    pub fn indexed_neighbors(&self, position: Point2) -> impl Iterator<Item = (Point2, &T)> + '_ {
        position
            .neighbors()
            .into_iter()
            .filter_map(move |neighbor| self.indexed_element_at(neighbor))
    }

    /// Apply `transform` to every element, keeping the shape
    ///
    /// Elements are visited in row-major order.
    pub fn map<U>(&self, transform: impl FnMut(&T) -> U) -> Grid<U> {
        let cells = self.elements().map(transform).collect();
        Grid::from_row_major(self.width(), self.height(), cells)
    }

    /// Apply `transform` to every position and element, keeping the shape
    pub fn map_indexed<U>(&self, mut transform: impl FnMut(Point2, &T) -> U) -> Grid<U> {
        let cells = self
            .indexed()
            .map(|(position, element)| transform(position, element))
            .collect();
        Grid::from_row_major(self.width(), self.height(), cells)
    }

    /// Grid whose cells hold their own positions
    pub fn position_grid(&self) -> Grid<Point2> {
        Grid::from_fn(self.width(), self.height(), |position| position)
    }

    /// Positions whose elements satisfy `predicate`, in row-major order
    pub fn positions_where(&self, mut predicate: impl FnMut(&T) -> bool) -> Vec<Point2> {
        self.indexed()
            .filter(|(_, element)| predicate(element))
            .map(|(position, _)| position)
            .collect()
    }

    /// Number of elements satisfying `predicate`
    pub fn count_where(&self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        self.elements().filter(|element| predicate(element)).count()
    }
}

impl<T: Clone> Grid<T> {
    /// Create a `width` by `height` grid where every cell is a clone of `element`
    pub fn from_elem(width: usize, height: usize, element: T) -> Self {
        Self {
            cells: Array2::from_elem((height, width), element),
        }
    }

    /// Rasterize a set of positions
    ///
    /// The grid is just large enough to hold every position, starts filled
    /// with `absent`, and every listed position is set to `present`. An empty
    /// sequence yields a 1x1 grid holding `absent`.
    ///
    /// # Panics
    ///
    /// Panics if any position has a negative coordinate
    pub fn from_positions(
        positions: impl IntoIterator<Item = Point2>,
        present: T,
        absent: T,
    ) -> Self {
        let positions: Vec<Point2> = positions.into_iter().collect();
        let width = positions.iter().map(|p| p.x).max().unwrap_or(0) + 1;
        let height = positions.iter().map(|p| p.y).max().unwrap_or(0) + 1;
        assert!(
            width > 0 && height > 0,
            "positions must lie in the non-negative quadrant"
        );

        let mut grid = Self::from_elem(width as usize, height as usize, absent);
        for position in positions {
            grid.set(position, present.clone());
        }
        grid
    }

    /// Copy with rows and columns swapped
    ///
    /// The result is `height` wide and `width` tall, and
    /// `result[(y, x)] == self[(x, y)]` for every cell.
    #[must_use]
    pub fn transposed(&self) -> Self {
        Self {
            cells: self.cells.t().as_standard_layout().into_owned(),
        }
    }

    /// Element at `position` cloned out, or `None` outside the grid
    pub fn cloned_at(&self, position: Point2) -> Option<T> {
        self.element_at(position).cloned()
    }
}

impl<T: PartialEq> Grid<T> {
    /// Positions holding `element`, in row-major order
    pub fn positions_of(&self, element: &T) -> Vec<Point2> {
        self.positions_where(|candidate| candidate == element)
    }
}

impl<T: Clone> Grid<Grid<T>> {
    /// Tile a grid of equally shaped grids into one grid
    ///
    /// The tile at outer position `(i, j)` lands at `(i * tile_width, j * tile_height)`.
    ///
    /// # Errors
    ///
    /// Returns `GridError::MismatchedTiles` if the inner grids differ in shape
    pub fn try_flattened(&self) -> Result<Grid<T>> {
        let Some(first) = self.elements().next() else {
            return Ok(Grid::from_row_major(0, 0, Vec::new()));
        };
        let expected = (first.width(), first.height());

        for (position, tile) in self.indexed() {
            let found = (tile.width(), tile.height());
            if found != expected {
                return Err(GridError::MismatchedTiles {
                    position,
                    expected,
                    found,
                });
            }
        }

        let (tile_width, tile_height) = (expected.0 as i64, expected.1 as i64);
        Ok(Grid::from_fn(
            self.width() * expected.0,
            self.height() * expected.1,
            |p| {
                let tile = &self[Point2::new(p.x / tile_width, p.y / tile_height)];
                tile[Point2::new(p.x % tile_width, p.y % tile_height)].clone()
            },
        ))
    }

    /// Tile a grid of equally shaped grids into one grid
    ///
    /// # Panics
    ///
    /// Panics if the inner grids differ in shape
    // Mismatched tiles are a caller contract violation
    #[allow(clippy::panic)]
    pub fn flattened(&self) -> Grid<T> {
        match self.try_flattened() {
            Ok(grid) => grid,
            Err(error) => panic!("{error}"),
        }
    }
}

impl Grid<char> {
    /// Rasterize positions as `█` on a `·` background
    pub fn from_marked_positions(positions: impl IntoIterator<Item = Point2>) -> Self {
        Self::from_positions(positions, PRESENT_GLYPH, ABSENT_GLYPH)
    }
}

// Bounds are asserted by expect_index
#[allow(clippy::indexing_slicing)]
impl<T> Index<Point2> for Grid<T> {
    type Output = T;

    fn index(&self, position: Point2) -> &T {
        let index = self.expect_index(position);
        &self.cells[index]
    }
}

#[allow(clippy::indexing_slicing)]
impl<T> IndexMut<Point2> for Grid<T> {
    fn index_mut(&mut self, position: Point2) -> &mut T {
        let index = self.expect_index(position);
        &mut self.cells[index]
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = ndarray::iter::Iter<'a, T, ndarray::Ix2>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements()
    }
}

/// Row-major successor of `position` in a grid `width` cells wide
pub const fn successor(width: usize, position: Point2) -> Point2 {
    if position.x + 1 < width as i64 {
        Point2::new(position.x + 1, position.y)
    } else {
        Point2::new(0, position.y + 1)
    }
}

/// Row-major predecessor of `position` in a grid `width` cells wide
pub const fn predecessor(width: usize, position: Point2) -> Point2 {
    if position.x >= 1 {
        Point2::new(position.x - 1, position.y)
    } else {
        Point2::new(width as i64 - 1, position.y - 1)
    }
}

/// Row-major iterator over the positions of a grid
///
/// Steps with `successor` from `(0, 0)` and with `predecessor` back from the
/// end position `(0, height)`.
#[derive(Debug, Clone)]
pub struct Positions {
    width: usize,
    front: Point2,
    back: Point2,
    remaining: usize,
}

impl Positions {
    const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            front: Point2::ZERO,
            back: Point2::new(0, height as i64),
            remaining: width * height,
        }
    }
}

impl Iterator for Positions {
    type Item = Point2;

    fn next(&mut self) -> Option<Point2> {
        (self.remaining > 0).then(|| {
            let position = self.front;
            self.front = successor(self.width, position);
            self.remaining -= 1;
            position
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Positions {
    fn next_back(&mut self) -> Option<Point2> {
        (self.remaining > 0).then(|| {
            self.back = predecessor(self.width, self.back);
            self.remaining -= 1;
            self.back
        })
    }
}

impl ExactSizeIterator for Positions {}

impl FusedIterator for Positions {}
