//! Text parsing into grids and point lists
//!
//! Input is line oriented: one grid row per line. A single trailing newline
//! is ignored so files ending in `\n` do not produce an empty last row.

use std::str::FromStr;

use crate::io::error::{GridError, Result, parse_error};
use crate::spatial::{Grid, Point2};

// Text with one trailing `\n` or `\r\n` removed
fn without_final_newline(text: &str) -> &str {
    let text = text.strip_suffix('\n').unwrap_or(text);
    text.strip_suffix('\r').unwrap_or(text)
}

/// Split text into lines, dropping one trailing newline
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    without_final_newline(text)
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Grid with one cell per character
///
/// Text that is empty once its trailing newline is dropped yields a 0x0 grid.
///
/// # Errors
///
/// Returns `GridError::RaggedRows` if lines differ in length
pub fn char_grid(text: &str) -> Result<Grid<char>> {
    if without_final_newline(text).is_empty() {
        return Grid::try_from_rows(Vec::<Vec<char>>::new());
    }
    Grid::try_from_rows(lines(text).map(str::chars))
}

/// Grid with one cell per decimal digit
///
/// # Errors
///
/// Returns `GridError::Parse` for a non-digit character and
/// `GridError::RaggedRows` if lines differ in length
pub fn digit_grid(text: &str) -> Result<Grid<u32>> {
    let rows = numbered_lines(text)
        .map(|(line, content)| {
            content
                .chars()
                .map(|c| {
                    c.to_digit(10)
                        .ok_or_else(|| parse_error(line, &format!("'{c}' is not a digit")))
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;
    Grid::try_from_rows(rows)
}

/// Grid with one cell per whitespace-separated token
///
/// # Errors
///
/// Returns `GridError::Parse` for a token that fails to parse and
/// `GridError::RaggedRows` if lines hold different token counts
pub fn token_grid<T>(text: &str) -> Result<Grid<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let rows = numbered_lines(text)
        .map(|(line, content)| {
            content
                .split_whitespace()
                .map(|token| {
                    token
                        .parse::<T>()
                        .map_err(|e| parse_error(line, &format!("invalid token '{token}': {e}")))
                })
                .collect::<Result<Vec<T>>>()
        })
        .collect::<Result<Vec<_>>>()?;
    Grid::try_from_rows(rows)
}

/// One `x,y` point per non-empty line
///
/// # Errors
///
/// Returns `GridError::Parse` naming the offending line
pub fn positions(text: &str) -> Result<Vec<Point2>> {
    numbered_lines(text)
        .filter(|(_, content)| !content.trim().is_empty())
        .map(|(line, content)| {
            content.parse::<Point2>().map_err(|error| match error {
                GridError::Parse { reason, .. } => GridError::Parse { line, reason },
                other => other,
            })
        })
        .collect()
}

// Lines paired with one-based line numbers; text holding at most a line ending has none
fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let lines = (!without_final_newline(text).is_empty()).then(|| lines(text));
    lines
        .into_iter()
        .flatten()
        .enumerate()
        .map(|(index, content)| (index + 1, content))
}
