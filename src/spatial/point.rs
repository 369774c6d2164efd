//! Integer 2D point used both as a grid coordinate and as a displacement
//!
//! Points order row-major: `y` is compared first, then `x`, so sorting a set
//! of positions yields the same order a grid enumerates its cells in.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::io::error::{GridError, parse_error};

/// Signed integer pair `(x, y)` with `y` growing downwards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point2 {
    /// Horizontal coordinate (column)
    pub x: i64,
    /// Vertical coordinate (row)
    pub y: i64,
}

/// The four axis-aligned unit offsets in order Up, Right, Down, Left
pub const DISTANCE_1: [Point2; 4] = [
    Point2::new(0, -1),
    Point2::new(1, 0),
    Point2::new(0, 1),
    Point2::new(-1, 0),
];

/// The eight surrounding offsets, clockwise starting at Up
pub const DISTANCE_1_OR_DIAGONAL: [Point2; 8] = [
    Point2::new(0, -1),
    Point2::new(1, -1),
    Point2::new(1, 0),
    Point2::new(1, 1),
    Point2::new(0, 1),
    Point2::new(-1, 1),
    Point2::new(-1, 0),
    Point2::new(-1, -1),
];

impl Point2 {
    /// The origin
    pub const ZERO: Self = Self::new(0, 0);
    /// Unit step along the x axis
    pub const UNIT_X: Self = Self::new(1, 0);
    /// Unit step along the y axis
    pub const UNIT_Y: Self = Self::new(0, 1);

    /// Create a point from its coordinates
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Manhattan length `|x| + |y|`
    #[inline]
    pub const fn absolute(self) -> i64 {
        self.x.abs() + self.y.abs()
    }

    /// Manhattan distance to another point
    #[inline]
    pub const fn distance(self, to: Self) -> i64 {
        (to.x - self.x).abs() + (to.y - self.y).abs()
    }

    /// Angle from the positive x axis in radians, in `(-π, π]`
    ///
    /// With `y` growing downwards a positive angle turns clockwise on screen.
    pub fn angle(self) -> f64 {
        (self.y as f64).atan2(self.x as f64)
    }

    /// Copy of this point with `x` replaced
    #[must_use]
    pub const fn with_x(self, x: i64) -> Self {
        Self { x, ..self }
    }

    /// Copy of this point with `y` replaced
    #[must_use]
    pub const fn with_y(self, y: i64) -> Self {
        Self { y, ..self }
    }

    /// Apply every offset to this point, preserving offset order
    pub fn applying_offsets<const N: usize>(self, offsets: [Self; N]) -> [Self; N] {
        offsets.map(|offset| self + offset)
    }

    /// The four axis-aligned neighbours in order Up, Right, Down, Left
    pub fn neighbors(self) -> [Self; 4] {
        self.applying_offsets(DISTANCE_1)
    }

    /// The eight surrounding neighbours, clockwise starting at Up
    pub fn neighbors_with_diagonals(self) -> [Self; 8] {
        self.applying_offsets(DISTANCE_1_OR_DIAGONAL)
    }
}

impl Ord for Point2 {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point2 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Point2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<i64> for Point2 {
    type Output = Self;

    fn mul(self, scale: i64) -> Self {
        Self::new(self.x * scale, self.y * scale)
    }
}

impl Mul<Point2> for i64 {
    type Output = Point2;

    fn mul(self, vec: Point2) -> Point2 {
        vec * self
    }
}

impl MulAssign<i64> for Point2 {
    fn mul_assign(&mut self, scale: i64) {
        self.x *= scale;
        self.y *= scale;
    }
}

// Truncates toward zero like the underlying integer division
impl Div<i64> for Point2 {
    type Output = Self;

    fn div(self, divisor: i64) -> Self {
        Self::new(self.x / divisor, self.y / divisor)
    }
}

impl Neg for Point2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<(i64, i64)> for Point2 {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses `"x,y"` with optional surrounding whitespace
///
/// Errors carry line number 1; line-oriented callers rewrite it.
impl FromStr for Point2 {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| parse_error(1, &format!("expected 'x,y', found '{s}'")))?;
        let x = x
            .trim()
            .parse::<i64>()
            .map_err(|e| parse_error(1, &format!("invalid x coordinate '{}': {e}", x.trim())))?;
        let y = y
            .trim()
            .parse::<i64>()
            .map_err(|e| parse_error(1, &format!("invalid y coordinate '{}': {e}", y.trim())))?;
        Ok(Self::new(x, y))
    }
}
