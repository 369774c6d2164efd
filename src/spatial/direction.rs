//! Axis-aligned directions, cyclic rotation and compact direction sets

use std::fmt;
use std::ops::{Add, BitAnd, BitOr, BitXor};

use bitvec::prelude::*;

use crate::io::error::GridError;
use crate::math::true_mod;
use crate::spatial::point::Point2;

/// A closed set of values with a fixed cyclic order
///
/// Rotation is true-modulo addition on the position in `ALL`, so negative
/// steps wrap around instead of going out of range.
pub trait Cyclic: Copy + Sized + 'static {
    /// Every value in cyclic order
    const ALL: &'static [Self];

    /// Position of this value in `ALL`
    fn index(self) -> usize;

    /// The value `by` steps further along the cycle
    #[must_use]
    fn rotated(self, by: i64) -> Self {
        let count = Self::ALL.len() as i64;
        let target = true_mod(self.index() as i64 + true_mod(by, count), count) as usize;
        Self::ALL.get(target).copied().unwrap_or(self)
    }

    /// Rotate in place by `by` steps
    fn rotate(&mut self, by: i64) {
        *self = self.rotated(by);
    }

    /// The following value in the cycle
    #[must_use]
    fn next(self) -> Self {
        self.rotated(1)
    }

    /// The preceding value in the cycle
    #[must_use]
    fn previous(self) -> Self {
        self.rotated(-1)
    }
}

/// One of the four axis-aligned directions, in clockwise order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards negative y
    Up,
    /// Towards positive x
    Right,
    /// Towards positive y
    Down,
    /// Towards negative x
    Left,
}

impl Cyclic for Direction {
    const ALL: &'static [Self] = &[Self::Up, Self::Right, Self::Down, Self::Left];

    fn index(self) -> usize {
        self as usize
    }
}

impl Direction {
    /// Unit displacement for one step in this direction
    pub const fn offset(self) -> Point2 {
        match self {
            Self::Up => Point2::new(0, -1),
            Self::Right => Point2::new(1, 0),
            Self::Down => Point2::new(0, 1),
            Self::Left => Point2::new(-1, 0),
        }
    }

    /// The direction pointing the other way
    #[must_use]
    pub fn opposite(self) -> Self {
        self.rotated(2)
    }

    /// A quarter turn clockwise
    #[must_use]
    pub fn clockwise(self) -> Self {
        self.rotated(1)
    }

    /// A quarter turn counterclockwise
    #[must_use]
    pub fn counterclockwise(self) -> Self {
        self.rotated(-1)
    }

    /// Parse a direction from arrow, compass or URDL notation
    ///
    /// Accepts `^ > v <`, `↑ → ↓ ←`, `N E S W` and `U R D L`. Letters are
    /// case-insensitive. Returns `None` for anything else.
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '^' | '↑' | 'N' | 'n' | 'U' | 'u' => Some(Self::Up),
            '>' | '→' | 'E' | 'e' | 'R' | 'r' => Some(Self::Right),
            'v' | 'V' | '↓' | 'S' | 's' | 'D' | 'd' => Some(Self::Down),
            '<' | '←' | 'W' | 'w' | 'L' | 'l' => Some(Self::Left),
            _ => None,
        }
    }

    /// Arrow glyph used when rendering
    pub const fn glyph(self) -> char {
        match self {
            Self::Up => '↑',
            Self::Right => '→',
            Self::Down => '↓',
            Self::Left => '←',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = GridError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_symbol(symbol).ok_or(GridError::UnknownDirection { symbol })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl Add<Direction> for Point2 {
    type Output = Self;

    fn add(self, direction: Direction) -> Self {
        self + direction.offset()
    }
}

type DirectionBits = BitArr!(for 4, in u8, Lsb0);

/// Set of directions packed into the low four bits of a byte
///
/// Bit `i` holds the direction at cyclic index `i`: up is bit 0, right bit 1,
/// down bit 2 and left bit 3.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DirectionSet {
    bits: DirectionBits,
}

impl DirectionSet {
    const MASK: u8 = 0b1111;

    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set containing all four directions
    pub fn all() -> Self {
        Self::from_raw(Self::MASK)
    }

    /// Create a set from a raw bit pattern, ignoring bits above the fourth
    pub fn from_raw(raw: u8) -> Self {
        Self {
            bits: BitArray::new([raw & Self::MASK]),
        }
    }

    /// The raw bit pattern
    pub fn raw(&self) -> u8 {
        let [raw] = self.bits.into_inner();
        raw
    }

    /// Add a direction
    pub fn insert(&mut self, direction: Direction) {
        self.bits.set(direction.index(), true);
    }

    /// Remove a direction
    pub fn remove(&mut self, direction: Direction) {
        self.bits.set(direction.index(), false);
    }

    /// Copy of this set with a direction added
    #[must_use]
    pub fn inserting(mut self, direction: Direction) -> Self {
        self.insert(direction);
        self
    }

    /// Test direction membership
    pub fn contains(&self, direction: Direction) -> bool {
        self.bits.get(direction.index()).as_deref() == Some(&true)
    }

    /// Test if no direction is present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Number of directions present
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Directions present, in cyclic order
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .iter()
            .copied()
            .filter(move |&direction| self.contains(direction))
    }

    /// Directions in either set
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self::from_raw(self.raw() | other.raw())
    }

    /// Directions in both sets
    #[must_use]
    pub fn intersection(self, other: Self) -> Self {
        Self::from_raw(self.raw() & other.raw())
    }

    /// Directions in exactly one of the sets
    #[must_use]
    pub fn symmetric_difference(self, other: Self) -> Self {
        Self::from_raw(self.raw() ^ other.raw())
    }
}

impl From<Direction> for DirectionSet {
    fn from(direction: Direction) -> Self {
        Self::new().inserting(direction)
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::inserting)
    }
}

impl BitOr for DirectionSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitAnd for DirectionSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitXor for DirectionSet {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        self.symmetric_difference(rhs)
    }
}

impl fmt::Debug for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DirectionSet({:04b})", self.raw())
    }
}

impl fmt::Display for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyphs: String = self.iter().map(Direction::glyph).collect();
        write!(f, "DirectionSet({glyphs})")
    }
}
