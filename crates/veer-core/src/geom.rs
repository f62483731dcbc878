//! Geometry primitives: [`Cell`], [`Heading`] and [`Bounds`].
//!
//! Coordinates are `(row, col)`, zero-indexed, with rows growing downwards
//! (North is `row - 1`). Components are signed so that stepping off the edge
//! of a grid produces a representable cell that a bounds check can reject.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A discrete grid coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new cell coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The adjacent cell one step towards `heading`.
    #[inline]
    pub fn step(self, heading: Heading) -> Self {
        self + heading.delta()
    }

    /// The four axis-aligned neighbours, ordered like [`Heading::ALL`]
    /// (north, east, south, west). No bounds checking is done.
    #[inline]
    pub fn neighbors(self) -> [Cell; 4] {
        Heading::ALL.map(|h| self.step(h))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Cell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Heading
// ---------------------------------------------------------------------------

/// One of the four cardinal directions an agent can face.
///
/// Headings form a cycle `North → East → South → West → North`; a 90° turn
/// moves one step along it in either direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings in cycle order. `ALL[h.index()] == h`.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Position of this heading in the cycle, usable as an array index.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Heading at cycle position `i` (taken modulo 4).
    #[inline]
    pub const fn from_index(i: usize) -> Self {
        Self::ALL[i % 4]
    }

    /// Unit offset of one step in this heading.
    #[inline]
    pub const fn delta(self) -> Cell {
        match self {
            Heading::North => Cell::new(-1, 0),
            Heading::East => Cell::new(0, 1),
            Heading::South => Cell::new(1, 0),
            Heading::West => Cell::new(0, -1),
        }
    }

    /// Heading after a 90° counter-clockwise turn.
    #[inline]
    pub const fn left(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Heading after a 90° clockwise turn.
    #[inline]
    pub const fn right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The opposite heading.
    #[inline]
    pub const fn reverse(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Minimal number of 90° turns needed to face `other`: 0, 1 or 2.
    ///
    /// This is the distance between the two headings on the cycle.
    #[inline]
    pub const fn turns_to(self, other: Heading) -> u32 {
        let d = (other.index() + 4 - self.index()) % 4;
        if d > 2 { (4 - d) as u32 } else { d as u32 }
    }

    /// Heading of the unit step from `from` to an axis-aligned neighbour `to`.
    ///
    /// Returns `None` when the two cells are not adjacent.
    pub fn between(from: Cell, to: Cell) -> Option<Self> {
        let d = to - from;
        Self::ALL.into_iter().find(|h| h.delta() == d)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heading::North => "north",
            Heading::East => "east",
            Heading::South => "south",
            Heading::West => "west",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// Dimensions of a zero-origin rectangular matrix: `rows × cols` cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub rows: i32,
    pub cols: i32,
}

impl Bounds {
    /// Create bounds for a `rows × cols` matrix. Negative sizes clamp to zero.
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows: if rows < 0 { 0 } else { rows },
            cols: if cols < 0 { 0 } else { cols },
        }
    }

    /// Total number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether the matrix has no cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether `c` lies inside the matrix.
    #[inline]
    pub const fn contains(self, c: Cell) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Row-major flat index of `c`, or `None` when out of bounds.
    #[inline]
    pub fn index(self, c: Cell) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols as usize + c.col as usize)
    }

    /// Inverse of [`index`](Self::index). `idx` must be below [`len`](Self::len).
    #[inline]
    pub fn cell(self, idx: usize) -> Cell {
        let cols = self.cols.max(1) as usize;
        Cell::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Row-major iterator over every cell.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            next: 0,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Cell;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Row-major iterator over the cells of a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    next: usize,
}

impl Iterator for BoundsIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.next >= self.bounds.len() {
            return None;
        }
        let c = self.bounds.cell(self.next);
        self.next += 1;
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bounds.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BoundsIter {}
