//! The [`Grid`] type — an immutable matrix of typed maze cells.
//!
//! A `Grid` always holds exactly one [`CellKind::Start`] and one
//! [`CellKind::Goal`]; both are located once at construction and cached.

use std::fmt;

use crate::error::{GridError, Result};
use crate::geom::{Bounds, BoundsIter, Cell};

// ---------------------------------------------------------------------------
// CellKind
// ---------------------------------------------------------------------------

/// What occupies a grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CellKind {
    #[default]
    Empty,
    Wall,
    Start,
    Goal,
}

impl CellKind {
    /// Map a text-form character (`.`, `#`, `S`, `E`) to a kind.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Empty),
            '#' => Some(Self::Wall),
            'S' => Some(Self::Start),
            'E' => Some(Self::Goal),
            _ => None,
        }
    }

    /// Text-form character for this kind.
    pub const fn to_char(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::Goal => 'E',
        }
    }

    /// Whether an agent may stand on this kind of cell.
    #[inline]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Wall => "wall",
            Self::Start => "start",
            Self::Goal => "goal",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A validated rectangular maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    bounds: Bounds,
    cells: Vec<CellKind>,
    start: Cell,
    goal: Cell,
}

impl Grid {
    /// Build a grid from row-major cells.
    ///
    /// Fails when the dimensions are empty, when `cells` does not hold
    /// exactly `rows * cols` entries, or when Start or Goal is missing or
    /// duplicated.
    pub fn new(rows: usize, cols: usize, cells: Vec<CellKind>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        let expected = rows * cols;
        if cells.len() != expected {
            return Err(GridError::ShapeMismatch {
                expected,
                found: cells.len(),
            });
        }
        let bounds = Bounds::new(rows as i32, cols as i32);
        let start = find_unique(bounds, &cells, CellKind::Start)?;
        let goal = find_unique(bounds, &cells, CellKind::Goal)?;
        Ok(Self {
            bounds,
            cells,
            start,
            goal,
        })
    }

    /// Dimensions of the matrix.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.bounds.rows as usize
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.bounds.cols as usize
    }

    /// Whether `cell` lies inside the matrix.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.bounds.contains(cell)
    }

    /// The kind of the cell at `cell`.
    pub fn cell_kind(&self, cell: Cell) -> Result<CellKind> {
        self.get(cell).ok_or(GridError::OutOfBounds {
            cell,
            bounds: self.bounds,
        })
    }

    /// The kind of the cell at `cell`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<CellKind> {
        self.bounds.index(cell).map(|i| self.cells[i])
    }

    /// Whether `cell` is inside the matrix and not a wall.
    #[inline]
    pub fn is_open(&self, cell: Cell) -> bool {
        self.get(cell).is_some_and(CellKind::is_open)
    }

    /// The unique cell of the given kind.
    ///
    /// Walls and empty cells are never unique in practice, so asking for them
    /// usually yields [`GridError::MultipleMatches`].
    pub fn locate(&self, kind: CellKind) -> Result<Cell> {
        match kind {
            CellKind::Start => Ok(self.start),
            CellKind::Goal => Ok(self.goal),
            _ => find_unique(self.bounds, &self.cells, kind),
        }
    }

    /// The four axis-aligned neighbours of `cell`, without bounds checking.
    ///
    /// Combine with [`cell_kind`](Self::cell_kind) or
    /// [`is_open`](Self::is_open) to filter.
    #[inline]
    pub fn neighbors(&self, cell: Cell) -> [Cell; 4] {
        cell.neighbors()
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    /// The goal cell.
    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Number of non-wall cells.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|k| k.is_open()).count()
    }

    /// Iterate over `(Cell, CellKind)` pairs in row-major order.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            cells: self.bounds.iter(),
            kinds: &self.cells,
        }
    }
}

fn find_unique(bounds: Bounds, cells: &[CellKind], kind: CellKind) -> Result<Cell> {
    let mut found = None;
    let mut count = 0;
    for (i, &k) in cells.iter().enumerate() {
        if k == kind {
            count += 1;
            if found.is_none() {
                found = Some(i);
            }
        }
    }
    match (found, count) {
        (Some(i), 1) => Ok(bounds.cell(i)),
        (None, _) => Err(GridError::NotFound(kind)),
        _ => Err(GridError::MultipleMatches { kind, count }),
    }
}

/// Iterator over `(Cell, CellKind)` pairs of a [`Grid`].
pub struct GridIter<'a> {
    cells: BoundsIter,
    kinds: &'a [CellKind],
}

impl Iterator for GridIter<'_> {
    type Item = (Cell, CellKind);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.cells.len();
        let c = self.cells.next()?;
        Some((c, self.kinds[self.kinds.len() - rest]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cells.size_hint()
    }
}

impl ExactSizeIterator for GridIter<'_> {}

impl<'a> IntoIterator for &'a Grid {
    type Item = (Cell, CellKind);
    type IntoIter = GridIter<'a>;

    fn into_iter(self) -> GridIter<'a> {
        self.iter()
    }
}
