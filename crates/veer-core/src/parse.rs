//! Text form of a [`Grid`].
//!
//! One character per cell, one line per row:
//!
//! ```text
//! #####
//! #S.E#
//! #####
//! ```
//!
//! `.` is empty, `#` a wall, `S` the start and `E` the goal. Surrounding
//! whitespace of the whole text is ignored; individual lines are not trimmed.

use std::str::FromStr;

use crate::error::{GridError, Result};
use crate::geom::Cell;
use crate::grid::{CellKind, Grid};

impl Grid {
    /// Parse a grid from its text form.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(s.len());
        let mut width: Option<usize> = None;
        let mut rows = 0;

        for (row, line) in s.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let mut cols = 0;
            for (col, ch) in line.chars().enumerate() {
                let kind = CellKind::from_char(ch).ok_or(GridError::InvalidChar {
                    ch,
                    cell: Cell::new(row as i32, col as i32),
                })?;
                cells.push(kind);
                cols += 1;
            }
            match width {
                None => width = Some(cols),
                Some(expected) if expected != cols => {
                    return Err(GridError::InconsistentWidth {
                        row,
                        expected,
                        found: cols,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        Grid::new(rows, width.unwrap_or(0), cells)
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        Grid::parse(s)
    }
}
