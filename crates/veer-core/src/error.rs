use thiserror::Error;

use crate::geom::{Bounds, Cell};
use crate::grid::CellKind;

pub type Result<T> = std::result::Result<T, GridError>;

/// Errors raised while building or querying a [`Grid`](crate::Grid).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate outside the matrix was queried.
    #[error("cell {cell} is outside the {bounds} grid")]
    OutOfBounds { cell: Cell, bounds: Bounds },

    /// No cell of the requested kind exists.
    #[error("grid has no {0} cell")]
    NotFound(CellKind),

    /// More than one cell of a kind that must be unique.
    #[error("grid has {count} {kind} cells, expected exactly one")]
    MultipleMatches { kind: CellKind, count: usize },

    /// A row's width differs from the first row.
    #[error("row {row} has width {found}, expected {expected}")]
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A character with no cell kind mapping.
    #[error("invalid character {ch:?} at {cell}")]
    InvalidChar { ch: char, cell: Cell },

    /// The cell vector does not match the declared dimensions.
    #[error("expected {expected} cells, got {found}")]
    ShapeMismatch { expected: usize, found: usize },

    /// No rows or no columns.
    #[error("grid is empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let e = GridError::OutOfBounds {
            cell: Cell::new(4, -1),
            bounds: Bounds::new(3, 3),
        };
        assert_eq!(e.to_string(), "cell (4, -1) is outside the 3x3 grid");

        let e = GridError::MultipleMatches {
            kind: CellKind::Start,
            count: 2,
        };
        assert_eq!(e.to_string(), "grid has 2 start cells, expected exactly one");

        assert_eq!(
            GridError::NotFound(CellKind::Goal).to_string(),
            "grid has no goal cell"
        );
    }
}
