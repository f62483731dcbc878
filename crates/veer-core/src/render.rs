//! Rendering a [`Grid`] back to text, optionally with an overlay.

use std::collections::BTreeSet;
use std::fmt;

use crate::geom::Cell;
use crate::grid::{CellKind, Grid};

impl Grid {
    /// Render one character per cell, rows separated by `'\n'`.
    ///
    /// No trailing newline is emitted.
    pub fn render(&self, mut glyph: impl FnMut(Cell, CellKind) -> char) -> String {
        let mut out = String::with_capacity(self.rows() * (self.cols() + 1));
        for (cell, kind) in self.iter() {
            if cell.col == 0 && cell.row > 0 {
                out.push('\n');
            }
            out.push(glyph(cell, kind));
        }
        out
    }

    /// Render with `marker` drawn over every non-wall cell in `marked`.
    pub fn render_marked(&self, marked: &BTreeSet<Cell>, marker: char) -> String {
        self.render(|cell, kind| {
            if kind.is_open() && marked.contains(&cell) {
                marker
            } else {
                kind.to_char()
            }
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(|_, kind| kind.to_char()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
#####
#S..#
#.#E#
#####";

    #[test]
    fn display_round_trips_parse() {
        let g = Grid::parse(ROOM).unwrap();
        assert_eq!(g.to_string(), ROOM);
        assert_eq!(Grid::parse(&g.to_string()).unwrap(), g);
    }

    #[test]
    fn marked_cells_overlay_open_cells_only() {
        let g = Grid::parse(ROOM).unwrap();
        let marked: BTreeSet<Cell> = [Cell::new(1, 1), Cell::new(1, 2), Cell::new(0, 0)]
            .into_iter()
            .collect();
        let out = g.render_marked(&marked, 'O');
        assert_eq!(out, "#####\n#OO.#\n#.#E#\n#####");
    }
}
