use std::fmt;

use serde::Serialize;
use veer_core::{Grid, Heading};
use veer_paths::{CostModel, Solution};

/// Marker drawn over cells on some optimal route.
pub const SEAT_MARKER: char = 'O';

/// What one run of the solver prints.
#[derive(Debug, Serialize)]
pub struct Report {
    pub minimum_cost: Option<u64>,
    pub optimal_cells: usize,
    pub costs: CostModel,
    pub heading: Heading,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<String>,
}

impl Report {
    pub fn new(grid: &Grid, solution: &Solution<'_>, render: bool) -> Self {
        let cells = solution.optimal_cells();
        let map = render.then(|| grid.render_marked(&cells, SEAT_MARKER));
        Self {
            minimum_cost: solution.minimum_cost(),
            optimal_cells: cells.len(),
            costs: solution.costs(),
            heading: solution.start().heading,
            map,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.minimum_cost {
            Some(cost) => writeln!(f, "minimum cost: {cost}")?,
            None => writeln!(f, "minimum cost: unreachable")?,
        }
        writeln!(f, "optimal cells: {}", self.optimal_cells)?;
        if let Some(map) = &self.map {
            writeln!(f)?;
            writeln!(f, "{map}")?;
        }
        Ok(())
    }
}
