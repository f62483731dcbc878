use std::collections::BTreeSet;

use log::debug;
use veer_core::{Cell, Grid, Heading};

use crate::cost::CostModel;
use crate::state::State;
use crate::table::CostTable;

/// Minimum total cost from the grid's start (facing east) to its goal, with
/// the default [`CostModel`]. `None` when the goal is unreachable.
pub fn minimum_cost(grid: &Grid) -> Option<u64> {
    Query::new(grid).run().minimum_cost()
}

/// Every cell on at least one minimum-cost route from the start (facing
/// east) to the goal, with the default [`CostModel`].
pub fn cells_on_optimal_paths(grid: &Grid) -> BTreeSet<Cell> {
    Query::new(grid).run().optimal_cells()
}

/// Number of cells returned by [`cells_on_optimal_paths`].
pub fn optimal_cell_count(grid: &Grid) -> usize {
    cells_on_optimal_paths(grid).len()
}

/// Options for a single search over one grid.
///
/// ```
/// use veer_core::{Grid, Heading};
/// use veer_paths::{CostModel, Query};
///
/// let grid = Grid::parse("S.\n.E").unwrap();
/// let solution = Query::new(&grid)
///     .with_costs(CostModel::new(1, 10).unwrap())
///     .with_heading(Heading::South)
///     .run();
/// assert_eq!(solution.minimum_cost(), Some(12));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Query<'g> {
    grid: &'g Grid,
    costs: CostModel,
    heading: Heading,
}

impl<'g> Query<'g> {
    /// Start heading for the agent unless overridden.
    pub const DEFAULT_HEADING: Heading = Heading::East;

    pub fn new(grid: &'g Grid) -> Self {
        Self {
            grid,
            costs: CostModel::default(),
            heading: Self::DEFAULT_HEADING,
        }
    }

    /// Use a custom cost model.
    pub fn with_costs(mut self, costs: CostModel) -> Self {
        self.costs = costs;
        self
    }

    /// Start the agent facing `heading`.
    pub fn with_heading(mut self, heading: Heading) -> Self {
        self.heading = heading;
        self
    }

    /// Propagate the cost table. Optimal cells are enumerated lazily by the
    /// returned [`Solution`].
    pub fn run(self) -> Solution<'g> {
        debug!(
            "query: {} grid, start {}, goal {}, {}",
            self.grid.bounds(),
            self.grid.start(),
            self.grid.goal(),
            self.costs
        );
        let table = CostTable::propagate(self.grid, self.grid.goal(), self.costs);
        Solution {
            grid: self.grid,
            costs: self.costs,
            start: State::new(self.grid.start(), self.heading),
            table,
        }
    }
}

/// Result of one [`Query`]. Owns the cost table for that query only.
#[derive(Clone, Debug)]
pub struct Solution<'g> {
    grid: &'g Grid,
    costs: CostModel,
    start: State,
    table: CostTable,
}

impl Solution<'_> {
    /// Cost of the cheapest route from the start state, or `None` when the
    /// goal is unreachable.
    pub fn minimum_cost(&self) -> Option<u64> {
        self.table.get(self.start)
    }

    /// Whether any route to the goal exists.
    pub fn is_reachable(&self) -> bool {
        self.minimum_cost().is_some()
    }

    /// Every cell on at least one route costing [`minimum_cost`](Self::minimum_cost).
    pub fn optimal_cells(&self) -> BTreeSet<Cell> {
        self.table.optimal_cells(self.grid, self.costs, self.start)
    }

    /// Size of [`optimal_cells`](Self::optimal_cells).
    pub fn optimal_cell_count(&self) -> usize {
        self.optimal_cells().len()
    }

    /// The starting state.
    pub fn start(&self) -> State {
        self.start
    }

    /// The cost model used.
    pub fn costs(&self) -> CostModel {
        self.costs
    }

    /// The full cost table.
    pub fn table(&self) -> &CostTable {
        &self.table
    }

    /// Consume the solution, keeping only the cost table.
    pub fn into_table(self) -> CostTable {
        self.table
    }
}
