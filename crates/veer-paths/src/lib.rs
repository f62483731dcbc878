//! Heading-aware minimum-cost search on 2D grids.
//!
//! The agent occupies a cell and faces one of four headings. Advancing one
//! cell and turning 90° have separate costs ([`CostModel`], 1 and 1000 by
//! default), so the cheapest route depends on how often it turns, not only
//! on how far it walks.
//!
//! - **Cost propagation** ([`CostTable::propagate`]) computes the minimum
//!   remaining cost to the goal for every `(cell, heading)` [`State`].
//! - **Optimal-cell enumeration** ([`CostTable::optimal_cells`]) walks the
//!   table forward from the start and keeps every branch that ties for the
//!   minimum, yielding all cells on *any* optimal route.
//! - **Queries** ([`minimum_cost`], [`cells_on_optimal_paths`], [`Query`])
//!   tie both together for a [`veer_core::Grid`].
//!
//! Each query owns its table; nothing is cached between calls.

mod cost;
mod enumerate;
mod error;
mod propagate;
mod query;
mod state;
mod table;
mod traits;

pub use cost::{Action, CostModel};
pub use error::CostError;
pub use query::{Query, Solution, cells_on_optimal_paths, minimum_cost, optimal_cell_count};
pub use state::State;
pub use table::{CostTable, PropagationStats};
pub use traits::Terrain;
