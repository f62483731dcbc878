//! Tie-aware enumeration of every cell on some optimal route.

use std::collections::BTreeSet;

use log::{debug, trace};
use veer_core::Cell;

use crate::cost::CostModel;
use crate::state::State;
use crate::table::CostTable;
use crate::traits::Terrain;

impl CostTable {
    /// Collect every cell that lies on at least one minimum-cost route from
    /// `start` to the goal.
    ///
    /// Walks forward from `start`. At each state, every successor whose
    /// `action_cost + remaining_cost` equals the cheapest such total is
    /// followed, so equal-cost branches are all kept. Each state is expanded
    /// at most once. Returns an empty set when `start` cannot reach the goal.
    ///
    /// `terrain` and `costs` must be the ones this table was propagated with.
    pub fn optimal_cells<T: Terrain + ?Sized>(
        &self,
        terrain: &T,
        costs: CostModel,
        start: State,
    ) -> BTreeSet<Cell> {
        let mut visited = BTreeSet::new();
        let Some(limit) = self.get(start) else {
            debug!("optimal_cells: {start} cannot reach {}", self.goal);
            return visited;
        };
        visited.insert(start.cell);

        let mut expanded = vec![false; self.bounds.len() * 4];
        let mut stack = vec![(start, limit)];
        let mut buf = Vec::with_capacity(3);

        while let Some((state, budget)) = stack.pop() {
            if state.cell == self.goal {
                continue;
            }
            let Some(slot) = self.slot(state) else {
                continue;
            };
            if std::mem::replace(&mut expanded[slot], true) {
                continue;
            }

            buf.clear();
            state.successors(terrain, costs, &mut buf);

            let best = buf
                .iter()
                .filter_map(|&(next, step)| self.get(next).map(|rest| step + rest))
                .min();
            let Some(best) = best else {
                continue;
            };
            if best > budget {
                trace!("optimal_cells: {state} exceeds budget {budget} ({best})");
                continue;
            }

            for &(next, step) in &buf {
                let Some(rest) = self.get(next) else {
                    continue;
                };
                if step + rest == best {
                    visited.insert(next.cell);
                    stack.push((next, rest));
                }
            }
        }

        debug!(
            "optimal_cells: {} cells on optimal routes from {start} (cost {limit})",
            visited.len()
        );
        visited
    }
}
