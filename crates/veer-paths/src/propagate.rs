use std::collections::BinaryHeap;
use std::time::Instant;

use log::{debug, trace};
use veer_core::{Cell, Heading};

use crate::cost::CostModel;
use crate::state::State;
use crate::table::{CostTable, NodeRef};
use crate::traits::Terrain;

impl CostTable {
    /// Compute the minimum cost to reach `goal` from every state of `terrain`.
    ///
    /// Runs Dijkstra backwards over the state graph, seeded with cost 0 for
    /// all four headings of `goal`. When a state `(c, h)` settles at cost
    /// `g`, two kinds of predecessors are relaxed:
    ///
    /// - the cell behind `c`, facing `h`, at `g + advance`;
    /// - every other heading of `c`, at `g + turn × quarter_turns`.
    ///
    /// An entry only ever decreases, and only on a strict improvement. Walls
    /// never receive entries. If `goal` is outside the terrain or not open
    /// the returned table is empty.
    pub fn propagate<T: Terrain + ?Sized>(terrain: &T, goal: Cell, costs: CostModel) -> Self {
        let started = Instant::now();
        let bounds = terrain.bounds();
        let mut table = CostTable::empty(bounds, goal);

        if !terrain.is_open(goal) {
            debug!("propagate: goal {goal} is not an open cell, table left empty");
            return table;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();

        // Seed the goal.
        for h in Heading::ALL {
            if let Some(slot) = table.slot(State::new(goal, h)) {
                table.set_raw(slot, 0);
                open.push(NodeRef { idx: slot, cost: 0 });
            }
        }

        while let Some(current) = open.pop() {
            // Skip stale entries superseded by a cheaper push.
            if current.cost > table.raw(current.idx) {
                continue;
            }
            table.stats.settled += 1;

            let state = table.state(current.idx);
            let g = current.cost;

            // Reorientation in place.
            for other in Heading::ALL {
                if other == state.heading {
                    continue;
                }
                let from = State::new(state.cell, other);
                let candidate = g + costs.reorient_cost(other, state.heading);
                table.relax(from, candidate, &mut open);
            }

            // One step forward from the cell behind.
            let behind = state.cell.step(state.heading.reverse());
            if terrain.is_open(behind) {
                let from = State::new(behind, state.heading);
                table.relax(from, g + costs.advance(), &mut open);
            }
        }

        debug!(
            "propagate: {} settled, {} relaxations, {} of {} states reach {} ({:?})",
            table.stats.settled,
            table.stats.relaxations,
            table.reached(),
            bounds.len() * 4,
            goal,
            started.elapsed()
        );
        table
    }

    /// Lower the entry for `state` to `candidate` if that is a strict
    /// improvement, queueing it for expansion.
    fn relax(&mut self, state: State, candidate: u64, open: &mut BinaryHeap<NodeRef>) {
        let Some(slot) = self.slot(state) else {
            return;
        };
        if candidate >= self.raw(slot) {
            return;
        }
        trace!("relax {state}: {candidate}");
        self.set_raw(slot, candidate);
        self.stats.relaxations += 1;
        open.push(NodeRef {
            idx: slot,
            cost: candidate,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veer_core::Grid;

    fn table(maze: &str) -> (Grid, CostTable) {
        let g = Grid::parse(maze).unwrap();
        let t = CostTable::propagate(&g, g.goal(), CostModel::default());
        (g, t)
    }

    #[test]
    fn goal_is_zero_for_every_heading() {
        let (g, t) = table("S..E");
        assert_eq!(t.costs_at(g.goal()), [Some(0); 4]);
    }

    #[test]
    fn straight_line_costs() {
        let (_, t) = table("S..E");
        // Facing the goal: just advances.
        assert_eq!(t.cost(Cell::new(0, 0), Heading::East), Some(3));
        assert_eq!(t.cost(Cell::new(0, 2), Heading::East), Some(1));
        // One quarter turn first.
        assert_eq!(t.cost(Cell::new(0, 0), Heading::North), Some(1003));
        assert_eq!(t.cost(Cell::new(0, 0), Heading::South), Some(1003));
        // Turning around takes two.
        assert_eq!(t.cost(Cell::new(0, 0), Heading::West), Some(2003));
    }

    #[test]
    fn corner_needs_one_turn() {
        let (_, t) = table("S.\n#E");
        // East, then turn south, then advance.
        assert_eq!(t.cost(Cell::new(0, 0), Heading::East), Some(1002));
        assert_eq!(t.cost(Cell::new(0, 1), Heading::South), Some(1));
        assert_eq!(t.cost(Cell::new(0, 1), Heading::East), Some(1001));
        assert_eq!(t.cost(Cell::new(0, 1), Heading::North), Some(2001));
    }

    #[test]
    fn walls_get_no_entries() {
        let (g, t) = table("S#E\n...");
        assert_eq!(t.costs_at(Cell::new(0, 1)), [None; 4]);
        assert!(t.get(State::new(g.start(), Heading::East)).is_some());
    }

    #[test]
    fn disconnected_start_has_no_cost() {
        let (g, t) = table("S#.\n##E");
        assert_eq!(t.best_at(g.start()), None);
        assert_eq!(t.best_at(Cell::new(0, 2)), Some(1));
    }

    #[test]
    fn walled_goal_leaves_table_empty() {
        let g = Grid::parse("S.#E").unwrap();
        let t = CostTable::propagate(&g, Cell::new(0, 2), CostModel::default());
        assert_eq!(t.reached(), 0);
        assert_eq!(t.stats(), Default::default());
    }

    #[test]
    fn stats_are_counted() {
        let (_, t) = table("S..E");
        // Every one of the 16 states is reachable and settles exactly once.
        assert_eq!(t.reached(), 16);
        assert_eq!(t.stats().settled, 16);
        // Goal seeds are not relaxations; every other state is at least one.
        assert!(t.stats().relaxations >= 12);
    }
}
