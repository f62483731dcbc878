use veer_core::{Bounds, Cell, Heading};

use crate::state::State;

/// Sentinel stored for states with no known route to the goal.
pub(crate) const UNREACHABLE: u64 = u64::MAX;

// ---------------------------------------------------------------------------
// Internal heap entry
// ---------------------------------------------------------------------------

/// Reference to a flat state slot, ordered by `cost` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) cost: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the cheapest state first.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Counters collected while a table is propagated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PropagationStats {
    /// States popped from the worklist with their final cost.
    pub settled: usize,
    /// Strict improvements applied to table entries.
    pub relaxations: usize,
}

// ---------------------------------------------------------------------------
// CostTable
// ---------------------------------------------------------------------------

/// Minimum remaining cost to the goal for every `(cell, heading)` state.
///
/// Built by [`CostTable::propagate`]. Each cell owns a four-slot array
/// indexed by [`Heading::index`]; walls and cells with no route to the goal
/// hold no entry.
#[derive(Clone, Debug)]
pub struct CostTable {
    pub(crate) bounds: Bounds,
    pub(crate) goal: Cell,
    pub(crate) costs: Vec<[u64; 4]>,
    pub(crate) stats: PropagationStats,
}

impl CostTable {
    pub(crate) fn empty(bounds: Bounds, goal: Cell) -> Self {
        Self {
            bounds,
            goal,
            costs: vec![[UNREACHABLE; 4]; bounds.len()],
            stats: PropagationStats::default(),
        }
    }

    /// The grid dimensions this table covers.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The cell every cost is measured towards.
    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Counters from the propagation run that built this table.
    #[inline]
    pub fn stats(&self) -> PropagationStats {
        self.stats
    }

    /// Minimum cost to reach the goal from `state`, or `None` when the goal
    /// cannot be reached from it.
    #[inline]
    pub fn get(&self, state: State) -> Option<u64> {
        self.cost(state.cell, state.heading)
    }

    /// Same as [`get`](Self::get) with the state spelled out.
    #[inline]
    pub fn cost(&self, cell: Cell, heading: Heading) -> Option<u64> {
        let i = self.bounds.index(cell)?;
        let c = self.costs[i][heading.index()];
        (c != UNREACHABLE).then_some(c)
    }

    /// Costs for all four headings of `cell`, indexed by [`Heading::index`].
    pub fn costs_at(&self, cell: Cell) -> [Option<u64>; 4] {
        Heading::ALL.map(|h| self.cost(cell, h))
    }

    /// Cheapest cost over all headings of `cell`.
    pub fn best_at(&self, cell: Cell) -> Option<u64> {
        self.costs_at(cell).into_iter().flatten().min()
    }

    /// Number of states with a finite cost.
    pub fn reached(&self) -> usize {
        self.costs
            .iter()
            .flatten()
            .filter(|&&c| c != UNREACHABLE)
            .count()
    }

    /// Iterate over every state with a finite cost, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (State, u64)> + '_ {
        self.costs.iter().enumerate().flat_map(move |(i, slots)| {
            let cell = self.bounds.cell(i);
            Heading::ALL.into_iter().filter_map(move |h| {
                let c = slots[h.index()];
                (c != UNREACHABLE).then_some((State::new(cell, h), c))
            })
        })
    }

    // -----------------------------------------------------------------------
    // Flat state indexing
    // -----------------------------------------------------------------------

    /// Flat slot of a state: `cell_index * 4 + heading`.
    #[inline]
    pub(crate) fn slot(&self, state: State) -> Option<usize> {
        self.bounds
            .index(state.cell)
            .map(|i| i * 4 + state.heading.index())
    }

    #[inline]
    pub(crate) fn state(&self, slot: usize) -> State {
        State::new(self.bounds.cell(slot / 4), Heading::from_index(slot % 4))
    }

    #[inline]
    pub(crate) fn raw(&self, slot: usize) -> u64 {
        self.costs[slot / 4][slot % 4]
    }

    #[inline]
    pub(crate) fn set_raw(&mut self, slot: usize, cost: u64) {
        self.costs[slot / 4][slot % 4] = cost;
    }
}
