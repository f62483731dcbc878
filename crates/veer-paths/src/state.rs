use std::fmt;

use veer_core::{Cell, Heading};

use crate::cost::{Action, CostModel};
use crate::traits::Terrain;

/// A search state: where the agent stands and which way it faces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    pub cell: Cell,
    pub heading: Heading,
}

impl State {
    #[inline]
    pub const fn new(cell: Cell, heading: Heading) -> Self {
        Self { cell, heading }
    }

    /// The state reached by taking `action`, ignoring walls.
    #[inline]
    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::Advance => Self::new(self.cell.step(self.heading), self.heading),
            Action::TurnLeft => Self::new(self.cell, self.heading.left()),
            Action::TurnRight => Self::new(self.cell, self.heading.right()),
        }
    }

    /// Whether `action` is legal on `terrain`. Turns always are; advancing
    /// requires an open destination.
    #[inline]
    pub fn can<T: Terrain + ?Sized>(self, terrain: &T, action: Action) -> bool {
        match action {
            Action::Advance => terrain.is_open(self.cell.step(self.heading)),
            Action::TurnLeft | Action::TurnRight => true,
        }
    }

    /// Append every legal `(next_state, action_cost)` pair into `buf`.
    /// The caller clears `buf` before calling.
    pub fn successors<T: Terrain + ?Sized>(
        self,
        terrain: &T,
        costs: CostModel,
        buf: &mut Vec<(State, u64)>,
    ) {
        for action in Action::ALL {
            if self.can(terrain, action) {
                buf.push((self.apply(action), costs.action_cost(action)));
            }
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} facing {}", self.cell, self.heading)
    }
}
