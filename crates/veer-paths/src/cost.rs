use std::fmt;

use veer_core::Heading;

use crate::error::CostError;

/// One step an agent can take from a [`State`](crate::State).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Action {
    /// Move one cell in the current heading.
    Advance,
    /// Rotate 90° counter-clockwise in place.
    TurnLeft,
    /// Rotate 90° clockwise in place.
    TurnRight,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Advance, Action::TurnLeft, Action::TurnRight];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Advance => "advance",
            Action::TurnLeft => "turn-left",
            Action::TurnRight => "turn-right",
        };
        f.write_str(name)
    }
}

/// Price of each action.
///
/// Both costs must be positive so that every cycle in the state graph has a
/// positive cost; [`CostModel::new`] enforces this.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CostModelRepr", into = "CostModelRepr"))]
pub struct CostModel {
    advance: u32,
    turn: u32,
}

impl CostModel {
    pub const DEFAULT_ADVANCE: u32 = 1;
    pub const DEFAULT_TURN: u32 = 1000;

    /// Create a cost model. Fails if either cost is zero.
    pub fn new(advance: u32, turn: u32) -> Result<Self, CostError> {
        if advance == 0 {
            return Err(CostError::NonPositive {
                action: Action::Advance,
            });
        }
        if turn == 0 {
            return Err(CostError::NonPositive {
                action: Action::TurnLeft,
            });
        }
        Ok(Self { advance, turn })
    }

    /// Cost of moving one cell forward.
    #[inline]
    pub fn advance(self) -> u64 {
        self.advance as u64
    }

    /// Cost of a single 90° turn.
    #[inline]
    pub fn turn(self) -> u64 {
        self.turn as u64
    }

    /// Cost of performing `action` once.
    #[inline]
    pub fn action_cost(self, action: Action) -> u64 {
        match action {
            Action::Advance => self.advance(),
            Action::TurnLeft | Action::TurnRight => self.turn(),
        }
    }

    /// Cost of rotating in place from `from` to `to` by the shortest way.
    #[inline]
    pub fn reorient_cost(self, from: Heading, to: Heading) -> u64 {
        self.turn() * from.turns_to(to) as u64
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            advance: Self::DEFAULT_ADVANCE,
            turn: Self::DEFAULT_TURN,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct CostModelRepr {
    advance: u32,
    turn: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<CostModelRepr> for CostModel {
    type Error = CostError;

    fn try_from(r: CostModelRepr) -> Result<Self, CostError> {
        CostModel::new(r.advance, r.turn)
    }
}

#[cfg(feature = "serde")]
impl From<CostModel> for CostModelRepr {
    fn from(m: CostModel) -> Self {
        Self {
            advance: m.advance,
            turn: m.turn,
        }
    }
}

impl fmt::Display for CostModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "advance={} turn={}", self.advance, self.turn)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cost_model_round_trip() {
        let m = CostModel::new(2, 500).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"advance":2,"turn":500}"#);
        let back: CostModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn zero_cost_fails_to_deserialize() {
        let err = serde_json::from_str::<CostModel>(r#"{"advance":1,"turn":0}"#).unwrap_err();
        assert!(err.to_string().contains("must be positive"), "{err}");
    }

    #[test]
    fn action_names() {
        assert_eq!(serde_json::to_string(&Action::TurnLeft).unwrap(), r#""turn_left""#);
    }
}
