use thiserror::Error;

use crate::cost::Action;

/// Rejected [`CostModel`](crate::CostModel) parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CostError {
    #[error("{action} cost must be positive")]
    NonPositive { action: Action },
}
