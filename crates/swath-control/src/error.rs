//! Error types for the agent controller.

use std::error::Error;
use std::fmt;

/// Errors from agent construction and control-law evaluation.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlError {
    /// An agent parameter failed validation at construction.
    InvalidParameter {
        /// Description of the failing parameter.
        reason: String,
    },
    /// The virtual center violated a region constraint: the barrier
    /// formulation is undefined outside the feasible set, so this is a
    /// logic or configuration error (gain too small, infeasible initial
    /// pose) and aborts the run. Never clamped.
    InfeasibleState {
        /// Index of the violated half-plane constraint.
        constraint: usize,
        /// The non-positive margin observed.
        margin: f64,
    },
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { reason } => write!(f, "invalid agent parameter: {reason}"),
            Self::InfeasibleState { constraint, margin } => write!(
                f,
                "region constraint {constraint} violated (margin {margin:.6e})"
            ),
        }
    }
}

impl Error for ControlError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infeasible_display_names_constraint() {
        let e = ControlError::InfeasibleState {
            constraint: 3,
            margin: -0.25,
        };
        let msg = format!("{e}");
        assert!(msg.contains('3'));
        assert!(msg.contains("violated"));
    }
}
