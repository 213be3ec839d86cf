//! Simulation errors.
//!
//! Every error is local to the simulation call that raised it. No partial
//! schedule accompanies an error.

use crate::models::{Tick, Violation};
use crate::validation::ValidationError;

/// Errors returned by [`crate::scheduler::Simulator`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    /// The policy selector is not one of the four known names.
    #[error("unknown scheduling algorithm: {0}")]
    UnknownPolicy(String),

    /// Input rejected before simulation began.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// A policy emitted more CPU time than the processes require.
    #[error("emitted {emitted} ticks, exceeding the total burst budget of {budget}")]
    BudgetExceeded {
        /// Ticks emitted so far.
        emitted: Tick,
        /// Sum of all burst times.
        budget: Tick,
    },

    /// The produced timeline is not a valid execution of the input.
    #[error("inconsistent schedule: {}", join_violations(.0))]
    InconsistentSchedule(Vec<Violation>),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_display_unknown_policy() {
        let err = SimulationError::UnknownPolicy("lottery".into());
        assert_eq!(err.to_string(), "unknown scheduling algorithm: lottery");
    }

    #[test]
    fn test_display_joins_validation_messages() {
        let err = SimulationError::InvalidInput(vec![
            ValidationError::new(ValidationErrorKind::NegativeArrival, "a"),
            ValidationError::new(ValidationErrorKind::NonPositiveBurst, "b"),
        ]);
        assert_eq!(err.to_string(), "invalid input: a; b");
    }

    #[test]
    fn test_display_budget() {
        let err = SimulationError::BudgetExceeded {
            emitted: 12,
            budget: 10,
        };
        assert!(err.to_string().contains("12"));
        assert!(err.to_string().contains("10"));
    }
}
