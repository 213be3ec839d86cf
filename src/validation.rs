//! Input validation for simulation requests.
//!
//! Checks process attributes and the round-robin quantum before any
//! scheduling happens. Detects:
//! - Duplicate process ids
//! - Negative arrival times
//! - Non-positive burst times
//! - Timelines whose end would not fit in a [`Tick`]
//! - Non-positive quantum

use std::collections::HashSet;

use crate::models::{Process, Tick};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share an id.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires zero or negative CPU time.
    NonPositiveBurst,
    /// Latest arrival plus total burst exceeds the tick range.
    TimeOverflow,
    /// The round-robin quantum is zero or negative.
    NonPositiveQuantum,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process list.
///
/// # Checks
/// 1. No duplicate process ids
/// 2. Arrival times are non-negative
/// 3. Burst times are positive
/// 4. `max(arrival) + sum(burst)` fits in a [`Tick`]; every clock value a
///    policy produces is bounded by it
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }
    }

    for p in processes {
        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} has negative arrival time {}", p.id, p.arrival_time),
            ));
        }
        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has non-positive burst time {}", p.id, p.burst_time),
            ));
        }
    }

    if time_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!(
                "Latest arrival plus total burst of {} processes exceeds {}",
                processes.len(),
                Tick::MAX
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Latest possible completion time, `None` on overflow.
///
/// Malformed entries (negative arrival, non-positive burst) are reported
/// separately and ignored here.
fn time_horizon(processes: &[Process]) -> Option<Tick> {
    let latest_arrival = processes
        .iter()
        .map(|p| p.arrival_time.max(0))
        .max()
        .unwrap_or(0);
    processes
        .iter()
        .filter(|p| p.burst_time > 0)
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time))
}

/// Validates a round-robin time quantum.
pub fn validate_quantum(quantum: Tick) -> ValidationResult {
    if quantum <= 0 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Quantum must be positive, got {quantum}"),
        )]);
    }
    Ok(())
}

/// Validates processes and, when present, the quantum.
///
/// Collects errors from both checks.
pub fn validate_input(processes: &[Process], quantum: Option<Tick>) -> ValidationResult {
    let mut errors = validate_processes(processes).err().unwrap_or_default();
    if let Some(q) = quantum {
        if let Err(mut quantum_errors) = validate_quantum(q) {
            errors.append(&mut quantum_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(1, 5),
            Process::new(2, 3).with_arrival(1),
            Process::new(3, 1).with_arrival(2),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_processes(), Some(2)).is_ok());
        assert!(validate_input(&sample_processes(), None).is_ok());
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(validate_processes(&[]).is_ok());
    }

    #[test]
    fn test_negative_arrival() {
        let processes = vec![Process::new(1, 5).with_arrival(-1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeArrival);
    }

    #[test]
    fn test_non_positive_burst() {
        let processes = vec![Process::new(1, 0), Process::new(2, -4)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_non_positive_quantum() {
        let errors = validate_quantum(0).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveQuantum);
        assert!(validate_quantum(-3).is_err());
        assert!(validate_quantum(1).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![Process::new(1, 0).with_arrival(-2)];
        let errors = validate_input(&processes, Some(0)).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let processes = vec![Process::new(1, 2), Process::new(1, 3), Process::new(2, 1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert!(errors[0].message.contains('1'));
    }

    #[test]
    fn test_burst_sum_overflow() {
        let processes = vec![Process::new(1, Tick::MAX), Process::new(2, 1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_late_arrival_overflow() {
        let processes = vec![Process::new(1, 2).with_arrival(Tick::MAX - 1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_horizon_at_tick_max_is_valid() {
        let processes = vec![
            Process::new(1, Tick::MAX - 10).with_arrival(5),
            Process::new(2, 5),
        ];
        assert!(validate_processes(&processes).is_ok());
    }
}
