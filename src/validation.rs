//! Input validation for simulation batches.
//!
//! Checks the integrity of a process batch (and a Round Robin quantum)
//! before any discipline runs. Detects:
//! - Empty batches
//! - Zero burst times (a zero-burst process would never leave the system)
//! - Zero or duplicate process IDs
//! - A zero quantum (Round Robin could not make progress)
//!
//! Validation happens once at the simulation boundary; the disciplines
//! assume validated input and are total functions over it.

use crate::models::{Process, Time};
use std::collections::HashSet;

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
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The batch contains no processes.
    EmptyBatch,
    /// A process requires zero CPU ticks.
    ZeroBurst,
    /// A process ID is zero.
    InvalidId,
    /// Two processes share the same ID.
    DuplicateId,
    /// The Round Robin quantum is zero.
    ZeroQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process batch.
///
/// Checks:
/// 1. The batch is nonempty
/// 2. Every process ID is nonzero
/// 3. No two processes share an ID
/// 4. Every burst time is nonzero
///
/// Arrival times need no check — negative values are unrepresentable.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_batch(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyBatch,
            "batch contains no processes",
        ));
    }

    let mut seen_ids = HashSet::new();
    for process in processes {
        if process.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidId,
                "process ID 0 is reserved; IDs must be positive",
            ));
        } else if !seen_ids.insert(process.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate process ID: {}", process.id),
            ));
        }

        if process.burst_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("process {} has zero burst time", process.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a Round Robin quantum.
///
/// A quantum of zero would hand out empty slices forever; it is rejected
/// here rather than discovered as a hang.
pub fn validate_quantum(quantum: Time) -> ValidationResult {
    if quantum == 0 {
        Err(vec![ValidationError::new(
            ValidationErrorKind::ZeroQuantum,
            "Round Robin quantum must be positive",
        )])
    } else {
        Ok(())
    }
}
