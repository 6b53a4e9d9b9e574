//! Simulation entry point and result metrics.
//!
//! Provides the validating request/response boundary of the crate:
//! [`simulate`] takes a batch and an [`Algorithm`], checks the input once,
//! and dispatches to the chosen discipline. The disciplines themselves
//! assume validated input.
//!
//! # Metrics
//!
//! `metrics` derives per-process turnaround and waiting times from
//! completion times; [`BatchKpi`] aggregates a finished outcome into
//! batch-level figures (averages, utilization, context switches).

pub mod metrics;

mod kpi;

pub use kpi::BatchKpi;

use serde::{Deserialize, Serialize};

use crate::disciplines::{Discipline, Fcfs, RoundRobin, Sjn};
use crate::models::{Process, SimulationOutcome, Time};
use crate::validation::{validate_batch, validate_quantum, ValidationError};

/// Algorithm selector for a simulation request.
///
/// Serde-derived so a request can arrive as data from an outer adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-Next, non-preemptive.
    Sjn,
    /// Round Robin with the given time quantum.
    RoundRobin {
        /// Maximum ticks per turn; must be positive.
        quantum: Time,
    },
}

impl Algorithm {
    /// Short name of the selected discipline.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjn => "SJN",
            Algorithm::RoundRobin { .. } => "RR",
        }
    }
}

/// Runs one scheduling simulation over a batch.
///
/// Validates the batch (and the quantum, for Round Robin) before any
/// discipline runs; on failure returns **all** detected issues. The input
/// is never mutated, so the same batch can be replayed under a different
/// algorithm.
///
/// # Example
///
/// ```
/// use procsim::models::Process;
/// use procsim::simulator::{simulate, Algorithm};
///
/// let batch = vec![
///     Process::new(1, 0, 5),
///     Process::new(2, 1, 3),
///     Process::new(3, 2, 8),
/// ];
///
/// let outcome = simulate(&batch, Algorithm::Fcfs).unwrap();
/// assert_eq!(outcome.completion_of(2), Some(8));
///
/// let outcome = simulate(&batch, Algorithm::RoundRobin { quantum: 2 }).unwrap();
/// assert_eq!(outcome.completion_of(2), Some(9));
/// ```
pub fn simulate(
    processes: &[Process],
    algorithm: Algorithm,
) -> Result<SimulationOutcome, Vec<ValidationError>> {
    let mut errors = validate_batch(processes).err().unwrap_or_default();
    if let Algorithm::RoundRobin { quantum } = algorithm {
        if let Err(quantum_errors) = validate_quantum(quantum) {
            errors.extend(quantum_errors);
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    let outcome = match algorithm {
        Algorithm::Fcfs => Fcfs.run(processes),
        Algorithm::Sjn => Sjn.run(processes),
        Algorithm::RoundRobin { quantum } => RoundRobin::new(quantum).run(processes),
    };
    Ok(outcome)
}
