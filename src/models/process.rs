//! Process (input) model.
//!
//! A process is a unit of CPU demand: it arrives at a point in simulation
//! time and needs a fixed number of ticks to finish. That is the entire
//! input — no priorities, no I/O phases.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.1

use serde::{Deserialize, Serialize};

/// Process identifier. Positive and unique within a batch.
pub type ProcessId = u32;

/// Simulation time in unitless ticks.
///
/// The crate assigns no unit to a tick; the caller decides what one means.
/// Being unsigned, negative times are unrepresentable by construction.
pub type Time = u64;

/// A process to be scheduled.
///
/// Immutable input record: scheduling results live in
/// [`CompletedProcess`](super::CompletedProcess), never here.
///
/// # Validity
/// `id` must be nonzero and unique within its batch, and `burst_time` must
/// be nonzero — enforced by [`validate_batch`](crate::validation::validate_batch)
/// at the simulation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: Time,
    /// Total CPU ticks the process requires.
    pub burst_time: Time,
}

impl Process {
    /// Creates a new process.
    pub fn new(id: ProcessId, arrival_time: Time, burst_time: Time) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
        }
    }

    /// Earliest tick at which this process could possibly finish.
    #[inline]
    pub fn earliest_completion(&self) -> Time {
        self.arrival_time + self.burst_time
    }

    /// Whether the process has arrived at time `t`.
    #[inline]
    pub fn has_arrived(&self, t: Time) -> bool {
        self.arrival_time <= t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_fields() {
        let p = Process::new(1, 4, 7);
        assert_eq!(p.id, 1);
        assert_eq!(p.arrival_time, 4);
        assert_eq!(p.burst_time, 7);
    }

    #[test]
    fn test_earliest_completion() {
        let p = Process::new(2, 3, 5);
        assert_eq!(p.earliest_completion(), 8);
    }

    #[test]
    fn test_has_arrived() {
        let p = Process::new(1, 5, 1);
        assert!(!p.has_arrived(4));
        assert!(p.has_arrived(5));
        assert!(p.has_arrived(100));
    }

    #[test]
    fn test_serde_round_trip() {
        let p = Process::new(3, 0, 9);
        let json = serde_json::to_string(&p).unwrap();
        let back: Process = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
