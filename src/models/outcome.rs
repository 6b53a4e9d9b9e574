//! Simulation outcome (solution) model.
//!
//! An outcome is the complete result of one scheduling run: every input
//! process annotated with its timing metrics, plus the chronological trace
//! of CPU slices the run produced.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

use serde::{Deserialize, Serialize};

use super::{Process, ProcessId, Time};

/// A process annotated with the timing metrics of one scheduling run.
///
/// Invariants, guaranteed for every record a discipline emits:
/// - `turnaround_time == completion_time - arrival_time`
/// - `waiting_time == turnaround_time - burst_time` (floored at 0)
/// - `completion_time >= arrival_time + burst_time`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedProcess {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Tick at which the process became eligible to run.
    pub arrival_time: Time,
    /// Total CPU ticks the process required.
    pub burst_time: Time,
    /// Tick at which the process finished its final burst.
    pub completion_time: Time,
    /// Total time in the system: completion minus arrival.
    pub turnaround_time: Time,
    /// Time spent ready but not running: turnaround minus burst.
    pub waiting_time: Time,
}

impl CompletedProcess {
    /// Annotates a process with its completion time, deriving the two
    /// remaining metrics.
    ///
    /// The waiting time is floored at zero; with a completion time from a
    /// correct simulation the floor never engages.
    pub fn annotate(process: &Process, completion_time: Time) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        let waiting_time = turnaround_time.saturating_sub(process.burst_time);
        Self {
            id: process.id,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            completion_time,
            turnaround_time,
            waiting_time,
        }
    }
}

/// One contiguous stretch of CPU granted to a process.
///
/// Covers the half-open interval `[start, end)`; always nonempty.
/// FCFS and SJN produce exactly one slice per process, Round Robin one per
/// turn. Gaps between consecutive slices are idle CPU time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Process the CPU was granted to.
    pub process_id: ProcessId,
    /// First tick of the slice.
    pub start: Time,
    /// First tick after the slice.
    pub end: Time,
}

impl Slice {
    /// Creates a new slice.
    pub fn new(process_id: ProcessId, start: Time, end: Time) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Slice length in ticks.
    #[inline]
    pub fn duration(&self) -> Time {
        self.end - self.start
    }
}

/// The complete result of one scheduling run.
///
/// `processes` holds one record per input process, **in original input
/// order** under every discipline — the stable ordering contract callers
/// rely on for display. `slices` is the execution trace in chronological
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Annotated processes, in original input order.
    pub processes: Vec<CompletedProcess>,
    /// Execution trace, in chronological order.
    pub slices: Vec<Slice>,
}

impl SimulationOutcome {
    /// Creates an empty outcome.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds the annotated record for a given process.
    pub fn completed(&self, id: ProcessId) -> Option<&CompletedProcess> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Completion time of a given process.
    pub fn completion_of(&self, id: ProcessId) -> Option<Time> {
        self.completed(id).map(|p| p.completion_time)
    }

    /// All slices granted to a given process, in chronological order.
    pub fn slices_of(&self, id: ProcessId) -> Vec<&Slice> {
        self.slices
            .iter()
            .filter(|s| s.process_id == id)
            .collect()
    }

    /// Makespan: latest completion time across all processes.
    pub fn makespan(&self) -> Time {
        self.processes
            .iter()
            .map(|p| p.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Total ticks the CPU spent executing.
    pub fn busy_time(&self) -> Time {
        self.slices.iter().map(|s| s.duration()).sum()
    }

    /// Total ticks the CPU sat idle before the last completion.
    pub fn idle_time(&self) -> Time {
        self.makespan() - self.busy_time()
    }
}
