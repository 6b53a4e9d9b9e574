//! Batch-level performance indicators.
//!
//! Aggregates one finished [`SimulationOutcome`] into the figures used to
//! compare disciplines against each other:
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Busy / idle time | Ticks executing vs. ticks idle before the last completion |
//! | CPU utilization | busy / makespan |
//! | Avg / max waiting | Mean and largest waiting time |
//! | Avg turnaround | Mean turnaround time |
//! | Context switches | Adjacent slices granted to different processes |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{SimulationOutcome, Time};

/// Batch performance indicators for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchKpi {
    /// Latest completion time (ticks).
    pub makespan: Time,
    /// Total ticks spent executing.
    pub busy_time: Time,
    /// Total ticks the CPU sat idle before the last completion.
    pub idle_time: Time,
    /// busy_time / makespan (0.0 for an empty outcome).
    pub cpu_utilization: f64,
    /// Mean waiting time across the batch.
    pub avg_waiting_time: f64,
    /// Largest single waiting time.
    pub max_waiting_time: Time,
    /// Mean turnaround time across the batch.
    pub avg_turnaround_time: f64,
    /// Number of adjacent slice pairs granted to different processes.
    pub context_switches: usize,
}

impl BatchKpi {
    /// Computes KPIs from a finished outcome.
    pub fn calculate(outcome: &SimulationOutcome) -> Self {
        let makespan = outcome.makespan();
        let busy_time = outcome.busy_time();
        let idle_time = makespan - busy_time;

        let cpu_utilization = if makespan == 0 {
            0.0
        } else {
            busy_time as f64 / makespan as f64
        };

        let count = outcome.processes.len();
        let total_waiting: Time = outcome.processes.iter().map(|p| p.waiting_time).sum();
        let total_turnaround: Time = outcome.processes.iter().map(|p| p.turnaround_time).sum();
        let max_waiting_time = outcome
            .processes
            .iter()
            .map(|p| p.waiting_time)
            .max()
            .unwrap_or(0);

        let (avg_waiting_time, avg_turnaround_time) = if count == 0 {
            (0.0, 0.0)
        } else {
            (
                total_waiting as f64 / count as f64,
                total_turnaround as f64 / count as f64,
            )
        };

        let context_switches = outcome
            .slices
            .windows(2)
            .filter(|pair| pair[0].process_id != pair[1].process_id)
            .count();

        Self {
            makespan,
            busy_time,
            idle_time,
            cpu_utilization,
            avg_waiting_time,
            max_waiting_time,
            avg_turnaround_time,
            context_switches,
        }
    }
}
