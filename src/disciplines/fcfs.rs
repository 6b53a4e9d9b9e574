//! First-Come-First-Served scheduling.
//!
//! # Algorithm
//!
//! Processes run to completion in arrival order. A single time cursor
//! starts at 0; for each process in arrival order the cursor first jumps
//! forward to the arrival time if the CPU would otherwise sit idle, then
//! advances by the full burst.
//!
//! # Complexity
//! O(n log n) for the arrival sort, O(n) for the sweep.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.1

use crate::models::{Process, SimulationOutcome, Slice, Time};
use crate::simulator::metrics;

use super::Discipline;

/// First-Come-First-Served: non-preemptive, arrival-ordered.
///
/// Arrival ties are broken by original input index (the sort is stable),
/// per the crate-wide tie-break contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Discipline for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn run(&self, processes: &[Process]) -> SimulationOutcome {
        // Stable index sort: ties keep input order.
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| processes[i].arrival_time);

        let mut completions: Vec<Time> = vec![0; processes.len()];
        let mut slices = Vec::with_capacity(processes.len());
        let mut t: Time = 0;

        for &i in &order {
            let process = &processes[i];
            t = t.max(process.arrival_time);
            slices.push(Slice::new(process.id, t, t + process.burst_time));
            t += process.burst_time;
            completions[i] = t;
        }

        SimulationOutcome {
            processes: metrics::annotate(processes, &completions),
            slices,
        }
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}
