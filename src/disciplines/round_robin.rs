//! Round Robin scheduling.
//!
//! # Algorithm
//!
//! A FIFO ready queue hands the CPU to one process at a time for at most
//! one quantum. A process with burst left over after its slice goes to the
//! back of the queue — but only after any processes that arrived during
//! the slice have been enqueued, so fresh arrivals get queue priority over
//! the process that just yielded.
//!
//! The queue is seeded with every process sharing the earliest arrival
//! time, in input order. When the queue drains while work remains, the
//! clock fast-forwards to the earliest-arriving unfinished process.
//!
//! # Complexity
//! O(s·n) where s is the number of slices (each slice rescans the batch
//! for arrivals).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use crate::models::{Process, SimulationOutcome, Slice, Time};
use crate::simulator::metrics;

use super::Discipline;

/// Round Robin: preemptive at quantum expiry, FIFO otherwise.
///
/// All ordering decisions (seeding, arrival pickup, fast-forward) resolve
/// ties by lowest original input index; nothing is ever ordered by burst
/// or remaining time.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: Time,
}

impl RoundRobin {
    /// Creates a Round Robin discipline with the given quantum.
    ///
    /// The quantum must be positive; [`validate_quantum`](crate::validation::validate_quantum)
    /// enforces this at the simulation boundary.
    pub fn new(quantum: Time) -> Self {
        Self { quantum }
    }

    /// The configured time quantum.
    pub fn quantum(&self) -> Time {
        self.quantum
    }
}

impl Discipline for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn run(&self, processes: &[Process]) -> SimulationOutcome {
        let n = processes.len();
        let mut remaining: Vec<Time> = processes.iter().map(|p| p.burst_time).collect();
        let mut in_queue = vec![false; n];
        let mut completions: Vec<Time> = vec![0; n];
        let mut slices = Vec::new();
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut done = 0;
        let mut t: Time = 0;

        // Seed with every earliest-arriving process, in input order.
        if let Some(first_arrival) = processes.iter().map(|p| p.arrival_time).min() {
            t = first_arrival;
            for (i, process) in processes.iter().enumerate() {
                if process.arrival_time == first_arrival {
                    queue.push_back(i);
                    in_queue[i] = true;
                }
            }
        }

        while done < n {
            let Some(cur) = queue.pop_front() else {
                // Nothing ready and nothing running: fast-forward to the
                // earliest unfinished arrival (lowest index on ties).
                if let Some(next) = (0..n)
                    .filter(|&i| remaining[i] > 0)
                    .min_by_key(|&i| processes[i].arrival_time)
                {
                    t = t.max(processes[next].arrival_time);
                    queue.push_back(next);
                    in_queue[next] = true;
                }
                continue;
            };
            in_queue[cur] = false;

            let slice = remaining[cur].min(self.quantum);
            slices.push(Slice::new(processes[cur].id, t, t + slice));
            t += slice;
            remaining[cur] -= slice;
            if remaining[cur] == 0 {
                completions[cur] = t;
                done += 1;
            }

            // Arrivals during the slice enter the queue before the just-run
            // process is re-queued.
            for (i, process) in processes.iter().enumerate() {
                if i != cur && !in_queue[i] && remaining[i] > 0 && process.has_arrived(t) {
                    queue.push_back(i);
                    in_queue[i] = true;
                }
            }

            if remaining[cur] > 0 {
                queue.push_back(cur);
                in_queue[cur] = true;
            }
        }

        SimulationOutcome {
            processes: metrics::annotate(processes, &completions),
            slices,
        }
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}
