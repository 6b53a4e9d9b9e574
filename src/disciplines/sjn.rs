//! Shortest-Job-Next scheduling (non-preemptive).
//!
//! # Algorithm
//!
//! At each decision point, among the processes that have already arrived
//! and not yet completed, the one with the smallest burst time runs to
//! completion. If nothing has arrived yet the clock advances one tick and
//! the scan repeats.
//!
//! # Complexity
//! O(n²): each of n completions rescans the batch. Fine at simulation
//! scale.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2
//! (SJF); provably minimal average waiting time among non-preemptive
//! disciplines when all arrivals coincide.

use crate::models::{Process, SimulationOutcome, Slice, Time};
use crate::simulator::metrics;

use super::Discipline;

/// Shortest-Job-Next: non-preemptive, burst-ordered among the arrived.
///
/// Equal shortest bursts are broken by lowest original input index — a
/// documented contract, tested directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjn;

impl Sjn {
    /// Picks the next process to run at time `t`: the shortest-burst
    /// arrived, incomplete process, lowest input index on ties.
    fn select_candidate(processes: &[Process], completed: &[bool], t: Time) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, process) in processes.iter().enumerate() {
            if completed[i] || !process.has_arrived(t) {
                continue;
            }
            match best {
                Some(b) if processes[b].burst_time <= process.burst_time => {}
                _ => best = Some(i),
            }
        }
        best
    }
}

impl Discipline for Sjn {
    fn name(&self) -> &'static str {
        "SJN"
    }

    fn run(&self, processes: &[Process]) -> SimulationOutcome {
        let n = processes.len();
        let mut completed = vec![false; n];
        let mut completions: Vec<Time> = vec![0; n];
        let mut slices = Vec::with_capacity(n);
        let mut done = 0;
        let mut t: Time = 0;

        while done < n {
            match Self::select_candidate(processes, &completed, t) {
                Some(i) => {
                    let process = &processes[i];
                    t = t.max(process.arrival_time);
                    slices.push(Slice::new(process.id, t, t + process.burst_time));
                    t += process.burst_time;
                    completions[i] = t;
                    completed[i] = true;
                    done += 1;
                }
                // Nothing has arrived yet: idle one tick and rescan.
                None => t += 1,
            }
        }

        SimulationOutcome {
            processes: metrics::annotate(processes, &completions),
            slices,
        }
    }

    fn description(&self) -> &'static str {
        "Shortest-Job-Next (non-preemptive)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_batch() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 8),
        ]
    }

    #[test]
    fn test_reference_scenario() {
        // t=0: only P1 has arrived, runs to 5. By then P2 and P3 are in;
        // P2 (burst 3) beats P3 (burst 8), completes at 8; P3 at 16.
        let outcome = Sjn.run(&sample_batch());

        assert_eq!(outcome.completion_of(1), Some(5));
        assert_eq!(outcome.completion_of(2), Some(8));
        assert_eq!(outcome.completion_of(3), Some(16));

        let waits: Vec<_> = outcome.processes.iter().map(|p| p.waiting_time).collect();
        assert_eq!(waits, vec![0, 4, 6]);
    }

    #[test]
    fn test_prefers_shortest_arrived() {
        let batch = vec![
            Process::new(1, 0, 10),
            Process::new(2, 1, 2),
            Process::new(3, 1, 5),
        ];
        let outcome = Sjn.run(&batch);
        // P1 occupies the CPU first; at t=10 both others have arrived and
        // the shorter P2 goes next.
        let slice_ids: Vec<_> = outcome.slices.iter().map(|s| s.process_id).collect();
        assert_eq!(slice_ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_never_picks_longer_over_arrived_shorter() {
        let batch = vec![
            Process::new(1, 0, 4),
            Process::new(2, 2, 9),
            Process::new(3, 3, 1),
        ];
        let outcome = Sjn.run(&batch);
        // At t=4 both P2 and P3 have arrived; P3 (burst 1) must precede P2.
        assert_eq!(outcome.completion_of(3), Some(5));
        assert_eq!(outcome.completion_of(2), Some(14));
    }

    #[test]
    fn test_tie_break_lowest_input_index() {
        let batch = vec![
            Process::new(9, 0, 4),
            Process::new(4, 0, 4),
            Process::new(6, 0, 4),
        ];
        let outcome = Sjn.run(&batch);
        // All bursts equal: input order wins, not id order.
        let slice_ids: Vec<_> = outcome.slices.iter().map(|s| s.process_id).collect();
        assert_eq!(slice_ids, vec![9, 4, 6]);
    }

    #[test]
    fn test_idles_until_first_arrival() {
        let batch = vec![Process::new(1, 7, 2), Process::new(2, 5, 3)];
        let outcome = Sjn.run(&batch);
        // Idle ticks 0..5, then P2 runs 5..8, then P1 8..10.
        assert_eq!(outcome.slices[0], Slice::new(2, 5, 8));
        assert_eq!(outcome.completion_of(1), Some(10));
        assert_eq!(outcome.idle_time(), 5);
    }

    #[test]
    fn test_single_process() {
        let outcome = Sjn.run(&[Process::new(1, 0, 6)]);
        let p = outcome.completed(1).unwrap();
        assert_eq!(p.completion_time, 6);
        assert_eq!(p.waiting_time, 0);
    }

    #[test]
    fn test_completion_never_early() {
        let batch = sample_batch();
        let outcome = Sjn.run(&batch);
        for (process, completed) in batch.iter().zip(&outcome.processes) {
            assert!(completed.completion_time >= process.earliest_completion());
        }
    }

    #[test]
    fn test_idempotent() {
        let batch = sample_batch();
        assert_eq!(Sjn.run(&batch), Sjn.run(&batch));
    }
}
