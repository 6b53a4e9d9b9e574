//! Per-process timing metric calculation.
//!
//! Derives turnaround and waiting times from the completion times a
//! discipline produces:
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion − arrival |
//! | Waiting | turnaround − burst (floored at 0) |
//!
//! Pure functions over finished processes; the disciplines call
//! [`annotate`] as their final step.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use crate::models::{CompletedProcess, Process, Time};

/// Annotates a batch with its per-index completion times.
///
/// `completions[i]` is the completion time of `processes[i]`; the output
/// keeps the input order, which is how every discipline satisfies the
/// input-order contract of
/// [`SimulationOutcome`](crate::models::SimulationOutcome).
pub fn annotate(processes: &[Process], completions: &[Time]) -> Vec<CompletedProcess> {
    debug_assert_eq!(processes.len(), completions.len());
    processes
        .iter()
        .zip(completions)
        .map(|(process, &completion)| CompletedProcess::annotate(process, completion))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotate_batch() {
        let batch = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
        let annotated = annotate(&batch, &[5, 8]);

        assert_eq!(annotated[0].turnaround_time, 5);
        assert_eq!(annotated[0].waiting_time, 0);
        assert_eq!(annotated[1].turnaround_time, 7);
        assert_eq!(annotated[1].waiting_time, 4);
    }

    #[test]
    fn test_preserves_input_order() {
        let batch = vec![Process::new(9, 3, 1), Process::new(4, 0, 2)];
        let annotated = annotate(&batch, &[6, 2]);
        let ids: Vec<_> = annotated.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![9, 4]);
    }

    #[test]
    fn test_metric_identities() {
        let batch = vec![Process::new(1, 2, 4), Process::new(2, 0, 6)];
        for completed in annotate(&batch, &[9, 15]) {
            assert_eq!(
                completed.turnaround_time,
                completed.completion_time - completed.arrival_time
            );
            assert_eq!(
                completed.waiting_time,
                completed.turnaround_time - completed.burst_time
            );
        }
    }

    #[test]
    fn test_empty_batch() {
        assert!(annotate(&[], &[]).is_empty());
    }
}
