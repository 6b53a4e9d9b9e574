//! Random workload generation.
//!
//! Builds randomized process batches for experiments and tests — e.g.
//! comparing discipline KPIs over many generated batches. Generated
//! batches are valid by construction (sequential positive IDs, bursts of
//! at least one tick), so they pass
//! [`validate_batch`](crate::validation::validate_batch) unconditionally.
//!
//! # Usage
//!
//! ```
//! use procsim::workload::WorkloadSpec;
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let batch = WorkloadSpec::new(5)
//!     .with_arrival_window(20)
//!     .with_max_burst(10)
//!     .generate(&mut rng);
//! assert_eq!(batch.len(), 5);
//! ```

use rand::Rng;

use crate::models::{Process, Time};

/// Specification for a randomized process batch.
///
/// Arrivals are drawn uniformly from `0..=arrival_window`, bursts from
/// `1..=max_burst`. IDs are assigned sequentially from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadSpec {
    /// Number of processes to generate.
    pub count: usize,
    /// Latest possible arrival tick (inclusive).
    pub arrival_window: Time,
    /// Largest possible burst (inclusive); bursts start at 1.
    pub max_burst: Time,
}

impl WorkloadSpec {
    /// Creates a spec for `count` processes arriving at tick 0 with
    /// single-tick bursts; widen with the builder methods.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            arrival_window: 0,
            max_burst: 1,
        }
    }

    /// Sets the latest possible arrival tick.
    pub fn with_arrival_window(mut self, arrival_window: Time) -> Self {
        self.arrival_window = arrival_window;
        self
    }

    /// Sets the largest possible burst. Values below 1 are treated as 1,
    /// keeping generated batches valid.
    pub fn with_max_burst(mut self, max_burst: Time) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }

    /// Generates a batch from this spec.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        (1..=self.count)
            .map(|id| {
                Process::new(
                    id as u32,
                    rng.random_range(0..=self.arrival_window),
                    rng.random_range(1..=self.max_burst),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_batch;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_generates_requested_count() {
        let mut rng = SmallRng::seed_from_u64(1);
        let batch = WorkloadSpec::new(12).generate(&mut rng);
        assert_eq!(batch.len(), 12);
    }

    #[test]
    fn test_ids_sequential_from_one() {
        let mut rng = SmallRng::seed_from_u64(2);
        let batch = WorkloadSpec::new(4).generate(&mut rng);
        let ids: Vec<_> = batch.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_bounds_respected() {
        let mut rng = SmallRng::seed_from_u64(3);
        let spec = WorkloadSpec::new(50)
            .with_arrival_window(9)
            .with_max_burst(5);
        for process in spec.generate(&mut rng) {
            assert!(process.arrival_time <= 9);
            assert!((1..=5).contains(&process.burst_time));
        }
    }

    #[test]
    fn test_generated_batches_validate() {
        let mut rng = SmallRng::seed_from_u64(4);
        let spec = WorkloadSpec::new(20)
            .with_arrival_window(30)
            .with_max_burst(8);
        for _ in 0..10 {
            assert!(validate_batch(&spec.generate(&mut rng)).is_ok());
        }
    }

    #[test]
    fn test_seeded_determinism() {
        let spec = WorkloadSpec::new(8)
            .with_arrival_window(15)
            .with_max_burst(6);
        let a = spec.generate(&mut SmallRng::seed_from_u64(42));
        let b = spec.generate(&mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_max_burst_clamped() {
        let spec = WorkloadSpec::new(3).with_max_burst(0);
        assert_eq!(spec.max_burst, 1);
    }
}
