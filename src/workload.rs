//! Random workload generation.
//!
//! Produces process lists for demos, benchmarks and randomized tests.
//! All ranges are inclusive. Generation is fully determined by the RNG,
//! so a seeded RNG reproduces the same workload.

use rand::Rng;

use crate::models::{Process, ProcessId, Tick};

/// Generates random process lists.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_cpusched::workload::WorkloadGenerator;
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let processes = WorkloadGenerator::new(5).with_burst_range(2, 6).generate(&mut rng);
/// assert_eq!(processes.len(), 5);
/// assert!(processes.iter().all(|p| (2..=6).contains(&p.burst_time)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadGenerator {
    count: usize,
    arrival: (Tick, Tick),
    burst: (Tick, Tick),
    priority: (i32, i32),
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes.
    ///
    /// `count` is capped at the number of distinct [`ProcessId`]s.
    /// Defaults: arrivals in `0..=10`, bursts in `1..=10`, priority 0.
    pub fn new(count: usize) -> Self {
        let max_count = usize::try_from(ProcessId::MAX).unwrap_or(usize::MAX);
        Self {
            count: count.min(max_count),
            arrival: (0, 10),
            burst: (1, 10),
            priority: (0, 0),
        }
    }

    /// Sets the arrival range. Negative bounds are clamped to 0.
    pub fn with_arrival_range(mut self, min: Tick, max: Tick) -> Self {
        self.arrival = ordered(min.max(0), max.max(0));
        self
    }

    /// Sets the burst range. Bounds below 1 are clamped to 1.
    pub fn with_burst_range(mut self, min: Tick, max: Tick) -> Self {
        self.burst = ordered(min.max(1), max.max(1));
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority = ordered(min, max);
        self
    }

    /// Generates processes with ids `1..=count`, in id order.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        let last = ProcessId::try_from(self.count).unwrap_or(ProcessId::MAX);
        (1..=last)
            .map(|id| Process {
                id,
                arrival_time: rng.random_range(self.arrival.0..=self.arrival.1),
                burst_time: rng.random_range(self.burst.0..=self.burst.1),
                priority: rng.random_range(self.priority.0..=self.priority.1),
            })
            .collect()
    }
}

fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_respects_ranges() {
        let mut rng = SmallRng::seed_from_u64(42);
        let processes = WorkloadGenerator::new(100)
            .with_arrival_range(5, 20)
            .with_burst_range(3, 4)
            .with_priority_range(-2, 2)
            .generate(&mut rng);

        assert_eq!(processes.len(), 100);
        for p in &processes {
            assert!((5..=20).contains(&p.arrival_time));
            assert!((3..=4).contains(&p.burst_time));
            assert!((-2..=2).contains(&p.priority));
        }
    }

    #[test]
    fn test_generate_ids_are_sequential() {
        let mut rng = SmallRng::seed_from_u64(1);
        let ids: Vec<ProcessId> = WorkloadGenerator::new(4)
            .generate(&mut rng)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_generate_is_reproducible() {
        let generator = WorkloadGenerator::new(10);
        let a = generator.generate(&mut SmallRng::seed_from_u64(9));
        let b = generator.generate(&mut SmallRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_generated_workloads_are_valid() {
        let mut rng = SmallRng::seed_from_u64(5);
        let generator = WorkloadGenerator::new(20)
            .with_arrival_range(-5, 3)
            .with_burst_range(0, -1);
        for _ in 0..10 {
            assert!(validate_processes(&generator.generate(&mut rng)).is_ok());
        }
    }

    #[test]
    fn test_reversed_range_is_reordered() {
        let generator = WorkloadGenerator::new(1).with_burst_range(9, 2);
        assert_eq!(generator.burst, (2, 9));
    }

    #[test]
    fn test_count_capped_at_id_range() {
        let generator = WorkloadGenerator::new(usize::MAX);
        assert!(generator.count as u128 <= u128::from(ProcessId::MAX));
    }

    #[test]
    fn test_zero_count() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(WorkloadGenerator::new(0).generate(&mut rng).is_empty());
    }
}
