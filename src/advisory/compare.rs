//! Local policy comparison.
//!
//! Simulates one process set under every policy and ranks the outcomes.
//! Used as the offline answer to "which policy fits this workload best".

use crate::error::SimulationError;
use crate::models::{Policy, Process, Tick};
use crate::scheduler::{SimulationConfig, Simulator};

/// Aggregate outcome of one policy on a shared process set.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyOutcome {
    /// Simulated policy.
    pub policy: Policy,
    /// Mean waiting time.
    pub average_waiting: f64,
    /// Mean turnaround time.
    pub average_turnaround: f64,
    /// Largest waiting time of any process.
    pub max_waiting: Tick,
    /// Number of emitted intervals (context switches + 1).
    pub intervals: usize,
}

/// Runs all four policies and ranks them.
///
/// Ordering: lowest average waiting, then lowest average turnaround, then
/// declaration order of [`Policy`].
///
/// # Errors
/// Fails if the input is invalid for any policy (including a non-positive
/// quantum).
pub fn compare_policies(
    processes: &[Process],
    quantum: Tick,
) -> Result<Vec<PolicyOutcome>, SimulationError> {
    let mut outcomes = Policy::ALL
        .into_iter()
        .map(|policy| -> Result<PolicyOutcome, SimulationError> {
            let config = SimulationConfig::new(policy).with_quantum(quantum);
            let result = Simulator::new(config).simulate(processes)?;
            Ok(PolicyOutcome {
                policy,
                average_waiting: result.metrics.average_waiting,
                average_turnaround: result.metrics.average_turnaround,
                max_waiting: result.metrics.max_waiting(),
                intervals: result.schedule.len(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Stable sort keeps declaration order among exact ties.
    outcomes.sort_by(|a, b| {
        a.average_waiting
            .total_cmp(&b.average_waiting)
            .then(a.average_turnaround.total_cmp(&b.average_turnaround))
    });

    Ok(outcomes)
}
