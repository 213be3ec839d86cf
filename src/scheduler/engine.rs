//! Simulation entry point.
//!
//! # Pipeline
//!
//! 1. Validate the process list (and the quantum for Round Robin).
//! 2. Copy the input into an engine-owned [`ProcessTable`].
//! 3. Build the timeline with the configured policy.
//! 4. Check the timeline against the table; reject inconsistent output.
//! 5. Derive per-process and aggregate metrics.
//!
//! Each call is independent: no state survives between simulations, so a
//! single [`Simulator`] can be shared across threads.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::fcfs::fcfs;
use super::metrics::{ScheduleMetrics, UtilizationMode};
use super::round_robin::round_robin;
use super::selection::{priority, sjf};
use crate::error::SimulationError;
use crate::models::{Policy, Process, ProcessTable, Schedule, Tick};
use crate::validation::validate_input;

/// Quantum used when a request does not specify one.
pub const DEFAULT_QUANTUM: Tick = 2;

fn default_quantum() -> Tick {
    DEFAULT_QUANTUM
}

/// Simulation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Scheduling policy.
    pub policy: Policy,
    /// Round Robin time slice. Ignored by other policies.
    #[serde(default = "default_quantum")]
    pub quantum: Tick,
    /// How utilization is reported.
    #[serde(default)]
    pub utilization: UtilizationMode,
}

impl SimulationConfig {
    /// Creates a config for `policy` with the default quantum.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            quantum: DEFAULT_QUANTUM,
            utilization: UtilizationMode::default(),
        }
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: Tick) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the utilization mode.
    pub fn with_utilization(mut self, mode: UtilizationMode) -> Self {
        self.utilization = mode;
        self
    }

    /// The quantum, if the policy uses one.
    pub fn effective_quantum(&self) -> Option<Tick> {
        (self.policy == Policy::RoundRobin).then_some(self.quantum)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(Policy::Fcfs)
    }
}

/// A simulation request in its wire shape.
///
/// `algorithm` is kept as a raw string so that an unknown name surfaces as
/// [`SimulationError::UnknownPolicy`] instead of a decode failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Policy wire name.
    pub algorithm: String,
    /// Round Robin time slice.
    #[serde(default = "default_quantum")]
    pub quantum: Tick,
    /// Processes to schedule.
    pub processes: Vec<Process>,
}

impl SimulationRequest {
    /// Creates a request with the default quantum.
    pub fn new(algorithm: impl Into<String>, processes: Vec<Process>) -> Self {
        Self {
            algorithm: algorithm.into(),
            quantum: DEFAULT_QUANTUM,
            processes,
        }
    }

    /// Sets the quantum.
    pub fn with_quantum(mut self, quantum: Tick) -> Self {
        self.quantum = quantum;
        self
    }

    /// Resolves the policy name into a config.
    pub fn config(&self) -> Result<SimulationConfig, SimulationError> {
        let policy: Policy = self.algorithm.parse()?;
        Ok(SimulationConfig::new(policy).with_quantum(self.quantum))
    }
}

/// Timeline plus metrics for one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Execution timeline.
    pub schedule: Schedule,
    /// Derived metrics.
    pub metrics: ScheduleMetrics,
}

/// Runs single-CPU scheduling simulations.
///
/// # Example
///
/// ```
/// use u_cpusched::models::{Policy, Process};
/// use u_cpusched::scheduler::{SimulationConfig, Simulator};
///
/// let processes = vec![
///     Process::new(1, 5),
///     Process::new(2, 3).with_arrival(1),
///     Process::new(3, 1).with_arrival(2),
/// ];
/// let simulator = Simulator::new(SimulationConfig::new(Policy::Sjf));
/// let result = simulator.simulate(&processes).unwrap();
///
/// let order: Vec<u32> = result.schedule.intervals.iter().map(|i| i.process_id).collect();
/// assert_eq!(order, vec![1, 3, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulates `processes` under the configured policy.
    ///
    /// The caller's slice is never modified.
    ///
    /// # Errors
    /// - [`SimulationError::InvalidInput`] for duplicate ids, negative
    ///   arrivals, non-positive bursts, a timeline past [`Tick::MAX`] or a
    ///   non-positive Round Robin quantum.
    /// - [`SimulationError::BudgetExceeded`] /
    ///   [`SimulationError::InconsistentSchedule`] if a policy produced an
    ///   invalid timeline.
    pub fn simulate(&self, processes: &[Process]) -> Result<SimulationResult, SimulationError> {
        let config = &self.config;
        validate_input(processes, config.effective_quantum())
            .map_err(SimulationError::InvalidInput)?;

        let table = ProcessTable::new(processes);
        let schedule = build_schedule(config.policy, &table, config.quantum)?;

        let violations = schedule.check_against(&table);
        if !violations.is_empty() {
            return Err(SimulationError::InconsistentSchedule(violations));
        }

        let metrics = ScheduleMetrics::calculate(&schedule, &table, config.utilization);

        info!(
            policy = %config.policy,
            processes = table.len(),
            intervals = schedule.len(),
            average_waiting = metrics.average_waiting,
            average_turnaround = metrics.average_turnaround,
            "simulation complete"
        );

        Ok(SimulationResult { schedule, metrics })
    }

    /// Resolves and runs a wire-shaped request.
    pub fn simulate_request(
        request: &SimulationRequest,
    ) -> Result<SimulationResult, SimulationError> {
        Simulator::new(request.config()?).simulate(&request.processes)
    }
}

/// Builds a timeline for `policy`. `quantum` is only read by Round Robin.
pub fn build_schedule(
    policy: Policy,
    table: &ProcessTable,
    quantum: Tick,
) -> Result<Schedule, SimulationError> {
    match policy {
        Policy::Fcfs => Ok(fcfs(table)),
        Policy::Sjf => Ok(sjf(table)),
        Policy::Priority => Ok(priority(table)),
        Policy::RoundRobin => round_robin(table, quantum),
    }
}
