//! Scheduling policies, metrics, and the simulation entry point.
//!
//! # Policies
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | FCFS | No | Arrival order |
//! | SJF | No | Shortest burst among ready |
//! | Priority | No | Lowest priority value among ready |
//! | Round Robin | Yes | FIFO queue, fixed quantum |
//!
//! Every policy is a pure function of an engine-owned
//! [`ProcessTable`](crate::models::ProcessTable) and never touches caller state.
//! The policies assume input accepted by
//! [`validate_processes`](crate::validation::validate_processes); [`Simulator`]
//! runs that check before scheduling.
//!
//! # Metrics
//!
//! [`ScheduleMetrics`] derives completion, turnaround and waiting time per
//! process plus averages and utilization.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod clock;
mod engine;
mod fcfs;
mod metrics;
mod round_robin;
mod selection;

pub use clock::next_arrival;
pub use engine::{
    build_schedule, SimulationConfig, SimulationRequest, SimulationResult, Simulator,
    DEFAULT_QUANTUM,
};
pub use fcfs::fcfs;
pub use metrics::{ProcessMetrics, ScheduleMetrics, UtilizationMode, LEGACY_UTILIZATION};
pub use round_robin::round_robin;
pub use selection::{priority, run_to_completion, sjf};
