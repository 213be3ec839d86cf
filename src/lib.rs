//! Single-CPU process scheduling simulator.
//!
//! Given a set of processes (arrival time, burst time, priority), builds the
//! execution timeline under one of four classical policies and derives
//! per-process and aggregate performance metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessTable`, `Policy`,
//!   `ExecutionInterval`, `Schedule`
//! - **`dispatching`**: Selection rules (arrival, burst, priority) with
//!   deterministic lowest-index tie-breaking
//! - **`scheduler`**: FCFS, SJF, Priority, Round Robin, metrics, and the
//!   `Simulator` entry point
//! - **`validation`**: Input checks (negative arrival, non-positive burst/quantum)
//! - **`advisory`**: Boundary to an external analysis service, with local
//!   policy comparison as fallback
//! - **`workload`**: Seeded random process sets
//!
//! # Architecture
//!
//! Every simulation is a pure, synchronous computation over an
//! engine-owned copy of the input. Nothing is shared between calls, so
//! concurrent simulations need no locking.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod advisory;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::SimulationError;
