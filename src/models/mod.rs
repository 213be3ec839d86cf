//! CPU-scheduling domain models.
//!
//! Provides the data types shared by every policy: the input process
//! list, the engine-owned process table, the policy selector, and the
//! output timeline.
//!
//! # Domain Mappings
//!
//! | u-cpusched | Textbook |
//! |------------|----------|
//! | Process | PCB (arrival, burst, priority) |
//! | ExecutionInterval | Gantt chart block |
//! | Schedule | Gantt chart |
//! | Policy | Scheduling algorithm |

mod policy;
mod process;
mod schedule;

pub use policy::Policy;
pub use process::{Process, ProcessId, ProcessTable, Tick};
pub use schedule::{ExecutionInterval, Schedule, Violation, ViolationType};
