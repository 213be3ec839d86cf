//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival time (equal arrivals keep input order).
//! 2. Walk the order with a single clock starting at 0, jumping forward
//!    over idle gaps, and run each process for its full burst.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the walk.

use tracing::debug;

use crate::dispatching::{order_by, rules};
use crate::models::{ExecutionInterval, ProcessTable, Schedule, Tick};

/// Builds the FCFS timeline. One interval per process.
pub fn fcfs(table: &ProcessTable) -> Schedule {
    let mut schedule = Schedule::new();
    let mut now: Tick = 0;

    for idx in order_by(table, &rules::EarliestArrival) {
        let p = table.get(idx);
        now = now.max(p.arrival_time);

        let interval = ExecutionInterval::starting_at(p.id, now, p.burst_time);
        debug!(pid = p.id, start = interval.start, end = interval.end, "fcfs dispatch");
        schedule.push(interval);
        now = interval.end;
    }

    schedule
}
