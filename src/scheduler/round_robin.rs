//! Round Robin (preemptive).
//!
//! # Algorithm
//!
//! 1. Start the clock at the earliest arrival and admit every process
//!    that has arrived, in arrival order (equal arrivals: input order).
//! 2. Pop the queue head and run it for `min(quantum, remaining)` ticks.
//! 3. Admit processes that arrived during the slice, *then* re-queue the
//!    preempted process if it still has work. New arrivals therefore run
//!    ahead of the process that was just preempted.
//! 4. If the queue drains while processes are still to arrive, jump the
//!    clock to the next arrival and admit it.
//!
//! The loop never emits more CPU time than the sum of all bursts; a
//! violation aborts with [`SimulationError::BudgetExceeded`].
//!
//! # Complexity
//! O(k · n) where k = number of emitted slices (at most Σ⌈burst/quantum⌉).

use std::collections::VecDeque;

use tracing::debug;

use super::clock::next_arrival;
use crate::dispatching::{order_by, rules};
use crate::error::SimulationError;
use crate::models::{ExecutionInterval, ProcessTable, Schedule, Tick};
use crate::validation::validate_quantum;

/// Builds the Round Robin timeline for the given quantum.
///
/// # Errors
/// - [`SimulationError::InvalidInput`] if `quantum <= 0`.
/// - [`SimulationError::BudgetExceeded`] if the emitted time ever exceeds
///   the total burst of the table.
pub fn round_robin(table: &ProcessTable, quantum: Tick) -> Result<Schedule, SimulationError> {
    validate_quantum(quantum).map_err(SimulationError::InvalidInput)?;

    let mut schedule = Schedule::new();
    let Some(mut now) = table.earliest_arrival() else {
        return Ok(schedule);
    };

    let mut queue = ReadyQueue::new(table);
    let mut remaining: Vec<Tick> = table.processes().iter().map(|p| p.burst_time).collect();
    let budget = table.total_burst();
    let mut emitted: Tick = 0;

    queue.admit_arrived(table, now);

    while let Some(idx) = queue.pop() {
        let p = table.get(idx);
        let slice = quantum.min(remaining[idx]);

        let interval = ExecutionInterval::starting_at(p.id, now, slice);
        debug!(
            pid = p.id,
            start = interval.start,
            end = interval.end,
            remaining = remaining[idx] - slice,
            "round robin slice"
        );
        schedule.push(interval);

        now = interval.end;
        remaining[idx] -= slice;
        emitted += slice;
        if emitted > budget {
            return Err(SimulationError::BudgetExceeded { emitted, budget });
        }

        queue.admit_arrived(table, now);
        if remaining[idx] > 0 {
            queue.push(idx);
        }

        if queue.is_empty() {
            if let Some(arrival) = next_arrival(table, |i| !queue.visited[i]) {
                now = now.max(arrival);
                queue.admit_arrived(table, now);
            }
        }
    }

    Ok(schedule)
}

/// FIFO ready queue with once-only admission.
struct ReadyQueue {
    queue: VecDeque<usize>,
    /// Table indices in arrival order.
    arrival_order: Vec<usize>,
    /// Whether each index has been enqueued at least once.
    visited: Vec<bool>,
}

impl ReadyQueue {
    fn new(table: &ProcessTable) -> Self {
        Self {
            queue: VecDeque::with_capacity(table.len()),
            arrival_order: order_by(table, &rules::EarliestArrival),
            visited: vec![false; table.len()],
        }
    }

    /// Enqueues every not-yet-admitted process that has arrived by `now`.
    fn admit_arrived(&mut self, table: &ProcessTable, now: Tick) {
        for &idx in &self.arrival_order {
            if !self.visited[idx] && table.get(idx).has_arrived(now) {
                self.visited[idx] = true;
                self.queue.push_back(idx);
            }
        }
    }

    fn pop(&mut self) -> Option<usize> {
        self.queue.pop_front()
    }

    fn push(&mut self, idx: usize) {
        self.queue.push_back(idx);
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
