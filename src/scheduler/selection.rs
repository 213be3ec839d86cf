//! Non-preemptive selection loop shared by SJF and Priority.
//!
//! # Algorithm
//!
//! At each decision point the ready set is every unfinished process whose
//! arrival time is at or before the clock.
//! 1. If the ready set is empty, jump the clock to the next arrival.
//! 2. Otherwise pick the lowest-scoring ready process (ties: lowest input
//!    index) and run it to completion.
//! 3. Repeat until every process has finished.
//!
//! Ties are broken by input position, not by arrival. Round Robin instead
//! admits processes in arrival order, so the two families can disagree on
//! equal-key processes listed out of arrival order.
//!
//! # Complexity
//! O(n²): each of the n decisions scans the whole table.

use tracing::debug;

use super::clock::next_arrival;
use crate::dispatching::{rules, select_next, SelectionRule};
use crate::models::{ExecutionInterval, ProcessTable, Schedule, Tick};

/// Runs the non-preemptive loop under an arbitrary selection rule.
pub fn run_to_completion<R>(table: &ProcessTable, rule: &R) -> Schedule
where
    R: SelectionRule + ?Sized,
{
    let n = table.len();
    let mut schedule = Schedule::new();
    let mut finished = vec![false; n];
    let mut remaining = n;
    let mut now: Tick = 0;

    while remaining > 0 {
        let ready = (0..n).filter(|&idx| !finished[idx] && table.get(idx).has_arrived(now));

        match select_next(table, ready, rule) {
            Some(idx) => {
                let p = table.get(idx);
                let interval = ExecutionInterval::starting_at(p.id, now, p.burst_time);
                debug!(
                    rule = rule.name(),
                    pid = p.id,
                    start = interval.start,
                    end = interval.end,
                    "dispatch"
                );
                schedule.push(interval);
                now = interval.end;
                finished[idx] = true;
                remaining -= 1;
            }
            None => match next_arrival(table, |idx| !finished[idx]) {
                Some(arrival) => now = now.max(arrival),
                None => break,
            },
        }
    }

    schedule
}

/// Shortest-Job-First (non-preemptive).
pub fn sjf(table: &ProcessTable) -> Schedule {
    run_to_completion(table, &rules::ShortestBurst)
}

/// Priority scheduling (non-preemptive, lower value first).
pub fn priority(table: &ProcessTable) -> Schedule {
    run_to_completion(table, &rules::HighestPriority)
}
