//! Schedule (timeline) model.
//!
//! A schedule is the ordered list of execution intervals produced by a
//! scheduling policy. Each interval records which process held the CPU
//! during a half-open tick range `[start, end)`.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3 (Gantt charts)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{ProcessId, ProcessTable, Tick};

/// A complete single-CPU timeline.
///
/// Serializes as a bare list of intervals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    /// Execution intervals in emission order.
    pub intervals: Vec<ExecutionInterval>,
}

/// One scheduling decision: a process runs over `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionInterval {
    /// Running process.
    #[serde(alias = "pid")]
    pub process_id: ProcessId,
    /// Start tick (inclusive).
    pub start: Tick,
    /// End tick (exclusive).
    pub end: Tick,
    /// `end - start`.
    pub duration: Tick,
}

/// A consistency problem found in a schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Related process.
    pub process_id: ProcessId,
    /// Human-readable description.
    pub message: String,
}

/// Classification of schedule violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationType {
    /// Two intervals occupy the CPU at the same tick.
    Overlap,
    /// A process ran before its arrival time.
    StartBeforeArrival,
    /// Total run time of a process differs from its burst time.
    BurstMismatch,
    /// An interval references a process that is not in the table.
    UnknownProcess,
}

impl ExecutionInterval {
    /// Creates an interval over `[start, end)`.
    pub fn new(process_id: ProcessId, start: Tick, end: Tick) -> Self {
        Self {
            process_id,
            start,
            end,
            duration: end - start,
        }
    }

    /// Creates an interval of `duration` ticks starting at `start`.
    pub fn starting_at(process_id: ProcessId, start: Tick, duration: Tick) -> Self {
        Self::new(process_id, start, start + duration)
    }

    /// Whether two intervals share at least one tick.
    #[inline]
    pub fn overlaps(&self, other: &ExecutionInterval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl Violation {
    fn new(violation_type: ViolationType, process_id: ProcessId, message: String) -> Self {
        Self {
            violation_type,
            process_id,
            message,
        }
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interval.
    pub fn push(&mut self, interval: ExecutionInterval) {
        self.intervals.push(interval);
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the schedule has no intervals.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Latest end tick, 0 when empty.
    pub fn makespan(&self) -> Tick {
        self.intervals.iter().map(|i| i.end).max().unwrap_or(0)
    }

    /// Earliest start tick.
    pub fn first_start(&self) -> Option<Tick> {
        self.intervals.iter().map(|i| i.start).min()
    }

    /// Sum of all interval durations.
    pub fn busy_time(&self) -> Tick {
        self.intervals.iter().map(|i| i.duration).sum()
    }

    /// Intervals belonging to one process, in emission order.
    pub fn intervals_for(&self, process_id: ProcessId) -> Vec<&ExecutionInterval> {
        self.intervals
            .iter()
            .filter(|i| i.process_id == process_id)
            .collect()
    }

    /// Completion tick of a process (latest end across its intervals).
    pub fn completion_time(&self, process_id: ProcessId) -> Option<Tick> {
        self.intervals
            .iter()
            .filter(|i| i.process_id == process_id)
            .map(|i| i.end)
            .max()
    }

    /// Process ids in order of first appearance.
    pub fn process_order(&self) -> Vec<ProcessId> {
        let mut seen = Vec::new();
        for i in &self.intervals {
            if !seen.contains(&i.process_id) {
                seen.push(i.process_id);
            }
        }
        seen
    }

    /// Checks the timeline against the processes it was built from.
    ///
    /// Returns every violation found; an empty vector means the schedule
    /// is a valid single-CPU execution of `table`.
    pub fn check_against(&self, table: &ProcessTable) -> Vec<Violation> {
        let mut violations = Vec::new();

        let mut by_start: Vec<&ExecutionInterval> = self.intervals.iter().collect();
        by_start.sort_by_key(|i| (i.start, i.end));
        for pair in by_start.windows(2) {
            if pair[0].overlaps(pair[1]) {
                violations.push(Violation::new(
                    ViolationType::Overlap,
                    pair[1].process_id,
                    format!(
                        "P{} [{}, {}) overlaps P{} [{}, {})",
                        pair[1].process_id,
                        pair[1].start,
                        pair[1].end,
                        pair[0].process_id,
                        pair[0].start,
                        pair[0].end
                    ),
                ));
            }
        }

        let mut run_time: HashMap<ProcessId, Tick> = HashMap::new();
        for interval in &self.intervals {
            match table.by_id(interval.process_id) {
                Some(p) => {
                    if interval.start < p.arrival_time {
                        violations.push(Violation::new(
                            ViolationType::StartBeforeArrival,
                            p.id,
                            format!(
                                "P{} starts at {} before arriving at {}",
                                p.id, interval.start, p.arrival_time
                            ),
                        ));
                    }
                    *run_time.entry(p.id).or_insert(0) += interval.duration;
                }
                None => violations.push(Violation::new(
                    ViolationType::UnknownProcess,
                    interval.process_id,
                    format!("P{} is not in the process table", interval.process_id),
                )),
            }
        }

        for (idx, p) in table.processes().iter().enumerate() {
            // Validated tables have unique ids; report a duplicate once.
            if table.index_of(p.id) != Some(idx) {
                continue;
            }
            let ran = run_time.get(&p.id).copied().unwrap_or(0);
            if ran != p.burst_time {
                violations.push(Violation::new(
                    ViolationType::BurstMismatch,
                    p.id,
                    format!("P{} ran {} ticks, burst is {}", p.id, ran, p.burst_time),
                ));
            }
        }

        violations
    }
}
