//! Process model.
//!
//! A process is a unit of CPU work competing for a single processor.
//! Its attributes are fixed for the duration of one simulation run.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Simulation time in ticks.
pub type Tick = i64;

/// Process identifier.
pub type ProcessId = u32;

/// A process to be scheduled.
///
/// # Time Representation
/// All times are integer ticks relative to the simulation epoch (t=0).
/// Times are signed so that malformed input can be represented and
/// rejected by [`crate::validation`] rather than at decode time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// Unique process identifier.
    #[serde(alias = "pid")]
    pub id: ProcessId,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: Tick,
    /// Total CPU ticks required to complete.
    pub burst_time: Tick,
    /// Scheduling priority (lower = more important).
    #[serde(default)]
    pub priority: i32,
}

impl Process {
    /// Creates a process arriving at t=0 with priority 0.
    pub fn new(id: ProcessId, burst_time: Tick) -> Self {
        Self {
            id,
            arrival_time: 0,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: Tick) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: Tick) -> bool {
        self.arrival_time <= time
    }
}

/// Engine-owned copy of the caller's process list.
///
/// Indices are stable for the lifetime of the table and equal the
/// position of each process in the caller's input. Policies keep their
/// working state in index-keyed vectors rather than id-keyed maps.
#[derive(Debug, Clone, Default)]
pub struct ProcessTable {
    processes: Vec<Process>,
    index_by_id: HashMap<ProcessId, usize>,
}

impl ProcessTable {
    /// Copies `processes` into a new table.
    pub fn new(processes: &[Process]) -> Self {
        let mut index_by_id = HashMap::with_capacity(processes.len());
        for (idx, p) in processes.iter().enumerate() {
            index_by_id.entry(p.id).or_insert(idx);
        }
        Self {
            processes: processes.to_vec(),
            index_by_id,
        }
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Process at a stable index.
    pub fn get(&self, idx: usize) -> &Process {
        &self.processes[idx]
    }

    /// All processes in input order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Index of the first process with the given id.
    pub fn index_of(&self, id: ProcessId) -> Option<usize> {
        self.index_by_id.get(&id).copied()
    }

    /// Looks up a process by id.
    pub fn by_id(&self, id: ProcessId) -> Option<&Process> {
        self.index_of(id).map(|idx| &self.processes[idx])
    }

    /// Earliest arrival time, or `None` for an empty table.
    pub fn earliest_arrival(&self) -> Option<Tick> {
        self.processes.iter().map(|p| p.arrival_time).min()
    }

    /// Sum of all burst times.
    pub fn total_burst(&self) -> Tick {
        self.processes.iter().map(|p| p.burst_time).sum()
    }
}
