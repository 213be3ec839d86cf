//! Scheduling policy selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SimulationError;

/// One of the four supported CPU-scheduling policies.
///
/// Wire names: `fcfs`, `sjf`, `priority`, `round_robin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Priority, non-preemptive (lower value first).
    Priority,
    /// Round Robin with a fixed quantum.
    RoundRobin,
}

impl Policy {
    /// All policies in declaration order.
    pub const ALL: [Policy; 4] = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::Priority,
        Policy::RoundRobin,
    ];

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::Fcfs => "fcfs",
            Policy::Sjf => "sjf",
            Policy::Priority => "priority",
            Policy::RoundRobin => "round_robin",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "First-Come-First-Served",
            Policy::Sjf => "Shortest Job First",
            Policy::Priority => "Priority Scheduling",
            Policy::RoundRobin => "Round Robin",
        }
    }

    /// Whether the policy can interrupt a running process.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Policy::RoundRobin)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Policy {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Policy::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| SimulationError::UnknownPolicy(s.to_string()))
    }
}
