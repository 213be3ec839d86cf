//! Built-in selection rules.
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{RuleScore, SelectionRule};
use crate::models::Process;

/// Earliest arrival first.
///
/// The selection order of First-Come-First-Served.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl SelectionRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.arrival_time
    }
}

/// Shortest burst first.
///
/// Minimizes mean waiting time among non-preemptive policies when all
/// jobs are available together; long jobs can starve under a steady
/// stream of short arrivals.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.burst_time
    }
}

/// Lowest priority value first.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.priority as RuleScore
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earliest_arrival() {
        let early = Process::new(1, 9).with_arrival(1);
        let late = Process::new(2, 1).with_arrival(4);
        assert!(EarliestArrival.evaluate(&early) < EarliestArrival.evaluate(&late));
    }

    #[test]
    fn test_shortest_burst() {
        let short = Process::new(1, 1);
        let long = Process::new(2, 5);
        assert!(ShortestBurst.evaluate(&short) < ShortestBurst.evaluate(&long));
    }

    #[test]
    fn test_highest_priority() {
        let urgent = Process::new(1, 5).with_priority(-1);
        let relaxed = Process::new(2, 5).with_priority(3);
        assert!(HighestPriority.evaluate(&urgent) < HighestPriority.evaluate(&relaxed));
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(EarliestArrival.name(), "FCFS");
        assert_eq!(ShortestBurst.name(), "SJF");
        assert_eq!(HighestPriority.name(), "PRIORITY");
    }
}
