//! Selection rules for non-preemptive dispatching.
//!
//! A selection rule scores every ready process; the process with the
//! lowest score runs next. Ties are always broken by the lowest stable
//! index in the process table, so selection is deterministic.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, select_next, SelectionRule};
//! use u_cpusched::models::{Process, ProcessTable};
//!
//! let table = ProcessTable::new(&[Process::new(1, 5), Process::new(2, 3)]);
//! assert_eq!(select_next(&table, [0, 1], &rules::ShortestBurst), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

pub mod rules;

use crate::models::{Process, ProcessTable};
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = selected first.
pub type RuleScore = i64;

/// A rule that ranks ready processes.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Scores a ready process.
    fn evaluate(&self, process: &Process) -> RuleScore;
}

/// Picks the candidate with the lowest `(score, index)`.
///
/// Returns `None` when `candidates` is empty.
pub fn select_next<I, R>(table: &ProcessTable, candidates: I, rule: &R) -> Option<usize>
where
    I: IntoIterator<Item = usize>,
    R: SelectionRule + ?Sized,
{
    candidates
        .into_iter()
        .min_by_key(|&idx| (rule.evaluate(table.get(idx)), idx))
}

/// Returns every table index sorted by `(score, index)`.
pub fn order_by<R>(table: &ProcessTable, rule: &R) -> Vec<usize>
where
    R: SelectionRule + ?Sized,
{
    let mut indices: Vec<usize> = (0..table.len()).collect();
    indices.sort_by_key(|&idx| (rule.evaluate(table.get(idx)), idx));
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_lowest_score() {
        let table = ProcessTable::new(&[
            Process::new(1, 8),
            Process::new(2, 2),
            Process::new(3, 5),
        ]);
        assert_eq!(select_next(&table, 0..3, &rules::ShortestBurst), Some(1));
    }

    #[test]
    fn test_ties_break_by_lowest_index() {
        let table = ProcessTable::new(&[
            Process::new(9, 4),
            Process::new(3, 2),
            Process::new(1, 2),
        ]);
        // Candidates supplied out of order; index 1 still wins over index 2.
        assert_eq!(select_next(&table, [2, 1, 0], &rules::ShortestBurst), Some(1));
    }

    #[test]
    fn test_no_candidates() {
        let table = ProcessTable::new(&[Process::new(1, 1)]);
        assert_eq!(
            select_next(&table, std::iter::empty(), &rules::ShortestBurst),
            None
        );
    }

    #[test]
    fn test_order_by_arrival_is_stable() {
        let table = ProcessTable::new(&[
            Process::new(1, 1).with_arrival(4),
            Process::new(2, 1).with_arrival(0),
            Process::new(3, 1).with_arrival(4),
            Process::new(4, 1).with_arrival(0),
        ]);
        assert_eq!(order_by(&table, &rules::EarliestArrival), vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_dyn_rule() {
        let table = ProcessTable::new(&[
            Process::new(1, 1).with_priority(4),
            Process::new(2, 9).with_priority(1),
        ]);
        let rule: &dyn SelectionRule = &rules::HighestPriority;
        assert_eq!(select_next(&table, 0..2, rule), Some(1));
    }
}
