//! Simulation clock helpers.

use crate::models::{ProcessTable, Tick};

/// Earliest arrival among the processes selected by `pending`.
///
/// Used whenever the CPU would otherwise sit idle: the clock jumps to the
/// returned tick. Returns `None` when no pending process remains.
pub fn next_arrival<F>(table: &ProcessTable, pending: F) -> Option<Tick>
where
    F: Fn(usize) -> bool,
{
    (0..table.len())
        .filter(|&idx| pending(idx))
        .map(|idx| table.get(idx).arrival_time)
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    #[test]
    fn test_next_arrival_skips_finished() {
        let table = ProcessTable::new(&[
            Process::new(1, 1).with_arrival(0),
            Process::new(2, 1).with_arrival(9),
            Process::new(3, 1).with_arrival(4),
        ]);
        let done = [true, false, false];
        assert_eq!(next_arrival(&table, |i| !done[i]), Some(4));
    }

    #[test]
    fn test_next_arrival_none_pending() {
        let table = ProcessTable::new(&[Process::new(1, 1)]);
        assert_eq!(next_arrival(&table, |_| false), None);
        assert_eq!(next_arrival(&ProcessTable::default(), |_| true), None);
    }
}
