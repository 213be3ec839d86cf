//! Per-process and aggregate performance metrics.
//!
//! Computes standard CPU-scheduling indicators from a completed timeline
//! and the processes it was built from.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion | Latest end tick of the process |
//! | Turnaround | Completion - arrival |
//! | Waiting | Turnaround - burst |
//! | Average Waiting / Turnaround | Arithmetic mean over all processes |
//! | Utilization | Percent of the active span the CPU was busy |
//!
//! # Utilization
//!
//! The legacy behaviour reports a constant `100`. [`UtilizationMode::Measured`]
//! instead reports `100 · busy / (max(end) - min(start))`, where `busy`
//! equals `Σ burst` for any complete schedule. Measured is the default;
//! select [`UtilizationMode::Legacy`] for output compatible with the
//! constant figure.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{ProcessId, ProcessTable, Schedule, Tick};

/// Utilization figure reported by the legacy implementation.
pub const LEGACY_UTILIZATION: f64 = 100.0;

/// How [`ScheduleMetrics::utilization`] is derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UtilizationMode {
    /// Constant [`LEGACY_UTILIZATION`].
    Legacy,
    /// Busy time over the active span, in percent.
    #[default]
    Measured,
}

/// Metrics for one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessMetrics {
    /// Process id.
    #[serde(alias = "pid")]
    pub process_id: ProcessId,
    /// Tick at which the process finished.
    pub completion: Tick,
    /// `completion - arrival`.
    pub turnaround: Tick,
    /// `turnaround - burst`.
    pub waiting: Tick,
}

/// Aggregate schedule metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleMetrics {
    /// Per-process metrics, in order of first appearance in the schedule.
    pub details: Vec<ProcessMetrics>,
    /// Mean waiting time over all processes.
    pub average_waiting: f64,
    /// Mean turnaround time over all processes.
    pub average_turnaround: f64,
    /// CPU utilization in percent.
    pub utilization: f64,
    /// Latest end tick.
    #[serde(skip)]
    pub makespan: Tick,
    /// Ticks inside the active span with no process running.
    #[serde(skip)]
    pub idle_time: Tick,
}

impl ScheduleMetrics {
    /// Computes metrics from a schedule and its input processes.
    ///
    /// Averages divide by the full process count; an empty table yields
    /// zero averages.
    pub fn calculate(schedule: &Schedule, table: &ProcessTable, mode: UtilizationMode) -> Self {
        let mut details = Vec::with_capacity(table.len());
        // Per-process values fit in a Tick; their sums may not.
        let mut total_waiting: i128 = 0;
        let mut total_turnaround: i128 = 0;

        for pid in schedule.process_order() {
            let (Some(process), Some(completion)) =
                (table.by_id(pid), schedule.completion_time(pid))
            else {
                continue;
            };

            let turnaround = completion - process.arrival_time;
            let waiting = turnaround - process.burst_time;
            total_waiting += i128::from(waiting);
            total_turnaround += i128::from(turnaround);

            details.push(ProcessMetrics {
                process_id: pid,
                completion,
                turnaround,
                waiting,
            });
        }

        let (average_waiting, average_turnaround) = if table.is_empty() {
            (0.0, 0.0)
        } else {
            let n = table.len() as f64;
            (total_waiting as f64 / n, total_turnaround as f64 / n)
        };

        let makespan = schedule.makespan();
        let span = schedule
            .first_start()
            .map(|start| makespan - start)
            .unwrap_or(0);
        let busy = schedule.busy_time();

        let utilization = match mode {
            UtilizationMode::Legacy => LEGACY_UTILIZATION,
            UtilizationMode::Measured if span > 0 => 100.0 * busy as f64 / span as f64,
            UtilizationMode::Measured => 0.0,
        };

        Self {
            details,
            average_waiting,
            average_turnaround,
            utilization,
            makespan,
            idle_time: (span - busy).max(0),
        }
    }

    /// Metrics for one process.
    pub fn for_process(&self, process_id: ProcessId) -> Option<&ProcessMetrics> {
        self.details.iter().find(|m| m.process_id == process_id)
    }

    /// Largest waiting time of any single process.
    pub fn max_waiting(&self) -> Tick {
        self.details.iter().map(|m| m.waiting).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExecutionInterval, Process};

    fn make_schedule(intervals: &[(ProcessId, Tick, Tick)]) -> Schedule {
        let mut s = Schedule::new();
        for &(pid, start, end) in intervals {
            s.push(ExecutionInterval::new(pid, start, end));
        }
        s
    }

    fn sample_table() -> ProcessTable {
        ProcessTable::new(&[
            Process::new(1, 5),
            Process::new(2, 3).with_arrival(1),
            Process::new(3, 1).with_arrival(2),
        ])
    }

    #[test]
    fn test_metrics_fcfs_scenario() {
        let schedule = make_schedule(&[(1, 0, 5), (2, 5, 8), (3, 8, 9)]);
        let m = ScheduleMetrics::calculate(&schedule, &sample_table(), UtilizationMode::Measured);

        let waits: Vec<Tick> = m.details.iter().map(|d| d.waiting).collect();
        assert_eq!(waits, vec![0, 4, 6]);
        let turnarounds: Vec<Tick> = m.details.iter().map(|d| d.turnaround).collect();
        assert_eq!(turnarounds, vec![5, 7, 7]);

        assert!((m.average_waiting - 10.0 / 3.0).abs() < 1e-10);
        assert!((m.average_turnaround - 19.0 / 3.0).abs() < 1e-10);
        assert!((m.utilization - 100.0).abs() < 1e-10);
        assert_eq!(m.makespan, 9);
        assert_eq!(m.idle_time, 0);
    }

    #[test]
    fn test_metrics_preemptive_completion() {
        let table = ProcessTable::new(&[Process::new(1, 4), Process::new(2, 3).with_arrival(1)]);
        let schedule = make_schedule(&[(1, 0, 2), (2, 2, 4), (1, 4, 6), (2, 6, 7)]);
        let m = ScheduleMetrics::calculate(&schedule, &table, UtilizationMode::Measured);

        let p1 = m.for_process(1).unwrap();
        assert_eq!(p1.completion, 6);
        assert_eq!(p1.waiting, 2);
        let p2 = m.for_process(2).unwrap();
        assert_eq!(p2.completion, 7);
        assert_eq!(p2.turnaround, 6);
        assert_eq!(p2.waiting, 3);
        assert_eq!(m.max_waiting(), 3);
    }

    #[test]
    fn test_measured_utilization_with_gap() {
        let table = ProcessTable::new(&[Process::new(1, 2), Process::new(2, 2).with_arrival(6)]);
        let schedule = make_schedule(&[(1, 0, 2), (2, 6, 8)]);
        let m = ScheduleMetrics::calculate(&schedule, &table, UtilizationMode::Measured);
        // busy 4 over span 8
        assert!((m.utilization - 50.0).abs() < 1e-10);
        assert_eq!(m.idle_time, 4);
    }

    #[test]
    fn test_legacy_utilization_is_constant() {
        let table = ProcessTable::new(&[Process::new(1, 2), Process::new(2, 2).with_arrival(6)]);
        let schedule = make_schedule(&[(1, 0, 2), (2, 6, 8)]);
        let m = ScheduleMetrics::calculate(&schedule, &table, UtilizationMode::Legacy);
        assert!((m.utilization - LEGACY_UTILIZATION).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_empty() {
        let m = ScheduleMetrics::calculate(
            &Schedule::new(),
            &ProcessTable::default(),
            UtilizationMode::Measured,
        );
        assert!(m.details.is_empty());
        assert_eq!(m.average_waiting, 0.0);
        assert_eq!(m.average_turnaround, 0.0);
        assert_eq!(m.utilization, 0.0);
        assert_eq!(m.max_waiting(), 0);
    }

    #[test]
    fn test_details_follow_schedule_order() {
        let schedule = make_schedule(&[(3, 2, 3), (1, 3, 8), (2, 8, 11)]);
        let m = ScheduleMetrics::calculate(&schedule, &sample_table(), UtilizationMode::Measured);
        let order: Vec<ProcessId> = m.details.iter().map(|d| d.process_id).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn test_metrics_wire_format() {
        let schedule = make_schedule(&[(1, 0, 5)]);
        let table = ProcessTable::new(&[Process::new(1, 5)]);
        let m = ScheduleMetrics::calculate(&schedule, &table, UtilizationMode::Legacy);
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["details"][0]["processId"], 1);
        assert_eq!(json["details"][0]["completion"], 5);
        assert_eq!(json["averageWaiting"], 0.0);
        assert_eq!(json["averageTurnaround"], 5.0);
        assert_eq!(json["utilization"], 100.0);
        assert!(json.get("makespan").is_none());
    }
}
