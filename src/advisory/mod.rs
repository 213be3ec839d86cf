//! Boundary to the external schedule-analysis collaborator.
//!
//! A simulation result can be handed to an [`Analyst`] (typically backed
//! by a hosted language model) that returns a short risk report or a
//! recommended policy. The analyst is optional and unreliable by nature:
//! every entry point in this module degrades to a placeholder instead of
//! failing, so simulation never depends on it.
//!
//! # Risk focus per policy
//!
//! | Policy | Focus |
//! |--------|-------|
//! | FCFS | Convoy effect |
//! | SJF | Starvation of long jobs |
//! | Priority | Starvation of low-priority jobs |
//! | Round Robin | Quantum fit vs. burst lengths |

mod compare;

pub use compare::{compare_policies, PolicyOutcome};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::SimulationError;
use crate::models::{Policy, Process, Tick};
use crate::scheduler::{ScheduleMetrics, SimulationResult, Simulator};

/// Errors reported by an [`Analyst`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// The analyst cannot be reached at all (e.g. missing credentials).
    #[error("analyst unavailable: {0}")]
    Unavailable(String),
    /// The request failed in transit.
    #[error("analyst request failed: {0}")]
    Transport(String),
    /// The analyst answered with something that could not be decoded.
    #[error("malformed analyst response: {0}")]
    MalformedResponse(String),
}

/// The scheduling risk an analysis should concentrate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskFocus {
    /// Short jobs stuck behind a long one.
    ConvoyEffect,
    /// Long jobs postponed indefinitely by shorter arrivals.
    LongJobStarvation,
    /// Low-priority jobs postponed indefinitely.
    LowPriorityStarvation,
    /// Quantum too large (FCFS-like) or too small (switch overhead).
    QuantumEfficiency,
}

impl RiskFocus {
    /// The focus for a policy.
    pub fn for_policy(policy: Policy) -> Self {
        match policy {
            Policy::Fcfs => RiskFocus::ConvoyEffect,
            Policy::Sjf => RiskFocus::LongJobStarvation,
            Policy::Priority => RiskFocus::LowPriorityStarvation,
            Policy::RoundRobin => RiskFocus::QuantumEfficiency,
        }
    }

    /// Short description for prompts and reports.
    pub fn describe(&self) -> &'static str {
        match self {
            RiskFocus::ConvoyEffect => "convoy effect: short jobs waiting behind long ones",
            RiskFocus::LongJobStarvation => "starvation risk for long burst jobs",
            RiskFocus::LowPriorityStarvation => "starvation risk for low priority jobs",
            RiskFocus::QuantumEfficiency => {
                "quantum fit: too large behaves like FCFS, too small adds overhead"
            }
        }
    }
}

/// Input handed to [`Analyst::analyze`].
#[derive(Debug, Clone, Copy)]
pub struct AnalysisRequest<'a> {
    /// Simulated processes.
    pub processes: &'a [Process],
    /// Policy that produced the metrics.
    pub policy: Policy,
    /// Metrics of the simulation.
    pub metrics: &'a ScheduleMetrics,
    /// Quantum, present only for Round Robin.
    pub quantum: Option<Tick>,
}

impl<'a> AnalysisRequest<'a> {
    /// Creates a request. `quantum` is dropped for policies that ignore it.
    pub fn new(
        processes: &'a [Process],
        policy: Policy,
        metrics: &'a ScheduleMetrics,
        quantum: Option<Tick>,
    ) -> Self {
        Self {
            processes,
            policy,
            metrics,
            quantum: quantum.filter(|_| policy == Policy::RoundRobin),
        }
    }

    /// Risk focus for the request's policy.
    pub fn focus(&self) -> RiskFocus {
        RiskFocus::for_policy(self.policy)
    }
}

/// A recommended policy with its justification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// The recommended policy.
    #[serde(alias = "recommended_algorithm")]
    pub recommended_algorithm: Policy,
    /// Why it was chosen.
    pub reasoning: String,
}

/// External schedule-analysis service.
pub trait Analyst: Send + Sync {
    /// Produces a short natural-language risk report.
    fn analyze(&self, request: &AnalysisRequest<'_>) -> Result<String, AnalysisError>;

    /// Recommends the best policy for a process set.
    fn recommend(&self, processes: &[Process]) -> Result<Recommendation, AnalysisError>;
}

/// Decodes a recommendation from raw analyst output.
///
/// Accepts bare JSON or JSON wrapped in a Markdown code fence.
pub fn parse_recommendation(raw: &str) -> Result<Recommendation, AnalysisError> {
    let body = strip_code_fence(raw);
    serde_json::from_str(body).map_err(|e| AnalysisError::MalformedResponse(e.to_string()))
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Runs the analyst, substituting a placeholder message on absence or failure.
pub fn analyze_or_placeholder(
    analyst: Option<&dyn Analyst>,
    request: &AnalysisRequest<'_>,
) -> String {
    let Some(analyst) = analyst else {
        return "Analysis unavailable: no analyst configured.".to_string();
    };

    match analyst.analyze(request) {
        Ok(report) => report,
        Err(e) => {
            warn!(policy = %request.policy, error = %e, "schedule analysis failed");
            format!("Analysis failed: {e}")
        }
    }
}

/// Asks the analyst for a recommendation, falling back to a local comparison.
///
/// The fallback simulates every policy and recommends the one with the
/// lowest average waiting time. If even that fails (invalid input), FCFS
/// is returned with the error as reasoning.
pub fn recommend_or_fallback(
    analyst: Option<&dyn Analyst>,
    processes: &[Process],
    quantum: Tick,
) -> Recommendation {
    let failure = match analyst.map(|a| a.recommend(processes)) {
        Some(Ok(recommendation)) => return recommendation,
        Some(Err(e)) => {
            warn!(error = %e, "policy recommendation failed, comparing locally");
            format!("analyst failed ({e})")
        }
        None => "no analyst configured".to_string(),
    };

    match compare_policies(processes, quantum) {
        Ok(outcomes) => match outcomes.first() {
            Some(best) => Recommendation {
                recommended_algorithm: best.policy,
                reasoning: format!(
                    "Local comparison ({failure}): {} has the lowest average waiting time ({:.2}).",
                    best.policy.display_name(),
                    best.average_waiting
                ),
            },
            None => fcfs_fallback(&failure),
        },
        Err(e) => fcfs_fallback(&format!("{failure}; {e}")),
    }
}

fn fcfs_fallback(reason: &str) -> Recommendation {
    Recommendation {
        recommended_algorithm: Policy::Fcfs,
        reasoning: format!("No recommendation available: {reason}."),
    }
}

/// A simulation result with its analysis text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedSimulation {
    /// Timeline and metrics.
    #[serde(flatten)]
    pub result: SimulationResult,
    /// Analyst report or placeholder.
    pub ai_analysis: String,
}

/// Simulates and attaches an analysis. Analyst failures never propagate.
///
/// # Errors
/// Only simulation errors are returned.
pub fn simulate_with_analysis(
    simulator: &Simulator,
    processes: &[Process],
    analyst: Option<&dyn Analyst>,
) -> Result<AnalyzedSimulation, SimulationError> {
    let result = simulator.simulate(processes)?;
    let config = simulator.config();
    let request = AnalysisRequest::new(
        processes,
        config.policy,
        &result.metrics,
        Some(config.quantum),
    );
    let ai_analysis = analyze_or_placeholder(analyst, &request);
    Ok(AnalyzedSimulation {
        result,
        ai_analysis,
    })
}
