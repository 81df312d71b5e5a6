//! Simulation outcomes and the caller-facing report.

use crate::core::{State, Trace, TraceStep};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a run ended without acceptance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RejectReason {
    /// Every reachable configuration was explored. The input is not in the
    /// machine's language.
    Exhausted,

    /// The step budget ran out first. Says nothing about membership: a
    /// larger budget may still find an accepting configuration.
    Timeout,
}

impl RejectReason {
    pub fn as_str(self) -> &'static str {
        match self {
            RejectReason::Exhausted => "exhausted",
            RejectReason::Timeout => "timeout",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict of one simulation run.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<S: State> {
    /// Input accepted, with a witnessing trace.
    Accepted(Trace<S>),

    /// Input not accepted.
    Rejected(RejectReason),
}

impl<S: State> Outcome<S> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }

    pub fn trace(&self) -> Option<&Trace<S>> {
        match self {
            Outcome::Accepted(trace) => Some(trace),
            Outcome::Rejected(_) => None,
        }
    }

    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            Outcome::Accepted(_) => None,
            Outcome::Rejected(reason) => Some(*reason),
        }
    }

    /// Render for callers that consume JSON.
    pub fn to_report(&self) -> Report {
        match self {
            Outcome::Accepted(trace) => Report {
                accepted: true,
                trace: trace.steps(),
                reason: None,
            },
            Outcome::Rejected(reason) => Report::rejected((*reason).into()),
        }
    }
}

/// Counters collected while searching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Configurations taken off the worklist.
    pub dequeued: usize,
    /// Distinct configurations discovered, the initial one included.
    pub discovered: usize,
    /// Largest worklist length observed.
    pub max_frontier: usize,
    /// Deepest stack among discovered configurations.
    pub max_stack_depth: usize,
}

/// Full result of a [`Simulator`](super::Simulator) run.
#[derive(Clone, Debug, PartialEq)]
pub struct Simulation<S: State> {
    pub outcome: Outcome<S>,
    pub stats: SearchStats,
}

/// Reason string carried by a rejected report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportReason {
    #[serde(rename = "exhausted")]
    Exhausted,
    #[serde(rename = "timeout")]
    Timeout,
    /// The requested machine identifier is not in the catalog. Produced
    /// before any simulation runs.
    #[serde(rename = "unknown machine")]
    UnknownMachine,
}

impl From<RejectReason> for ReportReason {
    fn from(reason: RejectReason) -> Self {
        match reason {
            RejectReason::Exhausted => ReportReason::Exhausted,
            RejectReason::Timeout => ReportReason::Timeout,
        }
    }
}

/// Caller-facing result shape:
/// `{accepted, trace}` on acceptance, `{accepted: false, trace: [], reason}`
/// otherwise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub accepted: bool,
    pub trace: Vec<TraceStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<ReportReason>,
}

impl Report {
    pub fn rejected(reason: ReportReason) -> Self {
        Self {
            accepted: false,
            trace: Vec::new(),
            reason: Some(reason),
        }
    }

    pub fn unknown_machine() -> Self {
        Self::rejected(ReportReason::UnknownMachine)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
