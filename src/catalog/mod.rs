//! Catalog of named example machines.
//!
//! The catalog is a fixed, stateless mapping from identifier to machine
//! constructor. [`dispatch`] is the request-layer entry point: it resolves
//! an identifier, rejects unknown ones before any simulation runs, and
//! renders the result as a [`Report`].

mod machines;

pub use machines::{
    a2n_b, a_b_equal_c, a_plus_b_star, anbn, anbn_c_star, balanced_parentheses, palindrome, wwr,
    Phase,
};

use crate::engine::{simulate, Report};
use crate::machine::Machine;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Errors raised by catalog lookups.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown machine '{id}'")]
    UnknownMachine { id: String },
}

/// One listed machine: identifier and display name.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(skip)]
    build: fn() -> Machine<Phase>,
}

impl CatalogEntry {
    /// Construct a fresh definition of this machine.
    pub fn build(&self) -> Machine<Phase> {
        (self.build)()
    }
}

const ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        id: "balanced_parentheses",
        name: "Balanced Parentheses ( )",
        build: balanced_parentheses,
    },
    CatalogEntry {
        id: "anbn",
        name: "aⁿbⁿ",
        build: anbn,
    },
    CatalogEntry {
        id: "palindrome",
        name: "Palindrome (a,b)",
        build: palindrome,
    },
    CatalogEntry {
        id: "a_plus_b_star",
        name: "(a+b)*",
        build: a_plus_b_star,
    },
    CatalogEntry {
        id: "anbn_c_star",
        name: "aⁿbⁿc*",
        build: anbn_c_star,
    },
    CatalogEntry {
        id: "wwr",
        name: "wwʳ (Mirror Strings)",
        build: wwr,
    },
    CatalogEntry {
        id: "a2n_b",
        name: "a²ⁿbⁿ",
        build: a2n_b,
    },
    CatalogEntry {
        id: "a_b_equal_c",
        name: "aⁿbᵐcⁿ⁺ᵐ",
        build: a_b_equal_c,
    },
];

/// Every catalog entry, in listing order.
pub fn entries() -> &'static [CatalogEntry] {
    ENTRIES
}

/// Build the machine registered under `id`.
pub fn machine(id: &str) -> Result<Machine<Phase>, CatalogError> {
    ENTRIES
        .iter()
        .find(|entry| entry.id == id)
        .map(CatalogEntry::build)
        .ok_or_else(|| CatalogError::UnknownMachine { id: id.to_string() })
}

/// Resolve `id`, simulate `input` with `step_budget`, and render the result.
///
/// An unknown identifier yields the "unknown machine" report without
/// touching the engine.
pub fn dispatch(id: &str, input: &str, step_budget: usize) -> Report {
    match machine(id) {
        Ok(machine) => simulate(&machine, input, step_budget).to_report(),
        Err(err) => {
            debug!(%err, "rejecting request");
            Report::unknown_machine()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ReportReason;

    #[test]
    fn listing_has_eight_machines_in_order() {
        let ids: Vec<&str> = entries().iter().map(|e| e.id).collect();
        assert_eq!(
            ids,
            vec![
                "balanced_parentheses",
                "anbn",
                "palindrome",
                "a_plus_b_star",
                "anbn_c_star",
                "wwr",
                "a2n_b",
                "a_b_equal_c",
            ]
        );
    }

    #[test]
    fn listing_serializes_id_and_name_only() {
        let json = serde_json::to_value(&entries()[1]).unwrap();
        assert_eq!(json, serde_json::json!({"id": "anbn", "name": "aⁿbⁿ"}));
    }

    #[test]
    fn every_entry_builds_a_valid_machine() {
        for entry in entries() {
            let machine = entry.build();
            assert!(machine.violations().is_empty(), "{} is malformed", entry.id);
        }
    }

    #[test]
    fn unknown_id_is_an_error() {
        let result = machine("turing");
        assert_eq!(
            result.err(),
            Some(CatalogError::UnknownMachine {
                id: "turing".to_string()
            })
        );
    }

    #[test]
    fn dispatch_reports_unknown_machine() {
        let report = dispatch("nope", "ab", 10_000);

        assert!(!report.accepted);
        assert!(report.trace.is_empty());
        assert_eq!(report.reason, Some(ReportReason::UnknownMachine));
    }

    #[test]
    fn dispatch_runs_known_machine() {
        let report = dispatch("anbn", "ab", 10_000);

        assert!(report.accepted);
        assert_eq!(report.reason, None);
        assert_eq!(report.trace.last().map(|s| s.stack.as_str()), Some("$"));
    }
}
