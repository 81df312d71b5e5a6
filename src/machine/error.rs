//! Build errors for machine definitions.

use super::validation::MachineViolation;
use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Start state not specified. Call .start(state) before .build()")]
    MissingStartState,

    #[error("Stack bottom not specified. Call .stack_bottom(symbol) before .build()")]
    MissingStackBottom,

    #[error("Malformed machine definition: {}", describe(.0))]
    Malformed(Vec<MachineViolation>),
}

fn describe(violations: &[MachineViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
