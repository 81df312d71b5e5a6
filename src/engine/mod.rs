//! Simulation engine.
//!
//! Explores the nondeterministic configuration space of a [`Machine`]
//! breadth-first, with structural deduplication and a mandatory step
//! budget, and reports one of three outcomes:
//!
//! - **Accepted**, with a trace from the initial configuration to an
//!   accepting one
//! - **Exhausted**, a sound rejection
//! - **Timeout**, which must not be read as a rejection
//!
//! Every outcome is returned as a value; the engine never fails.
//!
//! [`Machine`]: crate::machine::Machine

mod config;
mod outcome;
mod search;

pub use config::{SimulationConfig, DEFAULT_STEP_BUDGET};
pub use outcome::{Outcome, RejectReason, Report, ReportReason, SearchStats, Simulation};
pub use search::{simulate, Simulator};
