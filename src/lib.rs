//! Pushdown: a nondeterministic pushdown automaton simulator
//!
//! Given a machine definition and an input string, pushdown decides whether
//! the string is accepted and, if so, returns a witnessing sequence of
//! machine configurations.
//!
//! # Core Concepts
//!
//! - **Machine**: immutable definition with a nondeterministic transition
//!   relation and a stack bottom sentinel
//! - **Configuration**: state, input position and stack, compared
//!   structurally
//! - **Engine**: bounded breadth-first search with deduplication
//! - **Trace**: the configurations from the initial one to an accepting one
//!
//! A configuration accepts when its state is accepting, all input has been
//! consumed and the stack holds only the bottom sentinel.
//!
//! # Example
//!
//! ```rust
//! use pushdown::catalog;
//! use pushdown::engine::{simulate, RejectReason};
//!
//! let machine = catalog::balanced_parentheses();
//!
//! let outcome = simulate(&machine, "(()())", 10_000);
//! assert!(outcome.is_accepted());
//!
//! let last = outcome.trace().unwrap().steps().pop().unwrap();
//! assert_eq!(last.stack, "$");
//!
//! let outcome = simulate(&machine, "(()", 10_000);
//! assert_eq!(outcome.reason(), Some(RejectReason::Exhausted));
//! ```

pub mod catalog;
pub mod core;
pub mod engine;
pub mod machine;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{Configuration, State, StateId, Symbol, Trace, TraceStep};
pub use engine::{simulate, Outcome, RejectReason, Report, SimulationConfig, Simulator};
pub use machine::{BuildError, Input, Machine, MachineBuilder};
