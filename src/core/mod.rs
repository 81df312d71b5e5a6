//! Core pushdown automaton types.
//!
//! This module contains the pure data model of a simulation:
//! - State identifiers via the `State` trait
//! - Atomic symbols and the stack
//! - Immutable configurations and the traces built from them
//!
//! Nothing in this module searches or decides acceptance; it only
//! describes values the engine derives from one another.

mod configuration;
mod state;
mod symbol;
mod trace;

pub use configuration::Configuration;
pub use state::{State, StateId};
pub use symbol::{render, Stack, Symbol};
pub use trace::{Trace, TraceStep};
