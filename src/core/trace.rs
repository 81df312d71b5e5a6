//! Derivation traces.
//!
//! A trace is the witness of acceptance: every configuration from the
//! initial one to the accepting one, in order.

use super::configuration::Configuration;
use super::state::State;
use super::symbol::{render, Symbol};
use serde::{Deserialize, Serialize};

/// One rendered configuration of a trace.
///
/// `stack` lists the stack top-first: the symbol that would be popped next
/// comes first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    pub state: String,
    pub position: usize,
    pub remaining_input: String,
    pub stack: String,
}

/// Ordered sequence of configurations from the initial configuration to an
/// accepting one, inclusive.
///
/// # Example
///
/// ```rust
/// use pushdown::core::{Configuration, StateId, Symbol, Trace};
///
/// let input = Symbol::parse("a");
/// let start = Configuration::initial(StateId::from("q0"), Symbol::new('$'));
/// let next = start.apply(&StateId::from("qf"), &[Symbol::new('$')], true);
///
/// let trace = Trace::new(input, vec![start, next]);
/// let steps = trace.steps();
///
/// assert_eq!(steps.len(), 2);
/// assert_eq!(steps[0].remaining_input, "a");
/// assert_eq!(steps[1].remaining_input, "");
/// assert_eq!(steps[1].stack, "$");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Trace<S: State> {
    input: Vec<Symbol>,
    configurations: Vec<Configuration<S>>,
}

impl<S: State> Trace<S> {
    pub fn new(input: Vec<Symbol>, configurations: Vec<Configuration<S>>) -> Self {
        Self {
            input,
            configurations,
        }
    }

    /// Input the trace was derived against.
    pub fn input(&self) -> &[Symbol] {
        &self.input
    }

    pub fn configurations(&self) -> &[Configuration<S>] {
        &self.configurations
    }

    pub fn len(&self) -> usize {
        self.configurations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configurations.is_empty()
    }

    pub fn first(&self) -> Option<&Configuration<S>> {
        self.configurations.first()
    }

    pub fn last(&self) -> Option<&Configuration<S>> {
        self.configurations.last()
    }

    /// States visited, in order.
    pub fn states(&self) -> Vec<&S> {
        self.configurations.iter().map(|c| &c.state).collect()
    }

    /// Render every configuration for display, with the unconsumed input
    /// suffix at each step.
    pub fn steps(&self) -> Vec<TraceStep> {
        self.configurations
            .iter()
            .map(|config| TraceStep {
                state: config.state.name().to_string(),
                position: config.position,
                remaining_input: render(self.input.get(config.position..).unwrap_or(&[])),
                stack: config.stack.to_string(),
            })
            .collect()
    }
}
