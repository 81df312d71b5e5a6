//! Builder for constructing machine definitions.

use super::definition::{Input, Machine, Move};
use super::error::BuildError;
use crate::core::{State, Symbol};

/// Builder for constructing machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use pushdown::core::StateId;
/// use pushdown::machine::MachineBuilder;
///
/// let machine = MachineBuilder::new()
///     .states([StateId::from("q0"), StateId::from("qf")])
///     .start(StateId::from("q0"))
///     .accept(StateId::from("qf"))
///     .stack_bottom('$')
///     .on(StateId::from("q0"), '(', '$', StateId::from("q0"), "A$")
///     .on_epsilon(StateId::from("q0"), '$', StateId::from("qf"), "$")
///     .build_checked()
///     .unwrap();
///
/// assert_eq!(machine.rule_count(), 2);
/// ```
pub struct MachineBuilder<S: State> {
    states: Vec<S>,
    start: Option<S>,
    accept_states: Vec<S>,
    stack_bottom: Option<Symbol>,
    rules: Vec<(S, Input, Symbol, Move<S>)>,
}

impl<S: State> MachineBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            start: None,
            accept_states: Vec::new(),
            stack_bottom: None,
            rules: Vec::new(),
        }
    }

    /// Declare a state.
    pub fn state(mut self, state: S) -> Self {
        if !self.states.contains(&state) {
            self.states.push(state);
        }
        self
    }

    /// Declare several states at once.
    pub fn states(self, states: impl IntoIterator<Item = S>) -> Self {
        states.into_iter().fold(self, Self::state)
    }

    /// Set the start state (required).
    pub fn start(mut self, state: S) -> Self {
        self.start = Some(state);
        self
    }

    /// Mark a state as accepting.
    pub fn accept(mut self, state: S) -> Self {
        if !self.accept_states.contains(&state) {
            self.accept_states.push(state);
        }
        self
    }

    /// Set the stack bottom sentinel (required).
    pub fn stack_bottom(mut self, symbol: impl Into<Symbol>) -> Self {
        self.stack_bottom = Some(symbol.into());
        self
    }

    /// Add a transition alternative with an explicit input component.
    ///
    /// `push` is read top-first, one symbol per character.
    pub fn rule(mut self, from: S, input: Input, top: impl Into<Symbol>, to: S, push: &str) -> Self {
        let mv = Move {
            to,
            push: Symbol::parse(push),
        };
        self.rules.push((from, input, top.into(), mv));
        self
    }

    /// Add an alternative that consumes `symbol`.
    pub fn on(self, from: S, symbol: impl Into<Symbol>, top: impl Into<Symbol>, to: S, push: &str) -> Self {
        let input = Input::Symbol(symbol.into());
        self.rule(from, input, top, to, push)
    }

    /// Add a spontaneous alternative.
    pub fn on_epsilon(self, from: S, top: impl Into<Symbol>, to: S, push: &str) -> Self {
        self.rule(from, Input::Epsilon, top, to, push)
    }

    /// Build the machine.
    ///
    /// Only the start state and stack bottom are required. States are not
    /// cross-checked; use [`build_checked`](Self::build_checked) for that.
    pub fn build(self) -> Result<Machine<S>, BuildError> {
        let start = self.start.ok_or(BuildError::MissingStartState)?;
        let stack_bottom = self.stack_bottom.ok_or(BuildError::MissingStackBottom)?;

        let mut machine = Machine::new(self.states, start, self.accept_states, stack_bottom);
        for (from, input, top, mv) in self.rules {
            machine.insert(from, input, top, mv);
        }

        Ok(machine)
    }

    /// Build the machine and fail fast if it has any structural violation.
    pub fn build_checked(self) -> Result<Machine<S>, BuildError> {
        let machine = self.build()?;
        let violations = machine.violations();
        if violations.is_empty() {
            Ok(machine)
        } else {
            Err(BuildError::Malformed(violations))
        }
    }
}

impl<S: State> Default for MachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateId;
    use crate::machine::MachineViolation;

    fn q(name: &str) -> StateId {
        StateId::from(name)
    }

    #[test]
    fn builder_requires_start_state() {
        let result = MachineBuilder::<StateId>::new().stack_bottom('$').build();

        assert!(matches!(result, Err(BuildError::MissingStartState)));
    }

    #[test]
    fn builder_requires_stack_bottom() {
        let result = MachineBuilder::new().start(q("q0")).build();

        assert!(matches!(result, Err(BuildError::MissingStackBottom)));
    }

    #[test]
    fn machine_without_rules_builds() {
        let machine = MachineBuilder::new()
            .state(q("q0"))
            .start(q("q0"))
            .stack_bottom('$')
            .build()
            .unwrap();

        assert_eq!(machine.rule_count(), 0);
        assert!(machine.accept_states().is_empty());
    }

    #[test]
    fn states_are_deduplicated() {
        let machine = MachineBuilder::new()
            .states([q("q0"), q("q1"), q("q0")])
            .state(q("q1"))
            .start(q("q0"))
            .accept(q("q1"))
            .accept(q("q1"))
            .stack_bottom('$')
            .build()
            .unwrap();

        assert_eq!(machine.states(), &[q("q0"), q("q1")]);
        assert_eq!(machine.accept_states(), &[q("q1")]);
    }

    #[test]
    fn fluent_api_builds_lookup() {
        let machine = MachineBuilder::new()
            .states([q("q0"), q("q1")])
            .start(q("q0"))
            .stack_bottom('$')
            .on(q("q0"), 'a', '$', q("q0"), "A$")
            .on(q("q0"), 'a', '$', q("q1"), "$")
            .on_epsilon(q("q1"), '$', q("q0"), "$")
            .build()
            .unwrap();

        let a = Input::Symbol(Symbol::new('a'));
        assert_eq!(machine.transitions_for(&q("q0"), a, Symbol::new('$')).len(), 2);
        assert_eq!(
            machine
                .transitions_for(&q("q1"), Input::Epsilon, Symbol::new('$'))
                .len(),
            1
        );
    }

    #[test]
    fn lenient_build_accepts_undeclared_states() {
        let machine = MachineBuilder::new()
            .start(q("q0"))
            .stack_bottom('$')
            .on(q("q0"), 'a', '$', q("elsewhere"), "$")
            .build();

        assert!(machine.is_ok());
    }

    #[test]
    fn checked_build_reports_violations() {
        let result = MachineBuilder::new()
            .state(q("q0"))
            .start(q("q0"))
            .stack_bottom('$')
            .on(q("q0"), 'a', '$', q("elsewhere"), "")
            .build_checked();

        match result {
            Err(BuildError::Malformed(violations)) => {
                assert_eq!(violations.len(), 2);
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, MachineViolation::UnknownTargetState { .. })));
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, MachineViolation::BottomNotPreserved { .. })));
            }
            other => panic!("Expected malformed machine, got {:?}", other.map(|m| m.rule_count())),
        }
    }

    #[test]
    fn malformed_error_lists_every_violation() {
        let err = BuildError::Malformed(vec![
            MachineViolation::UnknownStartState {
                state: "a".to_string(),
            },
            MachineViolation::UnknownAcceptState {
                state: "b".to_string(),
            },
        ]);

        assert_eq!(
            err.to_string(),
            "Malformed machine definition: Start state 'a' is not a declared state; \
             Accept state 'b' is not a declared state"
        );
    }
}
