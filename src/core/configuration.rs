//! Instantaneous machine configurations.

use super::state::State;
use super::symbol::{Stack, Symbol};

/// Snapshot of a running machine: current state, input consumed so far,
/// and stack contents.
///
/// Configurations are immutable values. Equality and hashing are
/// structural over all three fields, which is what the search uses to
/// deduplicate the configuration graph.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Configuration<S: State> {
    pub state: S,
    pub position: usize,
    pub stack: Stack,
}

impl<S: State> Configuration<S> {
    /// Starting configuration: `start` state, nothing consumed, stack
    /// holding only `bottom`.
    pub fn initial(start: S, bottom: Symbol) -> Self {
        Self {
            state: start,
            position: 0,
            stack: Stack::with_bottom(bottom),
        }
    }

    /// Derive the successor reached by replacing the top of the stack with
    /// `push` and moving to `next`.
    ///
    /// `consumed` advances the position by one; spontaneous moves leave it
    /// unchanged.
    pub fn apply(&self, next: &S, push: &[Symbol], consumed: bool) -> Self {
        Self {
            state: next.clone(),
            position: self.position + usize::from(consumed),
            stack: self.stack.replace_top(push),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateId;

    #[test]
    fn initial_configuration_has_only_bottom() {
        let config = Configuration::initial(StateId::from("q0"), Symbol::new('$'));

        assert_eq!(config.state, StateId::from("q0"));
        assert_eq!(config.position, 0);
        assert!(config.stack.is_exactly(Symbol::new('$')));
    }

    #[test]
    fn consuming_move_advances_position() {
        let config = Configuration::initial(StateId::from("q0"), Symbol::new('$'));
        let next = config.apply(&StateId::from("q0"), &Symbol::parse("A$"), true);

        assert_eq!(next.position, 1);
        assert_eq!(next.stack.to_string(), "A$");
    }

    #[test]
    fn spontaneous_move_keeps_position() {
        let config = Configuration::initial(StateId::from("q1"), Symbol::new('$'));
        let next = config.apply(&StateId::from("qf"), &Symbol::parse("$"), false);

        assert_eq!(next.position, 0);
        assert_eq!(next.state, StateId::from("qf"));
        assert_eq!(next.stack, config.stack);
    }

    #[test]
    fn apply_leaves_original_untouched() {
        let config = Configuration::initial(StateId::from("q0"), Symbol::new('$'));
        let _ = config.apply(&StateId::from("q1"), &[], true);

        assert_eq!(config.position, 0);
        assert_eq!(config.stack.len(), 1);
    }

    #[test]
    fn equality_is_structural() {
        let a = Configuration::initial(StateId::from("q0"), Symbol::new('$'))
            .apply(&StateId::from("q0"), &Symbol::parse("A$"), true);
        let b = Configuration {
            state: StateId::from("q0"),
            position: 1,
            stack: Stack::from_top_first(&Symbol::parse("A$")),
        };

        assert_eq!(a, b);
    }
}
