//! Immutable pushdown machine definitions.

use crate::core::{render, State, Symbol};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Input component of a transition key.
///
/// `Epsilon` marks a spontaneous move that consumes no input.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(from = "Option<Symbol>", into = "Option<Symbol>")]
pub enum Input {
    Symbol(Symbol),
    Epsilon,
}

impl Input {
    pub fn is_epsilon(self) -> bool {
        matches!(self, Input::Epsilon)
    }
}

impl From<Option<Symbol>> for Input {
    fn from(symbol: Option<Symbol>) -> Self {
        symbol.map_or(Input::Epsilon, Input::Symbol)
    }
}

impl From<Input> for Option<Symbol> {
    fn from(input: Input) -> Self {
        match input {
            Input::Symbol(symbol) => Some(symbol),
            Input::Epsilon => None,
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Symbol(symbol) => write!(f, "{}", symbol),
            Input::Epsilon => f.write_str("ε"),
        }
    }
}

/// One alternative of a transition: the next state and the symbols that
/// replace the popped top, listed top-first.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Move<S: State> {
    pub to: S,
    pub push: Vec<Symbol>,
}

/// Flattened view of a single transition alternative.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Rule<S: State> {
    pub from: S,
    pub input: Input,
    pub top: Symbol,
    pub to: S,
    #[serde(with = "push_string")]
    pub push: Vec<Symbol>,
}

impl<S: State> fmt::Display for Rule<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}) -> ({}, \"{}\")",
            self.from.name(),
            self.input,
            self.top,
            self.to.name(),
            render(&self.push)
        )
    }
}

mod push_string {
    use super::*;

    pub fn serialize<Sr: Serializer>(push: &[Symbol], serializer: Sr) -> Result<Sr::Ok, Sr::Error> {
        serializer.serialize_str(&render(push))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Symbol>, D::Error> {
        let push = String::deserialize(deserializer)?;
        Ok(Symbol::parse(&push))
    }
}

/// Transitions leaving one state, keyed by input and required stack top.
type StateTransitions<S> = HashMap<(Input, Symbol), Vec<Move<S>>>;

/// Immutable description of one nondeterministic pushdown automaton.
///
/// Lookup is the only behavior: the machine never runs itself. A missing
/// transition entry is not an error, it just means that branch of a search
/// dead-ends.
///
/// Construction does not check referential integrity; see
/// [`Machine::validate`] and [`MachineBuilder::build_checked`] for that.
///
/// [`MachineBuilder::build_checked`]: crate::machine::MachineBuilder::build_checked
#[derive(Clone, Debug)]
pub struct Machine<S: State> {
    pub(crate) states: Vec<S>,
    pub(crate) start: S,
    pub(crate) accept_states: Vec<S>,
    pub(crate) stack_bottom: Symbol,
    pub(crate) transitions: HashMap<S, StateTransitions<S>>,
    /// Keys in insertion order, so rules list and serialize stably.
    pub(crate) order: Vec<(S, Input, Symbol)>,
}

impl<S: State> Machine<S> {
    pub(crate) fn new(states: Vec<S>, start: S, accept_states: Vec<S>, stack_bottom: Symbol) -> Self {
        Self {
            states,
            start,
            accept_states,
            stack_bottom,
            transitions: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Add one alternative. Duplicate alternatives under the same key are
    /// dropped.
    pub(crate) fn insert(&mut self, from: S, input: Input, top: Symbol, mv: Move<S>) {
        let moves = self
            .transitions
            .entry(from.clone())
            .or_default()
            .entry((input, top))
            .or_default();
        if moves.is_empty() {
            self.order.push((from, input, top));
        }
        if !moves.contains(&mv) {
            moves.push(mv);
        }
    }

    pub fn states(&self) -> &[S] {
        &self.states
    }

    pub fn start(&self) -> &S {
        &self.start
    }

    pub fn accept_states(&self) -> &[S] {
        &self.accept_states
    }

    pub fn is_accepting(&self, state: &S) -> bool {
        self.accept_states.contains(state)
    }

    pub fn stack_bottom(&self) -> Symbol {
        self.stack_bottom
    }

    /// Alternatives for `(state, input, top)`; empty when there is no entry.
    pub fn transitions_for(&self, state: &S, input: Input, top: Symbol) -> &[Move<S>] {
        self.transitions
            .get(state)
            .and_then(|by_key| by_key.get(&(input, top)))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every alternative as a flat rule, in insertion order.
    pub fn rules(&self) -> impl Iterator<Item = Rule<S>> + '_ {
        self.order.iter().flat_map(move |(from, input, top)| {
            self.transitions_for(from, *input, *top)
                .iter()
                .map(move |mv| Rule {
                    from: from.clone(),
                    input: *input,
                    top: *top,
                    to: mv.to.clone(),
                    push: mv.push.clone(),
                })
        })
    }

    pub fn rule_count(&self) -> usize {
        self.transitions
            .values()
            .flat_map(|by_key| by_key.values())
            .map(Vec::len)
            .sum()
    }
}

/// Serialized form of a machine: the rule list replaces the nested map.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
struct MachineRepr<S: State> {
    states: Vec<S>,
    start: S,
    accept_states: Vec<S>,
    stack_bottom: Symbol,
    rules: Vec<Rule<S>>,
}

impl<S: State> From<&Machine<S>> for MachineRepr<S> {
    fn from(machine: &Machine<S>) -> Self {
        Self {
            states: machine.states.clone(),
            start: machine.start.clone(),
            accept_states: machine.accept_states.clone(),
            stack_bottom: machine.stack_bottom,
            rules: machine.rules().collect(),
        }
    }
}

impl<S: State> From<MachineRepr<S>> for Machine<S> {
    fn from(repr: MachineRepr<S>) -> Self {
        let mut machine = Machine::new(repr.states, repr.start, repr.accept_states, repr.stack_bottom);
        for rule in repr.rules {
            machine.insert(
                rule.from,
                rule.input,
                rule.top,
                Move {
                    to: rule.to,
                    push: rule.push,
                },
            );
        }
        machine
    }
}

impl<S: State> Serialize for Machine<S> {
    fn serialize<Sr: Serializer>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error> {
        MachineRepr::from(self).serialize(serializer)
    }
}

impl<'de, S: State> Deserialize<'de> for Machine<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        MachineRepr::deserialize(deserializer).map(Machine::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateId;

    fn q(name: &str) -> StateId {
        StateId::from(name)
    }

    fn sample() -> Machine<StateId> {
        let mut machine = Machine::new(
            vec![q("q0"), q("qf")],
            q("q0"),
            vec![q("qf")],
            Symbol::new('$'),
        );
        machine.insert(
            q("q0"),
            Input::Symbol(Symbol::new('a')),
            Symbol::new('$'),
            Move {
                to: q("q0"),
                push: Symbol::parse("A$"),
            },
        );
        machine.insert(
            q("q0"),
            Input::Epsilon,
            Symbol::new('$'),
            Move {
                to: q("qf"),
                push: Symbol::parse("$"),
            },
        );
        machine
    }

    #[test]
    fn lookup_returns_alternatives() {
        let machine = sample();
        let moves = machine.transitions_for(&q("q0"), Input::Symbol(Symbol::new('a')), Symbol::new('$'));

        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, q("q0"));
        assert_eq!(moves[0].push, Symbol::parse("A$"));
    }

    #[test]
    fn missing_entry_is_empty_not_error() {
        let machine = sample();

        assert!(machine
            .transitions_for(&q("q0"), Input::Symbol(Symbol::new('b')), Symbol::new('$'))
            .is_empty());
        assert!(machine
            .transitions_for(&q("nowhere"), Input::Epsilon, Symbol::new('$'))
            .is_empty());
    }

    #[test]
    fn duplicate_alternatives_are_dropped() {
        let mut machine = sample();
        machine.insert(
            q("q0"),
            Input::Epsilon,
            Symbol::new('$'),
            Move {
                to: q("qf"),
                push: Symbol::parse("$"),
            },
        );

        assert_eq!(machine.rule_count(), 2);
        assert_eq!(machine.rules().count(), 2);
    }

    #[test]
    fn rules_list_in_insertion_order() {
        let rules: Vec<Rule<StateId>> = sample().rules().collect();

        assert_eq!(rules[0].input, Input::Symbol(Symbol::new('a')));
        assert_eq!(rules[1].input, Input::Epsilon);
        assert_eq!(rules[1].to_string(), "(q0, ε, $) -> (qf, \"$\")");
    }

    #[test]
    fn accepting_states_are_recognized() {
        let machine = sample();
        assert!(machine.is_accepting(&q("qf")));
        assert!(!machine.is_accepting(&q("q0")));
    }

    #[test]
    fn machine_serializes_rules_with_null_epsilon() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["start"], "q0");
        assert_eq!(json["stack_bottom"], "$");
        assert_eq!(json["rules"][0]["input"], "a");
        assert_eq!(json["rules"][0]["push"], "A$");
        assert!(json["rules"][1]["input"].is_null());
    }

    #[test]
    fn machine_json_roundtrip_preserves_lookup() {
        let machine = sample();
        let json = serde_json::to_string(&machine).unwrap();
        let restored: Machine<StateId> = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.rule_count(), machine.rule_count());
        assert_eq!(
            restored.transitions_for(&q("q0"), Input::Epsilon, Symbol::new('$')),
            machine.transitions_for(&q("q0"), Input::Epsilon, Symbol::new('$'))
        );
    }
}
