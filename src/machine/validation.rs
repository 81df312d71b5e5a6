//! Structural validation of machine definitions.
//!
//! Validation uses Stillwater's `Validation` type so that a malformed
//! definition reports every violation at once rather than the first one.

use super::definition::{Machine, Rule};
use crate::core::{render, State};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A structural defect in a machine definition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineViolation {
    #[error("Start state '{state}' is not a declared state")]
    UnknownStartState { state: String },

    #[error("Accept state '{state}' is not a declared state")]
    UnknownAcceptState { state: String },

    #[error("Rule {rule} leaves undeclared state '{state}'")]
    UnknownSourceState { state: String, rule: String },

    #[error("Rule {rule} enters undeclared state '{state}'")]
    UnknownTargetState { state: String, rule: String },

    #[error("Rule {rule} pops the stack bottom '{bottom}' without restoring it last (push: \"{push}\")")]
    BottomNotPreserved {
        bottom: char,
        push: String,
        rule: String,
    },
}

type Check = Validation<(), NonEmptyVec<MachineViolation>>;

fn require(ok: bool, violation: impl FnOnce() -> MachineViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

fn check_rule<S: State>(machine: &Machine<S>, rule: &Rule<S>) -> Vec<Check> {
    let bottom = machine.stack_bottom();
    let declared = |state: &S| machine.states().contains(state);

    let mut checks = vec![
        require(declared(&rule.from), || MachineViolation::UnknownSourceState {
            state: rule.from.name().to_string(),
            rule: rule.to_string(),
        }),
        require(declared(&rule.to), || MachineViolation::UnknownTargetState {
            state: rule.to.name().to_string(),
            rule: rule.to_string(),
        }),
    ];

    if rule.top == bottom {
        checks.push(require(rule.push.last() == Some(&bottom), || {
            MachineViolation::BottomNotPreserved {
                bottom: bottom.as_char(),
                push: render(&rule.push),
                rule: rule.to_string(),
            }
        }));
    }

    checks
}

impl<S: State> Machine<S> {
    /// Check referential integrity of every state and that every rule on
    /// the stack bottom puts the bottom back as its last pushed symbol.
    ///
    /// Accumulates ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<MachineViolation>> {
        let mut checks: Vec<Check> = Vec::new();

        checks.push(require(self.states().contains(self.start()), || {
            MachineViolation::UnknownStartState {
                state: self.start().name().to_string(),
            }
        }));

        for accept in self.accept_states() {
            checks.push(require(self.states().contains(accept), || {
                MachineViolation::UnknownAcceptState {
                    state: accept.name().to_string(),
                }
            }));
        }

        for rule in self.rules() {
            checks.extend(check_rule(self, &rule));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// All violations as a plain list; empty when the machine is well formed.
    pub fn violations(&self) -> Vec<MachineViolation> {
        match self.validate() {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{StateId, Symbol};
    use crate::machine::MachineBuilder;

    fn q(name: &str) -> StateId {
        StateId::from(name)
    }

    #[test]
    fn well_formed_machine_validates() {
        let machine = MachineBuilder::new()
            .states([q("q0"), q("qf")])
            .start(q("q0"))
            .accept(q("qf"))
            .stack_bottom('$')
            .on(q("q0"), 'a', '$', q("q0"), "A$")
            .on(q("q0"), 'b', 'A', q("q0"), "")
            .on_epsilon(q("q0"), '$', q("qf"), "$")
            .build()
            .unwrap();

        assert!(machine.validate().is_success());
        assert!(machine.violations().is_empty());
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let machine = MachineBuilder::new()
            .states([q("q0")])
            .start(q("s"))
            .accept(q("qf"))
            .stack_bottom('$')
            .on(q("q9"), 'a', 'A', q("q0"), "")
            .on_epsilon(q("q0"), '$', q("qx"), "")
            .build()
            .unwrap();

        match machine.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 5);

                let has = |f: fn(&MachineViolation) -> bool| errors.iter().any(f);
                assert!(has(|e| matches!(e, MachineViolation::UnknownStartState { .. })));
                assert!(has(|e| matches!(e, MachineViolation::UnknownAcceptState { .. })));
                assert!(has(|e| matches!(e, MachineViolation::UnknownSourceState { .. })));
                assert!(has(|e| matches!(e, MachineViolation::UnknownTargetState { .. })));
                assert!(has(|e| matches!(e, MachineViolation::BottomNotPreserved { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn bottom_must_be_restored_last() {
        let machine = MachineBuilder::new()
            .states([q("q0")])
            .start(q("q0"))
            .stack_bottom('$')
            .on(q("q0"), 'a', '$', q("q0"), "$A")
            .build()
            .unwrap();

        let violations = machine.violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0],
            MachineViolation::BottomNotPreserved {
                bottom: '$',
                push: "$A".to_string(),
                rule: "(q0, a, $) -> (q0, \"$A\")".to_string(),
            }
        );
    }

    #[test]
    fn rules_on_other_tops_may_pop_freely() {
        let machine = MachineBuilder::new()
            .states([q("q0")])
            .start(q("q0"))
            .stack_bottom(Symbol::new('$'))
            .on(q("q0"), 'b', 'A', q("q0"), "")
            .build()
            .unwrap();

        assert!(machine.validate().is_success());
    }

    #[test]
    fn violation_messages_name_the_state() {
        let violation = MachineViolation::UnknownStartState {
            state: "s".to_string(),
        };
        assert_eq!(violation.to_string(), "Start state 's' is not a declared state");
    }
}
