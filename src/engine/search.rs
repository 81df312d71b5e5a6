//! Bounded breadth-first search over machine configurations.

use super::config::SimulationConfig;
use super::outcome::{Outcome, RejectReason, SearchStats, Simulation};
use crate::core::{Configuration, State, Symbol, Trace};
use crate::machine::{Input, Machine};
use std::collections::{HashSet, VecDeque};
use tracing::{debug, trace};

/// A discovered configuration and the index of the node it was derived
/// from. The initial node has no parent.
struct Node<S: State> {
    config: Configuration<S>,
    parent: Option<usize>,
}

/// Runs a machine against input strings.
///
/// Each run owns its worklist and visited set; the machine is only read,
/// so one simulator (or many) can be used from several threads at once.
///
/// # Example
///
/// ```rust
/// use pushdown::core::StateId;
/// use pushdown::engine::{RejectReason, SimulationConfig, Simulator};
/// use pushdown::machine::MachineBuilder;
///
/// let machine = MachineBuilder::new()
///     .states([StateId::from("q0"), StateId::from("qf")])
///     .start(StateId::from("q0"))
///     .accept(StateId::from("qf"))
///     .stack_bottom('$')
///     .on(StateId::from("q0"), 'a', '$', StateId::from("q0"), "$")
///     .on_epsilon(StateId::from("q0"), '$', StateId::from("qf"), "$")
///     .build()
///     .unwrap();
///
/// let simulator = Simulator::new(&machine).with_config(SimulationConfig::with_budget(100));
///
/// let run = simulator.run("aaa");
/// assert!(run.outcome.is_accepted());
/// assert_eq!(run.outcome.trace().unwrap().len(), 5);
///
/// let run = simulator.run("ab");
/// assert_eq!(run.outcome.reason(), Some(RejectReason::Exhausted));
/// ```
pub struct Simulator<'m, S: State> {
    machine: &'m Machine<S>,
    config: SimulationConfig,
}

impl<'m, S: State> Simulator<'m, S> {
    pub fn new(machine: &'m Machine<S>) -> Self {
        Self {
            machine,
            config: SimulationConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Decide whether `input` is accepted.
    ///
    /// Configurations are expanded in FIFO order and each distinct
    /// configuration at most once. The run ends at the first dequeued
    /// configuration that is accepting, when the worklist empties, or when
    /// the number of dequeued configurations exceeds the step budget,
    /// whichever comes first.
    pub fn run(&self, input: &str) -> Simulation<S> {
        let input = Symbol::parse(input);
        let budget = self.config.step_budget;
        debug!(input_len = input.len(), budget, "starting simulation");

        let initial = Configuration::initial(self.machine.start().clone(), self.machine.stack_bottom());
        let mut stats = SearchStats {
            discovered: 1,
            max_frontier: 1,
            max_stack_depth: initial.stack.len(),
            ..SearchStats::default()
        };
        let mut visited: HashSet<Configuration<S>> = HashSet::new();
        visited.insert(initial.clone());
        let mut nodes = vec![Node {
            config: initial,
            parent: None,
        }];
        let mut worklist: VecDeque<usize> = VecDeque::from([0]);

        while let Some(index) = worklist.pop_front() {
            stats.dequeued += 1;
            if stats.dequeued > budget {
                debug!(?stats, "step budget exceeded");
                return Simulation {
                    outcome: Outcome::Rejected(RejectReason::Timeout),
                    stats,
                };
            }

            let current = &nodes[index].config;
            if self.is_accepting(current, input.len()) {
                debug!(?stats, "input accepted");
                let trace = Trace::new(input, reconstruct(&nodes, index));
                return Simulation {
                    outcome: Outcome::Accepted(trace),
                    stats,
                };
            }

            let successors = self.successors(current, &input);
            trace!(
                state = current.state.name(),
                position = current.position,
                stack = %current.stack,
                successors = successors.len(),
                "expanded configuration"
            );

            for successor in successors {
                if visited.contains(&successor) {
                    continue;
                }
                visited.insert(successor.clone());
                stats.discovered += 1;
                stats.max_stack_depth = stats.max_stack_depth.max(successor.stack.len());
                nodes.push(Node {
                    config: successor,
                    parent: Some(index),
                });
                worklist.push_back(nodes.len() - 1);
            }
            stats.max_frontier = stats.max_frontier.max(worklist.len());
        }

        debug!(?stats, "configuration space exhausted");
        Simulation {
            outcome: Outcome::Rejected(RejectReason::Exhausted),
            stats,
        }
    }

    /// Accepting means: accept state, all input consumed, and the stack
    /// reduced to exactly the bottom sentinel.
    fn is_accepting(&self, config: &Configuration<S>, input_len: usize) -> bool {
        self.machine.is_accepting(&config.state)
            && config.position == input_len
            && config.stack.is_exactly(self.machine.stack_bottom())
    }

    /// Every configuration one move away: consuming moves on the next input
    /// symbol first, then spontaneous moves. An empty stack has none.
    fn successors(&self, config: &Configuration<S>, input: &[Symbol]) -> Vec<Configuration<S>> {
        let Some(top) = config.stack.top() else {
            return Vec::new();
        };

        let mut next = Vec::new();
        if let Some(&symbol) = input.get(config.position) {
            let moves = self
                .machine
                .transitions_for(&config.state, Input::Symbol(symbol), top);
            next.extend(moves.iter().map(|mv| config.apply(&mv.to, &mv.push, true)));
        }

        let moves = self.machine.transitions_for(&config.state, Input::Epsilon, top);
        next.extend(moves.iter().map(|mv| config.apply(&mv.to, &mv.push, false)));
        next
    }
}

/// Walk parent links back from `index` and return the path in forward
/// order.
fn reconstruct<S: State>(nodes: &[Node<S>], index: usize) -> Vec<Configuration<S>> {
    let mut path = Vec::new();
    let mut current = Some(index);

    while let Some(i) = current {
        path.push(nodes[i].config.clone());
        current = nodes[i].parent;
    }

    path.reverse();
    path
}

/// Run `machine` on `input` with the given step budget.
pub fn simulate<S: State>(machine: &Machine<S>, input: &str, step_budget: usize) -> Outcome<S> {
    Simulator::new(machine)
        .with_config(SimulationConfig::with_budget(step_budget))
        .run(input)
        .outcome
}
