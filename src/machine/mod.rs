//! Machine definitions and their construction.
//!
//! A [`Machine`] is pure data: states, start state, accept states, a stack
//! bottom sentinel and a nondeterministic transition relation. It is built
//! once, with [`MachineBuilder`] or by deserializing, and only read
//! afterwards.

mod builder;
mod definition;
mod error;
mod macros;
mod validation;

pub use builder::MachineBuilder;
pub use definition::{Input, Machine, Move, Rule};
pub use error::BuildError;
pub use validation::MachineViolation;

impl<S: crate::core::State> Machine<S> {
    /// Start a new [`MachineBuilder`].
    pub fn builder() -> MachineBuilder<S> {
        MachineBuilder::new()
    }
}
