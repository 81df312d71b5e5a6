//! State identifiers for pushdown machines.
//!
//! The engine treats states as opaque values: it only compares, hashes and
//! clones them. Anything that satisfies the `State` trait can name the
//! states of a machine, from a hand-written enum to a string loaded at
//! runtime.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::hash::Hash;

/// Trait for the state identifiers of a machine.
///
/// All methods are pure. States are immutable values; the engine derives
/// new configurations around them but never mutates one in place.
///
/// # Required Traits
///
/// - `Clone`: states are copied into every derived configuration
/// - `Eq` + `Hash`: configurations are deduplicated structurally
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: machines and traces are serializable
///
/// # Example
///
/// ```rust
/// use pushdown::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Phase {
///     Reading,
///     Matching,
///     Done,
/// }
///
/// impl State for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::Reading => "reading",
///             Self::Matching => "matching",
///             Self::Done => "done",
///         }
///     }
/// }
///
/// assert_eq!(Phase::Matching.name(), "matching");
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display in traces and reports.
    fn name(&self) -> &str;
}

/// Opaque string state identifier.
///
/// Used by machines whose states are only known at runtime, such as
/// definitions loaded from a snapshot.
#[derive(Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(String);

impl StateId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl State for StateId {
    fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StateId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for StateId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
