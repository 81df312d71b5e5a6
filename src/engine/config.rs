//! Simulation settings.

use serde::{Deserialize, Serialize};

/// Step budget used when the caller does not pick one.
pub const DEFAULT_STEP_BUDGET: usize = 10_000;

/// Settings for one simulation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Maximum number of configurations dequeued before the run times out.
    ///
    /// The reachable configuration space can be infinite when spontaneous
    /// moves push without consuming input, so this bound is always applied.
    pub step_budget: usize,
}

impl SimulationConfig {
    pub fn with_budget(step_budget: usize) -> Self {
        Self { step_budget }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::with_budget(DEFAULT_STEP_BUDGET)
    }
}
