use crate::model::SpeedSampling;

/// How the independent trials are executed.
///
/// Trials never share mutable state, so the parallel mode is a plain
/// unordered fan-out; result ordering is irrelevant to aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Execution {
    /// One trial after another on the calling thread, deterministic order
    Sequential,
    /// Rayon worker pool fan-out, completion order nondeterministic
    Parallel {
        /// Worker threads in the dedicated pool
        workers: usize,
        /// Minimum number of trials handed to a worker at once
        batch: usize,
    },
}

impl Default for Execution {
    fn default() -> Self {
        Execution::Parallel {
            workers: 8,
            batch: 10,
        }
    }
}

/// Settings for one simulation run
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub trials: usize,
    pub execution: Execution,
    pub sampling: SpeedSampling,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            trials: 100,
            execution: Execution::default(),
            sampling: SpeedSampling::default(),
        }
    }
}

impl SimulationConfig {
    pub fn new(trials: usize) -> Self {
        SimulationConfig {
            trials,
            ..SimulationConfig::default()
        }
    }
}
