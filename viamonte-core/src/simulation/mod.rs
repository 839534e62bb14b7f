//! Monte Carlo orchestration: many independent randomized trials over the
//! same street network template, merged into a ranking of the most
//! likely-best paths

pub mod config;
pub mod monte_carlo;

pub use config::{Execution, SimulationConfig};
pub use monte_carlo::{RankedPath, run_simulation};
