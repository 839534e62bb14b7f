//! Monte Carlo travel-time estimation over a street network.
//!
//! A template [`Graph`] of [`Street`] weights is built once (usually via
//! [`loading::read_scenario`]); each trial samples a plausible current
//! speed for every street, runs a shortest-path search and the outcomes
//! are merged into a ranking of the most likely-best paths by mean travel
//! time.

pub mod collections;
pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;
pub mod simulation;
pub mod stats;

pub use error::Error;
pub use model::{EdgeWeight, Graph, Node, SpeedSampling, Street, StreetCost, StreetNetwork};
pub use routing::shortest_path;
pub use simulation::{Execution, RankedPath, SimulationConfig, run_simulation};
pub use stats::Mean;
