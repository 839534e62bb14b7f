// Re-export key components
pub use crate::collections::MinHeap;
pub use crate::error::Error;
pub use crate::loading::{Scenario, read_scenario};
pub use crate::model::{EdgeWeight, Graph, Node, SpeedSampling, Street, StreetCost, StreetNetwork};
pub use crate::routing::shortest_path;
pub use crate::simulation::{Execution, RankedPath, SimulationConfig, run_simulation};
pub use crate::stats::Mean;
