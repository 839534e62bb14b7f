//! Data model: the generic weighted graph and the street weights layered
//! on top of it

pub mod graph;
pub mod network;
pub mod street;
pub mod weight;

pub use graph::{Graph, Node};
pub use network::StreetNetwork;
pub use street::{SpeedSampling, Street, StreetCost};
pub use weight::EdgeWeight;
