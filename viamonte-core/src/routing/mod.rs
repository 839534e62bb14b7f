//! Shortest-path search over the weighted graph

pub mod dijkstra;

pub use dijkstra::shortest_path;
