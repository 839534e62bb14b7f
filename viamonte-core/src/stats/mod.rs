//! Streaming aggregation of trial results

pub mod mean;

pub use mean::Mean;
