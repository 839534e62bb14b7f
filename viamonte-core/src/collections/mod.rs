//! Generic containers used by the routing algorithms

pub mod min_heap;

pub use min_heap::MinHeap;
