//! Widepath Core Library
//!
//! Maximum-bandwidth (widest) path algorithms on weighted undirected graphs,
//! with three interchangeable solvers whose answers can be cross-checked.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod heap;
pub mod logging;
pub mod path;
pub mod spanning;
pub mod traversal;
pub mod union_find;
pub mod verify;
pub mod widest;

pub use algorithm::Algorithm;
pub use error::{Result, WidepathError};
pub use graph::Graph;
pub use path::WidestPath;
pub use spanning::MaxSpanningTree;
pub use widest::{WidestPathArrayScan, WidestPathHeap};
