//! Graph representations and their traversals.
//!
//! The two graphs share no state and no code paths beyond the visited sets
//! in `access`:
//! - `directed`: integer vertices, positive weights, dense or sparse storage
//! - `undirected`: labelled vertices, unweighted symmetric edges

pub mod directed;
pub mod undirected;
pub(crate) mod access;

pub use directed::{DirectedWeightedGraph, ShortestPaths, Successors};
pub use undirected::UndirectedGraph;
