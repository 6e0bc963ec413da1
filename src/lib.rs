//! # `dualgraph` - Directed Weighted and Undirected Labelled Graphs
//!
//! Two independent, in-memory graph representations with a shared
//! algorithmic surface:
//!
//! - [`DirectedWeightedGraph`]: vertices are `usize` indices, edges are
//!   single-directional with strictly positive weights; setting a weight of
//!   `0` removes the edge. Backed by a dense adjacency matrix or sparse
//!   ordered rows, chosen through [`GraphConfig`].
//! - [`UndirectedGraph`]: vertices are arbitrary labels (`String` by
//!   default), edges are unweighted and symmetric.
//!
//! ## Algorithms
//!
//! | Algorithm | Directed | Undirected |
//! |-----------|----------|------------|
//! | `dfs` / `bfs` with optional target | yes | yes |
//! | `is_valid_path` | yes | yes |
//! | `has_cycle` | gray/black back-edge DFS | parent-aware DFS |
//! | `dijkstra` / `shortest_paths` | yes | - |
//! | `count_connected_components` | - | yes |
//!
//! Searches are deterministic: the smallest successor (by index or by
//! label `Ord`) is always explored first.
//!
//! ## Invalid input
//!
//! Nothing panics on bad input. Mutators ignore invalid requests (self-loops,
//! unknown vertices, negative weights, duplicates, removing something
//! absent), log the reason at `debug` level through `tracing`, and return
//! `false`. Every mutator has a `try_` twin returning [`GraphError`].
//! Lookups on absent vertices return empty, `false` or
//! [`Distance::Infinite`] results.
//!
//! ## Example
//!
//! ```rust
//! use dualgraph::{DirectedWeightedGraph, Distance, UndirectedGraph};
//!
//! let mut roads: DirectedWeightedGraph =
//!     DirectedWeightedGraph::from_edges([(0, 1, 4), (0, 2, 1)]);
//! roads.add_edge(2, 1, 1);
//! assert!(!roads.add_edge(1, 1, 3)); // self-loop, ignored
//! assert_eq!(roads.dijkstra(0)[1], Distance::Finite(2));
//!
//! let friends: UndirectedGraph = UndirectedGraph::from_edges([("ann", "bob"), ("bob", "cy")]);
//! assert_eq!(friends.bfs("cy", None), vec!["cy", "bob", "ann"]);
//! assert!(!friends.has_cycle());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod graph;
pub mod weight;

pub use config::{GraphConfig, GrowthPolicy, StorageStrategy, MAX_INITIAL_CAPACITY};
pub use error::GraphError;
pub use graph::{DirectedWeightedGraph, ShortestPaths, Successors, UndirectedGraph};
pub use weight::{Distance, Weight};
