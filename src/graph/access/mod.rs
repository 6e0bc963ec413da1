//! Traversal primitives shared by the graph implementations.
//!
//! Crate-private: visited sets for index and label keyed searches.

pub(crate) mod visited;
