//! Rejection reasons for graph mutations and configuration.
//!
//! The plain mutators (`add_edge`, `remove_edge`, ...) never surface these:
//! they log the rejection and report `false`. The `try_` variants return them
//! so callers that care can see why a request was ignored.

use core::fmt::Debug;

use thiserror::Error;

/// Why a graph request was not applied.
///
/// Vertex identifiers are carried in their `Debug` rendering so the error
/// type stays independent of the graph's label and weight types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Both endpoints of an edge request are the same vertex.
    #[error("self-loop on vertex {vertex} is not allowed")]
    SelfLoop {
        /// The repeated endpoint.
        vertex: String,
    },

    /// An endpoint does not exist in the graph.
    #[error("vertex {vertex} does not exist")]
    VertexNotFound {
        /// The missing vertex.
        vertex: String,
    },

    /// A directed edge was requested with a negative weight.
    #[error("edge weight must not be negative, got {weight}")]
    NegativeWeight {
        /// The rejected weight.
        weight: String,
    },

    /// A directed graph cannot grow its storage to the requested vertex capacity.
    #[error("cannot reserve storage for {capacity} vertices")]
    CapacityOverflow {
        /// The vertex capacity that could not be reserved.
        capacity: usize,
    },

    /// The undirected edge is already present.
    #[error("edge {u} -- {v} already exists")]
    DuplicateEdge {
        /// First endpoint.
        u: String,
        /// Second endpoint.
        v: String,
    },

    /// The edge to remove is not present.
    #[error("edge {u} -- {v} does not exist")]
    EdgeNotFound {
        /// First endpoint.
        u: String,
        /// Second endpoint.
        v: String,
    },

    /// A `GraphConfig` could not be parsed or failed validation.
    #[error("invalid graph configuration: {0}")]
    InvalidConfig(String),
}

impl GraphError {
    pub(crate) fn self_loop<T: Debug + ?Sized>(vertex: &T) -> Self {
        Self::SelfLoop {
            vertex: format!("{vertex:?}"),
        }
    }

    pub(crate) fn vertex_not_found<T: Debug + ?Sized>(vertex: &T) -> Self {
        Self::VertexNotFound {
            vertex: format!("{vertex:?}"),
        }
    }

    pub(crate) fn duplicate_edge<T: Debug + ?Sized>(u: &T, v: &T) -> Self {
        Self::DuplicateEdge {
            u: format!("{u:?}"),
            v: format!("{v:?}"),
        }
    }

    pub(crate) fn edge_not_found<T: Debug + ?Sized>(u: &T, v: &T) -> Self {
        Self::EdgeNotFound {
            u: format!("{u:?}"),
            v: format!("{v:?}"),
        }
    }
}
