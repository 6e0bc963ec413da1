//! Storage configuration for [`DirectedWeightedGraph`](crate::DirectedWeightedGraph).
//!
//! ```rust
//! use dualgraph::{GraphConfig, GrowthPolicy, StorageStrategy};
//!
//! let config = GraphConfig::from_json(r#"{ "storage": "sparse_list" }"#).unwrap();
//! assert_eq!(config.storage, StorageStrategy::SparseList);
//! assert_eq!(config.growth, GrowthPolicy::Doubling);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Largest `initial_capacity` accepted by [`GraphConfig::validate`].
///
/// A dense matrix reserves `capacity * capacity` cells up front; at this
/// bound that is 16M cells. Graphs may still grow past it one
/// [`add_vertex`](crate::DirectedWeightedGraph::add_vertex) at a time.
pub const MAX_INITIAL_CAPACITY: usize = 1 << 12;

/// Backing store for a directed graph's edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageStrategy {
    /// Row-major `V x V` weight matrix. O(1) edge lookup, O(V) successor scans.
    #[default]
    DenseMatrix,
    /// One ordered map of `target -> weight` per vertex. O(log d) lookup,
    /// O(d) successor scans.
    SparseList,
}

/// How a dense matrix grows its vertex capacity when full.
///
/// Growing re-lays every row, so the policy decides how often that happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthPolicy {
    /// Grow capacity by exactly one vertex (re-layout on every `add_vertex`).
    Exact,
    /// Double capacity (amortized O(1) re-layouts per vertex).
    #[default]
    Doubling,
    /// Grow capacity by a fixed number of vertices.
    Chunked(usize),
}

impl GrowthPolicy {
    /// Capacity to grow to when `current` is exhausted.
    pub(crate) fn next_capacity(self, current: usize) -> usize {
        match self {
            GrowthPolicy::Exact => current.saturating_add(1),
            GrowthPolicy::Doubling => current.saturating_mul(2).max(4),
            GrowthPolicy::Chunked(step) => current.saturating_add(step.max(1)),
        }
    }
}

/// Construction options for a directed graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    /// Edge storage layout.
    pub storage: StorageStrategy,
    /// Dense matrix growth rule. Ignored by [`StorageStrategy::SparseList`].
    pub growth: GrowthPolicy,
    /// Number of vertices to reserve space for up front, at most
    /// [`MAX_INITIAL_CAPACITY`].
    pub initial_capacity: usize,
}

impl GraphConfig {
    /// A dense-matrix configuration with default growth.
    pub fn dense() -> Self {
        Self::default()
    }

    /// A sparse adjacency-row configuration.
    pub fn sparse() -> Self {
        Self {
            storage: StorageStrategy::SparseList,
            ..Self::default()
        }
    }

    /// Sets the growth policy.
    #[must_use]
    pub fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    /// Sets the initial vertex capacity.
    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Parses and validates a JSON configuration. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GraphError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration is usable.
    pub fn validate(&self) -> Result<(), GraphError> {
        if let GrowthPolicy::Chunked(0) = self.growth {
            return Err(GraphError::InvalidConfig(
                "chunked growth step must be greater than zero".to_string(),
            ));
        }
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(GraphError::InvalidConfig(format!(
                "initial_capacity {} exceeds the maximum of {MAX_INITIAL_CAPACITY}",
                self.initial_capacity
            )));
        }
        Ok(())
    }
}
