//! Directed, edge-weighted graph over integer vertices.
//!
//! This module is vertically split:
//! - `storage`: interchangeable dense/sparse edge stores
//! - `traversal`: DFS, BFS, cycle detection and shortest paths
//! - `tests`: module-local tests
//!
//! Vertices are `0..vertex_count()`. Stored weights are strictly positive,
//! self-loops are never stored, and vertices are never removed.

use core::fmt;

use crate::config::{GraphConfig, GrowthPolicy, StorageStrategy};
use crate::error::GraphError;
use crate::weight::Weight;

mod storage;
mod traversal;
#[cfg(test)]
mod tests;

pub use storage::Successors;
pub use traversal::ShortestPaths;

use storage::{DenseMatrix, WeightStore};

/// A directed graph with positive edge weights.
///
/// ### Performance Characteristics
/// | Operation | Dense matrix | Sparse rows |
/// |-----------|--------------|-------------|
/// | `add_vertex` | \(O(1)\) amortized with doubling growth | \(O(1)\) amortized |
/// | `add_edge` / `remove_edge` | \(O(1)\) | \(O(\log d)\) |
/// | `successors` | \(O(V)\) | \(O(d)\) |
/// | `edges` | \(O(V^2)\) | \(O(V + E)\) |
///
/// Invalid mutation requests are ignored: the plain mutators log the reason
/// at `debug` level and return `false`; the `try_` variants return it.
///
/// ```rust
/// use dualgraph::{Distance, DirectedWeightedGraph};
///
/// let g: DirectedWeightedGraph =
///     DirectedWeightedGraph::from_edges([(0, 1, 4), (0, 2, 1), (2, 1, 1)]);
/// assert_eq!(g.dfs(0, None), vec![0, 1, 2]);
/// assert_eq!(
///     g.dijkstra(0),
///     vec![Distance::Finite(0), Distance::Finite(2), Distance::Finite(1)]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct DirectedWeightedGraph<W = i64> {
    store: WeightStore<W>,
}

impl<W: Weight> DirectedWeightedGraph<W> {
    /// Creates an empty graph backed by a dense matrix.
    pub fn new() -> Self {
        Self {
            store: WeightStore::Dense(DenseMatrix::new(GrowthPolicy::default())),
        }
    }

    /// Creates an empty graph with the given storage configuration.
    pub fn with_config(config: GraphConfig) -> Result<Self, GraphError> {
        config.validate()?;
        Ok(Self {
            store: WeightStore::from_config(&config)?,
        })
    }

    /// Builds a dense-matrix graph from `(src, dst, weight)` triples.
    ///
    /// The vertex count is first sized to the largest referenced index plus
    /// one; each edge then goes through [`add_edge`](Self::add_edge), so
    /// self-loops and negative weights are dropped and a zero weight clears
    /// an earlier edge.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::new();
        graph.seed(edges);
        graph
    }

    /// Like [`from_edges`](Self::from_edges) with an explicit storage configuration.
    pub fn from_edges_with_config<I>(edges: I, config: GraphConfig) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::with_config(config)?;
        graph.seed(edges);
        Ok(graph)
    }

    fn seed<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let edges: Vec<_> = edges.into_iter().collect();
        if let Some(max) = edges.iter().map(|&(u, v, _)| u.max(v)).max() {
            while self.vertex_count() <= max {
                if let Err(error) = self.try_add_vertex() {
                    tracing::debug!(max, %error, "seeding stopped growing");
                    break;
                }
            }
        }
        for (src, dst, weight) in edges {
            self.add_edge(src, dst, weight);
        }
    }

    /// Which edge store backs this graph.
    pub fn storage_strategy(&self) -> StorageStrategy {
        self.store.strategy()
    }

    /// Number of vertices the store can hold before growing.
    pub fn vertex_capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.store.order()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Returns `true` if `vertex` is in range.
    #[inline]
    pub fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Adds a vertex with no edges and returns the new vertex count.
    ///
    /// Fails with [`GraphError::CapacityOverflow`] when the store cannot grow;
    /// the graph is then unchanged.
    pub fn try_add_vertex(&mut self) -> Result<usize, GraphError> {
        self.store.push_vertex()?;
        Ok(self.vertex_count())
    }

    /// Adds a vertex with no edges and returns the new vertex count.
    ///
    /// The new vertex's index is `vertex_count() - 1`. If the store cannot
    /// grow, nothing is added and the unchanged count is returned.
    pub fn add_vertex(&mut self) -> usize {
        match self.try_add_vertex() {
            Ok(count) => count,
            Err(error) => {
                tracing::debug!(%error, "ignoring add_vertex");
                self.vertex_count()
            }
        }
    }

    /// Sets the weight of `src -> dst`. A zero weight clears the cell.
    pub fn try_add_edge(&mut self, src: usize, dst: usize, weight: W) -> Result<(), GraphError> {
        self.check_endpoints(src, dst)?;
        if weight < W::zero() {
            return Err(GraphError::NegativeWeight {
                weight: format!("{weight:?}"),
            });
        }
        if weight.is_zero() {
            self.store.clear(src, dst);
        } else {
            self.store.set(src, dst, weight);
        }
        Ok(())
    }

    /// Sets the weight of `src -> dst`, so `0` removes any existing edge.
    ///
    /// Self-loops, out-of-range endpoints and negative weights are ignored.
    /// Returns `true` if the cell was written.
    pub fn add_edge(&mut self, src: usize, dst: usize, weight: W) -> bool {
        match self.try_add_edge(src, dst, weight) {
            Ok(()) => true,
            Err(error) => {
                tracing::debug!(src, dst, %error, "ignoring add_edge");
                false
            }
        }
    }

    /// Removes the edge `src -> dst`.
    pub fn try_remove_edge(&mut self, src: usize, dst: usize) -> Result<(), GraphError> {
        self.check_endpoints(src, dst)?;
        if self.store.clear(src, dst) {
            Ok(())
        } else {
            Err(GraphError::edge_not_found(&src, &dst))
        }
    }

    /// Removes the edge `src -> dst`, ignoring self-loops, out-of-range
    /// endpoints and absent edges. Returns `true` if an edge was removed.
    pub fn remove_edge(&mut self, src: usize, dst: usize) -> bool {
        match self.try_remove_edge(src, dst) {
            Ok(()) => true,
            Err(error) => {
                tracing::debug!(src, dst, %error, "ignoring remove_edge");
                false
            }
        }
    }

    fn check_endpoints(&self, src: usize, dst: usize) -> Result<(), GraphError> {
        if !self.contains_vertex(src) {
            return Err(GraphError::vertex_not_found(&src));
        }
        if !self.contains_vertex(dst) {
            return Err(GraphError::vertex_not_found(&dst));
        }
        if src == dst {
            return Err(GraphError::self_loop(&src));
        }
        Ok(())
    }

    /// Weight of the edge `src -> dst`, if present.
    #[inline]
    pub fn weight(&self, src: usize, dst: usize) -> Option<W> {
        if self.contains_vertex(src) && self.contains_vertex(dst) {
            self.store.get(src, dst)
        } else {
            None
        }
    }

    /// Returns `true` if the edge `src -> dst` exists.
    #[inline]
    pub fn has_edge(&self, src: usize, dst: usize) -> bool {
        self.weight(src, dst).is_some()
    }

    /// Outgoing `(target, weight)` pairs of `vertex` in ascending target order.
    ///
    /// Empty if `vertex` is out of range.
    pub fn successors(&self, vertex: usize) -> Successors<'_, W> {
        if self.contains_vertex(vertex) {
            self.store.successors(vertex)
        } else {
            Successors::Empty
        }
    }

    /// All vertices, in index order.
    pub fn vertices(&self) -> Vec<usize> {
        (0..self.vertex_count()).collect()
    }

    /// All edges as `(src, dst, weight)`, in row-major order.
    pub fn edges(&self) -> Vec<(usize, usize, W)> {
        (0..self.vertex_count())
            .flat_map(|src| self.store.successors(src).map(move |(dst, w)| (src, dst, w)))
            .collect()
    }

    /// Returns `true` if every consecutive pair of `path` is an edge.
    ///
    /// Empty and single-vertex paths are always valid.
    pub fn is_valid_path(&self, path: &[usize]) -> bool {
        path.windows(2).all(|hop| self.has_edge(hop[0], hop[1]))
    }
}

impl<W: Weight> Default for DirectedWeightedGraph<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Weight> FromIterator<(usize, usize, W)> for DirectedWeightedGraph<W> {
    fn from_iter<I: IntoIterator<Item = (usize, usize, W)>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl<W: Weight> Extend<(usize, usize, W)> for DirectedWeightedGraph<W> {
    /// Adds each edge, growing the vertex count to cover referenced indices.
    fn extend<I: IntoIterator<Item = (usize, usize, W)>>(&mut self, iter: I) {
        self.seed(iter);
    }
}

impl<W: Weight> fmt::Display for DirectedWeightedGraph<W> {
    /// Renders the weight matrix with two-wide columns.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.vertex_count();
        if n == 0 {
            return writeln!(f, "EMPTY GRAPH");
        }

        writeln!(f, "GRAPH ({n} vertices):")?;
        let header: Vec<String> = (0..n).map(|i| format!("{i:2}")).collect();
        writeln!(f, "   |{}", header.join(" "))?;
        writeln!(f, "{}", "-".repeat(n * 3 + 3))?;
        for src in 0..n {
            let row: Vec<String> = (0..n)
                .map(|dst| format!("{:2}", self.store.get(src, dst).unwrap_or_else(W::zero)))
                .collect();
            writeln!(f, "{src:2} |{}", row.join(" "))?;
        }
        Ok(())
    }
}
