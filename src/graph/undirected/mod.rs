//! Undirected, unweighted graph over arbitrary vertex labels.
//!
//! This module is vertically split:
//! - `traversal`: DFS, BFS, cycle detection and connected components
//! - `tests`: module-local tests
//!
//! Adjacency is symmetric and duplicate-free and self-loops are never stored.
//! Vertices iterate in insertion order.

use core::borrow::Borrow;
use core::fmt;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::error::GraphError;

mod traversal;

/// Lines shorter than this render on a single line.
const INLINE_RENDER_WIDTH: usize = 70;

/// An undirected graph keyed by vertex labels.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | Hash insert plus order append |
/// | `add_edge` | \(O(d)\) | Duplicate check on both neighbor lists |
/// | `remove_edge` | \(O(d)\) | Linear scan of both neighbor lists |
/// | `remove_vertex` | \(O(V + d^2)\) | Order scan plus each neighbor's list |
/// | `edges` | \(O(V + E)\) | Each edge reported once |
///
/// ```rust
/// use dualgraph::UndirectedGraph;
///
/// let g: UndirectedGraph = UndirectedGraph::from_edges([("A", "B"), ("C", "D")]);
/// assert_eq!(g.count_connected_components(), 2);
/// assert_eq!(g.dfs("A", None), vec!["A".to_string(), "B".to_string()]);
/// ```
#[derive(Clone, Debug)]
pub struct UndirectedGraph<L = String> {
    adjacency: HashMap<L, Vec<L>>,
    order: Vec<L>,
}

impl<L> UndirectedGraph<L>
where
    L: Clone + Ord + Hash + fmt::Debug,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Builds a graph from `(u, v)` pairs, each added through
    /// [`add_edge`](Self::add_edge). Self-loops and duplicates are dropped.
    pub fn from_edges<I, A, B>(edges: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<L>,
        B: Into<L>,
    {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns `true` if `vertex` is in the graph.
    #[inline]
    pub fn contains_vertex<Q>(&self, vertex: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adjacency.contains_key(vertex)
    }

    /// Neighbors of `vertex` in insertion order; empty if absent.
    pub fn neighbors<Q>(&self, vertex: &Q) -> &[L]
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns `true` if `u` and `v` are adjacent.
    pub fn has_edge<Q>(&self, u: &Q, v: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.neighbors(u).iter().any(|n| Borrow::<Q>::borrow(n) == v)
    }

    /// Adds a vertex with no edges. Returns `false` if it already existed.
    pub fn add_vertex(&mut self, vertex: impl Into<L>) -> bool {
        let vertex = vertex.into();
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.order.push(vertex.clone());
        self.adjacency.insert(vertex, Vec::new());
        true
    }

    /// Adds the edge `u -- v`, creating missing endpoints.
    pub fn try_add_edge(&mut self, u: impl Into<L>, v: impl Into<L>) -> Result<(), GraphError> {
        let (u, v) = (u.into(), v.into());
        if u == v {
            return Err(GraphError::self_loop(&u));
        }
        if self.has_edge(&u, &v) {
            return Err(GraphError::duplicate_edge(&u, &v));
        }
        self.add_vertex(u.clone());
        self.add_vertex(v.clone());
        self.link(&u, v.clone());
        self.link(&v, u);
        Ok(())
    }

    fn link(&mut self, from: &L, to: L) {
        if let Some(list) = self.adjacency.get_mut(from) {
            if !list.contains(&to) {
                list.push(to);
            }
        }
    }

    /// Adds the edge `u -- v`, creating missing endpoints.
    ///
    /// Self-loops and existing edges are ignored. Returns `true` if the edge
    /// was added.
    pub fn add_edge(&mut self, u: impl Into<L>, v: impl Into<L>) -> bool {
        match self.try_add_edge(u, v) {
            Ok(()) => true,
            Err(error) => {
                tracing::debug!(%error, "ignoring add_edge");
                false
            }
        }
    }

    /// Removes the edge `u -- v`, keeping both vertices.
    pub fn try_remove_edge<Q>(&mut self, u: &Q, v: &Q) -> Result<(), GraphError>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        if !self.contains_vertex(u) {
            return Err(GraphError::vertex_not_found(u));
        }
        if !self.contains_vertex(v) {
            return Err(GraphError::vertex_not_found(v));
        }
        if !self.has_edge(u, v) {
            return Err(GraphError::edge_not_found(u, v));
        }
        Self::unlink(&mut self.adjacency, u, v);
        Self::unlink(&mut self.adjacency, v, u);
        Ok(())
    }

    fn unlink<Q>(adjacency: &mut HashMap<L, Vec<L>>, from: &Q, to: &Q)
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if let Some(list) = adjacency.get_mut(from) {
            list.retain(|n| Borrow::<Q>::borrow(n) != to);
        }
    }

    /// Removes the edge `u -- v`. Returns `true` if it existed.
    pub fn remove_edge<Q>(&mut self, u: &Q, v: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        match self.try_remove_edge(u, v) {
            Ok(()) => true,
            Err(error) => {
                tracing::debug!(%error, "ignoring remove_edge");
                false
            }
        }
    }

    /// Removes `vertex` and every edge touching it.
    pub fn try_remove_vertex<Q>(&mut self, vertex: &Q) -> Result<(), GraphError>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        let Some(neighbors) = self.adjacency.remove(vertex) else {
            return Err(GraphError::vertex_not_found(vertex));
        };
        for neighbor in &neighbors {
            Self::unlink(&mut self.adjacency, Borrow::<Q>::borrow(neighbor), vertex);
        }
        self.order.retain(|v| Borrow::<Q>::borrow(v) != vertex);
        Ok(())
    }

    /// Removes `vertex` and every edge touching it. Returns `true` if it existed.
    pub fn remove_vertex<Q>(&mut self, vertex: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        match self.try_remove_vertex(vertex) {
            Ok(()) => true,
            Err(error) => {
                tracing::debug!(%error, "ignoring remove_vertex");
                false
            }
        }
    }

    /// All vertices, in insertion order.
    pub fn vertices(&self) -> Vec<L> {
        self.order.clone()
    }

    /// Every edge once, as `(u, v)` with `u` the endpoint inserted first.
    pub fn edges(&self) -> Vec<(L, L)> {
        let mut seen: HashSet<(&L, &L)> = HashSet::new();
        let mut edges = Vec::with_capacity(self.edge_count());
        for u in &self.order {
            for v in self.neighbors(u) {
                if !seen.contains(&(v, u)) && seen.insert((u, v)) {
                    edges.push((u.clone(), v.clone()));
                }
            }
        }
        edges
    }

    /// Returns `true` if every consecutive pair of `path` is an edge.
    ///
    /// An empty path is valid; a single-vertex path is valid iff the vertex exists.
    pub fn is_valid_path<Q>(&self, path: &[&Q]) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match path {
            [] => true,
            [only] => self.contains_vertex(*only),
            _ => path.windows(2).all(|hop| self.has_edge(hop[0], hop[1])),
        }
    }

    /// Resolves a borrowed label to the graph's own key.
    fn key<Q>(&self, vertex: &Q) -> Option<&L>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adjacency.get_key_value(vertex).map(|(key, _)| key)
    }
}

impl<L: Hash + Eq> UndirectedGraph<L> {
    fn neighbors_of(&self, vertex: &L) -> &[L] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<L> Default for UndirectedGraph<L>
where
    L: Clone + Ord + Hash + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L, A, B> Extend<(A, B)> for UndirectedGraph<L>
where
    L: Clone + Ord + Hash + fmt::Debug,
    A: Into<L>,
    B: Into<L>,
{
    fn extend<I: IntoIterator<Item = (A, B)>>(&mut self, iter: I) {
        for (u, v) in iter {
            self.add_edge(u, v);
        }
    }
}

impl<L, A, B> FromIterator<(A, B)> for UndirectedGraph<L>
where
    L: Clone + Ord + Hash + fmt::Debug,
    A: Into<L>,
    B: Into<L>,
{
    fn from_iter<I: IntoIterator<Item = (A, B)>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl<L> fmt::Display for UndirectedGraph<L>
where
    L: fmt::Display + fmt::Debug + Hash + Eq,
{
    /// Renders `GRAPH: {a: ["b", "c"], ...}`: each vertex label, then its
    /// neighbor list in `Debug` form. One vertex per line once that layout
    /// reaches 70 characters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self
            .order
            .iter()
            .map(|v| format!("{v}: {:?}", self.neighbors_of(v)))
            .collect();

        let multiline = entries.join("\n  ");
        if multiline.len() < INLINE_RENDER_WIDTH {
            write!(f, "GRAPH: {{{}}}", entries.join(", "))
        } else {
            write!(f, "GRAPH: {{\n  {multiline}}}")
        }
    }
}
