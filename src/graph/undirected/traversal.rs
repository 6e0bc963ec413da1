//! Traversals and connectivity for [`UndirectedGraph`].
//!
//! Labels are resolved to the graph's own keys up front, so the working sets
//! hold `&L` borrowed from the adjacency map and only the returned sequences
//! are cloned.

use core::borrow::Borrow;
use core::fmt;
use std::collections::VecDeque;
use std::hash::Hash;

use super::UndirectedGraph;
use crate::graph::access::visited::VisitedLabels;

impl<L> UndirectedGraph<L>
where
    L: Clone + Ord + Hash + fmt::Debug,
{
    /// Depth-first search from `start`, stopping once `target` is visited.
    ///
    /// Neighbors are explored in ascending label order. Returns the visit
    /// order, or an empty vector if `start` is absent.
    pub fn dfs<Q>(&self, start: &Q, target: Option<&Q>) -> Vec<L>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(start) = self.key(start) else {
            return Vec::new();
        };
        let target = target.and_then(|t| self.key(t));

        let mut visited = VisitedLabels::with_capacity(self.vertex_count());
        let mut order: Vec<&L> = Vec::new();
        let mut stack = vec![start];
        let mut fresh: Vec<&L> = Vec::new();

        while !target.is_some_and(|t| visited.is_visited(t)) {
            let Some(vertex) = stack.pop() else { break };
            if !visited.try_visit(vertex) {
                continue;
            }
            order.push(vertex);

            fresh.clear();
            fresh.extend(
                self.neighbors::<L>(vertex)
                    .iter()
                    .filter(|n| !visited.is_visited(n)),
            );
            // Descending push so the smallest label is popped first.
            fresh.sort_unstable_by(|a, b| b.cmp(a));
            stack.extend_from_slice(&fresh);
        }

        tracing::trace!(start = ?start, visited = visited.len(), "undirected dfs");
        order.into_iter().cloned().collect()
    }

    /// Breadth-first search from `start`, stopping once `target` is visited.
    ///
    /// Neighbors are enqueued in ascending label order. Returns the visit
    /// order, or an empty vector if `start` is absent.
    pub fn bfs<Q>(&self, start: &Q, target: Option<&Q>) -> Vec<L>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(start) = self.key(start) else {
            return Vec::new();
        };
        let target = target.and_then(|t| self.key(t));
        let order = self.bfs_keys(start, target);
        tracing::trace!(start = ?start, visited = order.len(), "undirected bfs");
        order.into_iter().cloned().collect()
    }

    fn bfs_keys<'a>(&'a self, start: &'a L, target: Option<&'a L>) -> Vec<&'a L> {
        let mut visited = VisitedLabels::with_capacity(self.vertex_count());
        let mut order = Vec::new();
        let mut queue = VecDeque::from([start]);
        let mut fresh: Vec<&L> = Vec::new();

        while !target.is_some_and(|t| visited.is_visited(t)) {
            let Some(vertex) = queue.pop_front() else { break };
            if !visited.try_visit(vertex) {
                continue;
            }
            order.push(vertex);

            fresh.clear();
            fresh.extend(self.neighbors(vertex).iter().filter(|n| !visited.is_visited(n)));
            fresh.sort_unstable();
            queue.extend(fresh.iter().copied());
        }
        order
    }

    /// Returns `true` if the graph contains a cycle.
    ///
    /// Iterative DFS from every undiscovered vertex, remembering the vertex
    /// each one was reached from. Meeting an already-discovered vertex over
    /// any other edge closes a cycle; a lone edge never does.
    pub fn has_cycle(&self) -> bool {
        let mut discovered = VisitedLabels::with_capacity(self.vertex_count());
        let mut stack: Vec<(&L, Option<&L>)> = Vec::new();

        for root in &self.order {
            if !discovered.try_visit(root) {
                continue;
            }
            stack.push((root, None));

            while let Some((vertex, parent)) = stack.pop() {
                for neighbor in self.neighbors(vertex) {
                    if parent == Some(neighbor) {
                        continue;
                    }
                    if !discovered.try_visit(neighbor) {
                        tracing::trace!(from = ?vertex, to = ?neighbor, "cycle edge");
                        return true;
                    }
                    stack.push((neighbor, Some(vertex)));
                }
            }
        }
        false
    }

    /// Number of connected components. An empty graph has none.
    pub fn count_connected_components(&self) -> usize {
        self.component_keys().len()
    }

    /// The connected components, each in BFS order from its first vertex.
    ///
    /// Components are listed in the insertion order of their first vertex.
    pub fn connected_components(&self) -> Vec<Vec<L>> {
        self.component_keys()
            .into_iter()
            .map(|component| component.into_iter().cloned().collect())
            .collect()
    }

    fn component_keys(&self) -> Vec<Vec<&L>> {
        let mut covered = VisitedLabels::with_capacity(self.vertex_count());
        let mut components = Vec::new();
        for vertex in &self.order {
            if covered.is_visited(vertex) {
                continue;
            }
            let reached = self.bfs_keys(vertex, None);
            for &v in &reached {
                covered.try_visit(v);
            }
            components.push(reached);
        }
        components
    }
}
