//! Traversals and path algorithms for [`DirectedWeightedGraph`].
//!
//! Every routine here is read-only; visited sets, stacks, queues and heaps
//! are local to the call.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use super::{DirectedWeightedGraph, Successors};
use crate::graph::access::visited::VisitedSet;
use crate::weight::{Distance, Weight};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// Not yet discovered.
    White,
    /// On the active exploration path.
    Gray,
    /// Fully explored.
    Black,
}

/// Result of a single-source shortest-path run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPaths<W> {
    source: usize,
    distances: Vec<Distance<W>>,
    predecessors: Vec<Option<usize>>,
}

impl<W: Weight> ShortestPaths<W> {
    /// The source vertex.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Distance to `vertex`; `Infinite` if unreachable or out of range.
    pub fn distance(&self, vertex: usize) -> Distance<W> {
        self.distances.get(vertex).copied().unwrap_or(Distance::Infinite)
    }

    /// Distances to every vertex, indexed by vertex.
    pub fn distances(&self) -> &[Distance<W>] {
        &self.distances
    }

    /// Predecessor of `vertex` on its shortest path, if it has one.
    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessors.get(vertex).copied().flatten()
    }

    /// The vertex sequence from the source to `target`, both inclusive.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.distance(target).is_finite() {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.predecessor(current) {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }

    /// Consumes the result, keeping only the distances.
    pub fn into_distances(self) -> Vec<Distance<W>> {
        self.distances
    }
}

impl<W: Weight> DirectedWeightedGraph<W> {
    /// Depth-first search from `start`, stopping once `target` is visited.
    ///
    /// Successors are explored in ascending index order. Returns the visit
    /// order, or an empty vector if `start` is out of range.
    pub fn dfs(&self, start: usize, target: Option<usize>) -> Vec<usize> {
        let mut order = Vec::new();
        if !self.contains_vertex(start) {
            return order;
        }

        let mut visited = VisitedSet::new(self.vertex_count());
        let mut stack = vec![start];
        let mut fresh = Vec::new();

        while !target.is_some_and(|t| visited.is_visited(t)) {
            let Some(vertex) = stack.pop() else { break };
            if !visited.try_visit(vertex) {
                continue;
            }
            order.push(vertex);

            fresh.clear();
            fresh.extend(
                self.store
                    .successors(vertex)
                    .map(|(next, _)| next)
                    .filter(|&next| !visited.is_visited(next)),
            );
            // Push in descending order so the smallest successor is popped first.
            stack.extend(fresh.iter().rev());
        }

        tracing::trace!(start, visited = order.len(), "directed dfs");
        order
    }

    /// Breadth-first search from `start`, stopping once `target` is visited.
    ///
    /// Successors are enqueued in ascending index order. Returns the visit
    /// order, or an empty vector if `start` is out of range.
    pub fn bfs(&self, start: usize, target: Option<usize>) -> Vec<usize> {
        let mut order = Vec::new();
        if !self.contains_vertex(start) {
            return order;
        }

        let mut visited = VisitedSet::new(self.vertex_count());
        let mut queue = VecDeque::from([start]);

        while !target.is_some_and(|t| visited.is_visited(t)) {
            let Some(vertex) = queue.pop_front() else { break };
            if !visited.try_visit(vertex) {
                continue;
            }
            order.push(vertex);

            for (next, _) in self.store.successors(vertex) {
                if !visited.is_visited(next) {
                    queue.push_back(next);
                }
            }
        }

        tracing::trace!(start, visited = order.len(), "directed bfs");
        order
    }

    /// Returns `true` if the graph contains a directed cycle.
    ///
    /// Runs an iterative white/gray/black DFS from every undiscovered vertex;
    /// an edge into a gray vertex is a back edge and closes a cycle.
    pub fn has_cycle(&self) -> bool {
        let n = self.vertex_count();
        let mut marks = vec![Mark::White; n];
        let mut stack: Vec<(usize, Successors<'_, W>)> = Vec::new();

        for root in 0..n {
            if marks[root] != Mark::White {
                continue;
            }
            marks[root] = Mark::Gray;
            stack.push((root, self.store.successors(root)));

            loop {
                let Some((vertex, successors)) = stack.last_mut() else { break };
                let vertex = *vertex;
                let step = successors.next();
                match step {
                    Some((next, _)) => match marks[next] {
                        Mark::Gray => {
                            tracing::trace!(from = vertex, to = next, "back edge");
                            return true;
                        }
                        Mark::White => {
                            marks[next] = Mark::Gray;
                            stack.push((next, self.store.successors(next)));
                        }
                        Mark::Black => {}
                    },
                    None => {
                        marks[vertex] = Mark::Black;
                        stack.pop();
                    }
                }
            }
        }
        false
    }

    /// Shortest-path distance from `source` to every vertex.
    ///
    /// Unreachable vertices are `Distance::Infinite`. An out-of-range source
    /// yields all-infinite distances.
    pub fn dijkstra(&self, source: usize) -> Vec<Distance<W>> {
        self.shortest_paths(source).into_distances()
    }

    /// Shortest-path distances and predecessor tree from `source`.
    ///
    /// Lazy-deletion Dijkstra: the heap may hold several entries per vertex;
    /// the first one popped finalizes it and later ones are discarded.
    /// Relaxations that would overflow `W` are skipped.
    pub fn shortest_paths(&self, source: usize) -> ShortestPaths<W> {
        let n = self.vertex_count();
        let mut distances = vec![Distance::Infinite; n];
        let mut predecessors = vec![None; n];
        let mut heap = BinaryHeap::new();

        if self.contains_vertex(source) {
            heap.push(Reverse((W::zero(), source, None)));
        }

        while let Some(Reverse((distance, vertex, via))) = heap.pop() {
            if distances[vertex].is_finite() {
                continue;
            }
            distances[vertex] = Distance::Finite(distance);
            predecessors[vertex] = via;

            for (next, weight) in self.store.successors(vertex) {
                if distances[next].is_finite() {
                    continue;
                }
                if let Some(total) = distance.checked_add(&weight) {
                    heap.push(Reverse((total, next, Some(vertex))));
                }
            }
        }

        tracing::trace!(
            source,
            reached = distances.iter().filter(|d| d.is_finite()).count(),
            "dijkstra"
        );
        ShortestPaths {
            source,
            distances,
            predecessors,
        }
    }

    /// Cheapest path from `source` to `target` as `(total weight, vertices)`.
    pub fn shortest_path(&self, source: usize, target: usize) -> Option<(W, Vec<usize>)> {
        let paths = self.shortest_paths(source);
        let total = paths.distance(target).finite()?;
        paths.path_to(target).map(|path| (total, path))
    }
}
