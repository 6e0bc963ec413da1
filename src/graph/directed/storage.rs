//! Interchangeable edge stores for the directed graph.
//!
//! Both stores keep the same invariants: a cell holds either a positive
//! weight or nothing, the diagonal is always empty, and the store's vertex
//! count equals the graph's. Successors are always yielded in ascending
//! target order.

use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::config::{GraphConfig, GrowthPolicy, StorageStrategy};
use crate::error::GraphError;
use crate::weight::Weight;

/// A zeroed `capacity x capacity` cell buffer, or `CapacityOverflow` if the
/// cell count overflows `usize` or cannot be reserved.
fn zeroed_cells<W: Weight>(capacity: usize) -> Result<Vec<W>, GraphError> {
    let overflow = GraphError::CapacityOverflow { capacity };
    let len = capacity.checked_mul(capacity).ok_or_else(|| overflow.clone())?;
    let mut cells = Vec::new();
    cells.try_reserve_exact(len).map_err(|_| overflow)?;
    cells.resize(len, W::zero());
    Ok(cells)
}

/// Row-major weight matrix with spare capacity.
///
/// Cells live at `row * stride + col`; `stride` is the vertex capacity, so
/// adding a vertex within capacity touches no existing cell. When capacity
/// runs out, rows are re-laid at the stride chosen by the growth policy.
#[derive(Clone, Debug)]
pub(crate) struct DenseMatrix<W> {
    cells: Vec<W>,
    order: usize,
    stride: usize,
    growth: GrowthPolicy,
}

impl<W: Weight> DenseMatrix<W> {
    pub(crate) fn new(growth: GrowthPolicy) -> Self {
        Self {
            cells: Vec::new(),
            order: 0,
            stride: 0,
            growth,
        }
    }

    pub(crate) fn with_capacity(capacity: usize, growth: GrowthPolicy) -> Result<Self, GraphError> {
        Ok(Self {
            cells: zeroed_cells(capacity)?,
            order: 0,
            stride: capacity,
            growth,
        })
    }

    #[inline]
    pub(crate) fn order(&self) -> usize {
        self.order
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.stride
    }

    /// Appends a vertex, re-laying rows first if capacity is exhausted. On
    /// error the matrix is unchanged.
    pub(crate) fn push_vertex(&mut self) -> Result<(), GraphError> {
        if self.order == self.stride {
            let stride = self.growth.next_capacity(self.stride);
            if stride == self.stride {
                return Err(GraphError::CapacityOverflow { capacity: stride });
            }
            self.relayout(stride)?;
        }
        // Cells beyond `order` are kept zeroed, so the new row and column are already empty.
        self.order += 1;
        Ok(())
    }

    fn relayout(&mut self, stride: usize) -> Result<(), GraphError> {
        let mut cells = zeroed_cells(stride)?;
        for row in 0..self.order {
            let src = row * self.stride;
            let dst = row * stride;
            cells[dst..dst + self.order].copy_from_slice(&self.cells[src..src + self.order]);
        }
        self.cells = cells;
        self.stride = stride;
        Ok(())
    }

    #[inline]
    pub(crate) fn get(&self, src: usize, dst: usize) -> Option<W> {
        let w = self.cells[src * self.stride + dst];
        (!w.is_zero()).then_some(w)
    }

    #[inline]
    pub(crate) fn set(&mut self, src: usize, dst: usize, weight: W) {
        self.cells[src * self.stride + dst] = weight;
    }

    /// Clears a cell, returning `true` if it held an edge.
    #[inline]
    pub(crate) fn clear(&mut self, src: usize, dst: usize) -> bool {
        let cell = &mut self.cells[src * self.stride + dst];
        let had_edge = !cell.is_zero();
        *cell = W::zero();
        had_edge
    }

    /// The full row for `src`, zero cells included.
    #[inline]
    pub(crate) fn row(&self, src: usize) -> &[W] {
        let start = src * self.stride;
        &self.cells[start..start + self.order]
    }
}

/// One ordered `target -> weight` map per vertex.
#[derive(Clone, Debug, Default)]
pub(crate) struct SparseRows<W> {
    rows: Vec<BTreeMap<usize, W>>,
}

impl<W: Weight> SparseRows<W> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn order(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn push_vertex(&mut self) -> Result<(), GraphError> {
        let capacity = self.rows.len().saturating_add(1);
        self.rows
            .try_reserve(1)
            .map_err(|_| GraphError::CapacityOverflow { capacity })?;
        self.rows.push(BTreeMap::new());
        Ok(())
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.rows.capacity()
    }

    #[inline]
    pub(crate) fn get(&self, src: usize, dst: usize) -> Option<W> {
        self.rows[src].get(&dst).copied()
    }

    #[inline]
    pub(crate) fn set(&mut self, src: usize, dst: usize, weight: W) {
        self.rows[src].insert(dst, weight);
    }

    #[inline]
    pub(crate) fn clear(&mut self, src: usize, dst: usize) -> bool {
        self.rows[src].remove(&dst).is_some()
    }

    #[inline]
    pub(crate) fn row(&self, src: usize) -> &BTreeMap<usize, W> {
        &self.rows[src]
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.rows.iter().map(BTreeMap::len).sum()
    }
}

/// The directed graph's edge store, chosen by [`StorageStrategy`].
///
/// All methods taking vertex indices expect them to be `< order()`; the
/// graph checks bounds before delegating.
#[derive(Clone, Debug)]
pub(crate) enum WeightStore<W> {
    Dense(DenseMatrix<W>),
    Sparse(SparseRows<W>),
}

impl<W: Weight> WeightStore<W> {
    /// An empty store for `config`, which is expected to have passed
    /// [`GraphConfig::validate`].
    pub(crate) fn from_config(config: &GraphConfig) -> Result<Self, GraphError> {
        Ok(match config.storage {
            StorageStrategy::DenseMatrix => WeightStore::Dense(DenseMatrix::with_capacity(
                config.initial_capacity,
                config.growth,
            )?),
            StorageStrategy::SparseList => {
                WeightStore::Sparse(SparseRows::with_capacity(config.initial_capacity))
            }
        })
    }

    pub(crate) fn strategy(&self) -> StorageStrategy {
        match self {
            WeightStore::Dense(_) => StorageStrategy::DenseMatrix,
            WeightStore::Sparse(_) => StorageStrategy::SparseList,
        }
    }

    #[inline]
    pub(crate) fn order(&self) -> usize {
        match self {
            WeightStore::Dense(m) => m.order(),
            WeightStore::Sparse(s) => s.order(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        match self {
            WeightStore::Dense(m) => m.capacity(),
            WeightStore::Sparse(s) => s.capacity(),
        }
    }

    pub(crate) fn push_vertex(&mut self) -> Result<(), GraphError> {
        match self {
            WeightStore::Dense(m) => m.push_vertex(),
            WeightStore::Sparse(s) => s.push_vertex(),
        }
    }

    #[inline]
    pub(crate) fn get(&self, src: usize, dst: usize) -> Option<W> {
        match self {
            WeightStore::Dense(m) => m.get(src, dst),
            WeightStore::Sparse(s) => s.get(src, dst),
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, src: usize, dst: usize, weight: W) {
        match self {
            WeightStore::Dense(m) => m.set(src, dst, weight),
            WeightStore::Sparse(s) => s.set(src, dst, weight),
        }
    }

    #[inline]
    pub(crate) fn clear(&mut self, src: usize, dst: usize) -> bool {
        match self {
            WeightStore::Dense(m) => m.clear(src, dst),
            WeightStore::Sparse(s) => s.clear(src, dst),
        }
    }

    #[inline]
    pub(crate) fn successors(&self, src: usize) -> Successors<'_, W> {
        match self {
            WeightStore::Dense(m) => Successors::Dense(m.row(src).iter().enumerate()),
            WeightStore::Sparse(s) => Successors::Sparse(s.row(src).iter()),
        }
    }

    pub(crate) fn edge_count(&self) -> usize {
        match self {
            WeightStore::Dense(m) => (0..m.order())
                .map(|src| m.row(src).iter().filter(|w| !w.is_zero()).count())
                .sum(),
            WeightStore::Sparse(s) => s.edge_count(),
        }
    }
}

/// Outgoing edges of one vertex as `(target, weight)`, in ascending target order.
pub enum Successors<'a, W> {
    /// Scan of a dense matrix row, skipping empty cells.
    Dense(core::iter::Enumerate<core::slice::Iter<'a, W>>),
    /// Walk of a sparse row.
    Sparse(btree_map::Iter<'a, usize, W>),
    /// A vertex outside the graph.
    Empty,
}

impl<'a, W: Weight> Iterator for Successors<'a, W> {
    type Item = (usize, W);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Successors::Dense(cells) => {
                cells.find(|(_, w)| !w.is_zero()).map(|(dst, w)| (dst, *w))
            }
            Successors::Sparse(entries) => entries.next().map(|(dst, w)| (*dst, *w)),
            Successors::Empty => None,
        }
    }
}
