//! A dense adjacency-matrix directed graph.
//!
//! The `n × n` matrix is a single row-major bit vector: cell `(from, to)` lives at
//! bit `from * n + to`. A set bit means "at least one edge", so parallel edges
//! collapse and `add_edge` is idempotent.

use bit_vec::BitVec;

use crate::error::{GraphError, GraphResult};
use crate::graph::{copy_edges, FromGraph, Graph};

/// A directed graph stored as a boolean adjacency matrix.
///
/// Best suited to dense graphs or workloads dominated by edge-existence tests.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `new` | \(O(n^2)\) bits | One allocation |
/// | `add_edge` | \(O(1)\) | Sets one bit |
/// | `contains_edge` | \(O(1)\) | Reads one bit |
/// | `successors` | \(O(n)\) | Row scan, ascending |
/// | `predecessors` | \(O(n)\) | Column scan, ascending |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatrixGraph {
    cells: BitVec,
    vertex_count: usize,
}

impl MatrixGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// # Errors
    /// [`GraphError::CapacityOverflow`] if `vertex_count²` does not fit in `usize`.
    pub fn new(vertex_count: usize) -> GraphResult<Self> {
        let len = vertex_count
            .checked_mul(vertex_count)
            .ok_or(GraphError::CapacityOverflow { vertex_count })?;
        Ok(Self {
            cells: BitVec::from_elem(len, false),
            vertex_count,
        })
    }

    #[inline(always)]
    fn cell(&self, from: usize, to: usize) -> bool {
        self.cells
            .get(from * self.vertex_count + to)
            .unwrap_or(false)
    }
}

impl Graph for MatrixGraph {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn add_edge(&mut self, from: usize, to: usize) -> GraphResult<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.cells.set(from * self.vertex_count + to, true);
        Ok(())
    }

    fn successors(&self, vertex: usize) -> GraphResult<Vec<usize>> {
        self.check_vertex(vertex)?;
        Ok((0..self.vertex_count)
            .filter(|&to| self.cell(vertex, to))
            .collect())
    }

    fn predecessors(&self, vertex: usize) -> GraphResult<Vec<usize>> {
        self.check_vertex(vertex)?;
        Ok((0..self.vertex_count)
            .filter(|&from| self.cell(from, vertex))
            .collect())
    }

    fn contains_edge(&self, from: usize, to: usize) -> GraphResult<bool> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(self.cell(from, to))
    }

    fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&bit| bit).count()
    }
}

impl FromGraph for MatrixGraph {
    fn from_graph<G: Graph + ?Sized>(source: &G) -> GraphResult<Self> {
        let mut graph = Self::new(source.vertex_count())?;
        copy_edges(source, &mut graph)?;
        Ok(graph)
    }
}
