//! An edge-list ("arc list") directed graph.
//!
//! Edges are kept in one flat vector in insertion order with no per-vertex
//! index. This is the most compact layout for sparse graphs and the slowest to
//! query: every adjacency question filters the full list.

use crate::error::GraphResult;
use crate::graph::{copy_edges, Edge, FromGraph, Graph};

/// A directed graph stored as a flat list of arcs.
///
/// Parallel edges are always preserved. [`Graph::edges`] returns the arcs in
/// insertion order rather than grouped by source.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_edge` | \(O(1)\) amortized | Unconditional append |
/// | `successors` | \(O(m)\) | Filter, insertion order |
/// | `predecessors` | \(O(m)\) | Filter, insertion order |
/// | `edge_count` | \(O(1)\) | Returns `Vec::len` |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArcGraph {
    arcs: Vec<Edge>,
    vertex_count: usize,
}

impl ArcGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            arcs: Vec::new(),
            vertex_count,
        }
    }

    /// The stored arcs in insertion order.
    #[inline]
    pub fn arcs(&self) -> &[Edge] {
        &self.arcs
    }
}

impl Graph for ArcGraph {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn add_edge(&mut self, from: usize, to: usize) -> GraphResult<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.arcs.push(Edge { from, to });
        Ok(())
    }

    fn successors(&self, vertex: usize) -> GraphResult<Vec<usize>> {
        self.check_vertex(vertex)?;
        Ok(self
            .arcs
            .iter()
            .filter(|arc| arc.from == vertex)
            .map(|arc| arc.to)
            .collect())
    }

    fn predecessors(&self, vertex: usize) -> GraphResult<Vec<usize>> {
        self.check_vertex(vertex)?;
        Ok(self
            .arcs
            .iter()
            .filter(|arc| arc.to == vertex)
            .map(|arc| arc.from)
            .collect())
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.arcs.len()
    }

    fn edges(&self) -> Vec<Edge> {
        self.arcs.clone()
    }
}

impl FromGraph for ArcGraph {
    fn from_graph<G: Graph + ?Sized>(source: &G) -> GraphResult<Self> {
        let mut graph = Self::new(source.vertex_count());
        copy_edges(source, &mut graph)?;
        Ok(graph)
    }
}
