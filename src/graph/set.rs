//! An adjacency-set directed graph.
//!
//! Successors are kept in a `BTreeSet` per vertex: membership is presence-only
//! (parallel edges collapse) and iteration is ascending, so results are
//! deterministic without a separate sort.

use std::collections::BTreeSet;

use crate::error::GraphResult;
use crate::graph::{copy_edges, FromGraph, Graph};

/// A directed graph stored as one ordered successor set per vertex.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_edge` | \(O(\log d^+)\) | Idempotent insert |
/// | `contains_edge` | \(O(\log d^+)\) | Set lookup |
/// | `successors` | \(O(d^+)\) | Ascending |
/// | `predecessors` | \(O(n \log d)\) | Membership test per vertex, ascending |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetGraph {
    adjacency: Vec<BTreeSet<usize>>,
}

impl SetGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![BTreeSet::new(); vertex_count],
        }
    }
}

impl Graph for SetGraph {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn add_edge(&mut self, from: usize, to: usize) -> GraphResult<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.adjacency[from].insert(to);
        Ok(())
    }

    fn successors(&self, vertex: usize) -> GraphResult<Vec<usize>> {
        self.check_vertex(vertex)?;
        Ok(self.adjacency[vertex].iter().copied().collect())
    }

    fn predecessors(&self, vertex: usize) -> GraphResult<Vec<usize>> {
        self.check_vertex(vertex)?;
        Ok(self
            .adjacency
            .iter()
            .enumerate()
            .filter(|(_, set)| set.contains(&vertex))
            .map(|(from, _)| from)
            .collect())
    }

    fn contains_edge(&self, from: usize, to: usize) -> GraphResult<bool> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(self.adjacency[from].contains(&to))
    }

    fn out_degree(&self, vertex: usize) -> GraphResult<usize> {
        self.check_vertex(vertex)?;
        Ok(self.adjacency[vertex].len())
    }

    fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum()
    }
}

impl FromGraph for SetGraph {
    fn from_graph<G: Graph + ?Sized>(source: &G) -> GraphResult<Self> {
        let mut graph = Self::new(source.vertex_count());
        copy_edges(source, &mut graph)?;
        Ok(graph)
    }
}
