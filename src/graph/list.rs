//! An adjacency-list directed graph.
//!
//! Each vertex owns a `Vec<usize>` of successors in insertion order. Parallel
//! edges and self-loops are stored as given, so the list is an exact record of
//! every `add_edge` call.

use crate::error::{GraphError, GraphResult};
use crate::graph::{copy_edges, FromGraph, Graph};

/// A directed graph stored as one successor list per vertex.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_edge` | \(O(1)\) amortized | Appends to the source's list |
/// | `successors` | \(O(d^+)\) | Copies the list, insertion order |
/// | `predecessors` | \(O(n + m)\) | Scans every list, ascending source order |
/// | `out_degree` | \(O(1)\) | Returns `Vec::len` |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListGraph {
    adjacency: Vec<Vec<usize>>,
}

impl ListGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Creates a graph from explicit successor lists.
    ///
    /// The number of lists is the vertex count.
    ///
    /// # Errors
    /// [`GraphError::InvalidVertex`] if any successor is out of bounds.
    pub fn from_adjacency(adjacency: Vec<Vec<usize>>) -> GraphResult<Self> {
        let vertex_count = adjacency.len();
        if let Some(&vertex) = adjacency.iter().flatten().find(|&&v| v >= vertex_count) {
            return Err(GraphError::InvalidVertex {
                vertex,
                vertex_count,
            });
        }
        Ok(Self { adjacency })
    }

    /// Borrows the successor list of `vertex` without copying.
    ///
    /// # Errors
    /// [`GraphError::InvalidVertex`] if `vertex` is out of bounds.
    pub fn successor_slice(&self, vertex: usize) -> GraphResult<&[usize]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or(GraphError::InvalidVertex {
                vertex,
                vertex_count: self.adjacency.len(),
            })
    }
}

impl Graph for ListGraph {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn add_edge(&mut self, from: usize, to: usize) -> GraphResult<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.adjacency[from].push(to);
        Ok(())
    }

    fn successors(&self, vertex: usize) -> GraphResult<Vec<usize>> {
        self.successor_slice(vertex).map(<[usize]>::to_vec)
    }

    fn predecessors(&self, vertex: usize) -> GraphResult<Vec<usize>> {
        self.check_vertex(vertex)?;
        let mut result = Vec::new();
        for (from, nbrs) in self.adjacency.iter().enumerate() {
            result.extend(nbrs.iter().filter(|&&to| to == vertex).map(|_| from));
        }
        Ok(result)
    }

    #[inline]
    fn out_degree(&self, vertex: usize) -> GraphResult<usize> {
        self.successor_slice(vertex).map(<[usize]>::len)
    }

    fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }
}

impl FromGraph for ListGraph {
    fn from_graph<G: Graph + ?Sized>(source: &G) -> GraphResult<Self> {
        let mut graph = Self::new(source.vertex_count());
        copy_edges(source, &mut graph)?;
        Ok(graph)
    }
}
