//! The graph contract and its adjacency representations.
//!
//! Every representation stores a directed graph over the dense vertex range
//! `[0, vertex_count)`, fixed at construction. They differ only in storage and
//! in how parallel edges are treated:
//!
//! | Representation | Storage | Parallel edges | `successors` | `predecessors` |
//! |----------------|---------|----------------|--------------|----------------|
//! | [`ListGraph`]   | `Vec<Vec<usize>>` | kept | \(O(d^+)\) insertion order | \(O(n + m)\) ascending |
//! | [`MatrixGraph`] | `n × n` bit matrix | collapsed | \(O(n)\) ascending | \(O(n)\) ascending |
//! | [`SetGraph`]    | `Vec<BTreeSet<usize>>` | collapsed | \(O(d^+)\) ascending | \(O(n \log d)\) ascending |
//! | [`ArcGraph`]    | `Vec<Edge>` | kept | \(O(m)\) insertion order | \(O(m)\) insertion order |
//!
//! Any representation can be built from any other through [`FromGraph`]. The
//! copy enumerates the source's successor lists for each vertex in ascending
//! order and re-inserts every edge with the *target's* `add_edge`, so
//! converting into [`MatrixGraph`] or [`SetGraph`] collapses parallel edges.
//!
//! [`AnyGraph`] wraps the closed set of representations in a single enum for
//! callers that pick the storage at runtime.

pub mod any;
pub mod arc;
pub mod list;
pub mod matrix;
pub mod set;

pub use any::{AnyGraph, Representation};
pub use arc::ArcGraph;
pub use list::ListGraph;
pub use matrix::MatrixGraph;
pub use set::SetGraph;

use crate::error::{GraphError, GraphResult};
use crate::trace::trace_event;

/// A directed edge `from -> to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    /// Source vertex.
    pub from: usize,
    /// Target vertex.
    pub to: usize,
}

impl Edge {
    /// Creates the edge `from -> to`.
    #[inline]
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

impl From<(usize, usize)> for Edge {
    #[inline]
    fn from((from, to): (usize, usize)) -> Self {
        Self { from, to }
    }
}

impl From<Edge> for (usize, usize) {
    #[inline]
    fn from(edge: Edge) -> Self {
        (edge.from, edge.to)
    }
}

/// The capability set shared by every graph representation.
///
/// Implementors provide the four required methods; everything else has a
/// default built on top of them which representations override when their
/// storage answers faster.
///
/// Every method taking a vertex fails with [`GraphError::InvalidVertex`] when
/// the index is not below [`vertex_count`](Graph::vertex_count). A failed
/// `add_edge` leaves the graph unchanged.
pub trait Graph {
    /// Number of vertices, fixed since construction.
    fn vertex_count(&self) -> usize;

    /// Inserts the directed edge `from -> to`.
    fn add_edge(&mut self, from: usize, to: usize) -> GraphResult<()>;

    /// All `to` such that `vertex -> to` is present.
    fn successors(&self, vertex: usize) -> GraphResult<Vec<usize>>;

    /// All `from` such that `from -> vertex` is present.
    fn predecessors(&self, vertex: usize) -> GraphResult<Vec<usize>>;

    /// Returns `true` for a graph with zero vertices.
    #[inline]
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Fails unless `vertex < self.vertex_count()`.
    #[inline]
    fn check_vertex(&self, vertex: usize) -> GraphResult<()> {
        let vertex_count = self.vertex_count();
        if vertex < vertex_count {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex,
                vertex_count,
            })
        }
    }

    /// Returns `true` if at least one edge `from -> to` is present.
    fn contains_edge(&self, from: usize, to: usize) -> GraphResult<bool> {
        self.check_vertex(to)?;
        Ok(self.successors(from)?.contains(&to))
    }

    /// Number of outgoing edges, parallel edges counted separately.
    fn out_degree(&self, vertex: usize) -> GraphResult<usize> {
        Ok(self.successors(vertex)?.len())
    }

    /// Number of incoming edges, parallel edges counted separately.
    fn in_degree(&self, vertex: usize) -> GraphResult<usize> {
        Ok(self.predecessors(vertex)?.len())
    }

    /// Total number of stored edges.
    fn edge_count(&self) -> usize {
        (0..self.vertex_count())
            .map(|v| self.out_degree(v).unwrap_or(0))
            .sum()
    }

    /// Every stored edge, grouped by source in ascending order and in
    /// successor order within a source.
    fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for from in 0..self.vertex_count() {
            if let Ok(successors) = self.successors(from) {
                edges.extend(successors.into_iter().map(|to| Edge { from, to }));
            }
        }
        edges
    }
}

/// Construction of a representation as a structural copy of any other graph.
///
/// The new graph owns its storage and keeps no link to `source`.
pub trait FromGraph: Sized {
    /// Builds a graph with `source.vertex_count()` vertices holding every edge
    /// reported by `source.successors`, subject to this representation's
    /// de-duplication policy.
    ///
    /// # Errors
    /// [`GraphError::InvalidVertex`] if `source` reports a successor outside
    /// its own vertex range, or [`GraphError::CapacityOverflow`] if this
    /// representation cannot hold that many vertices.
    fn from_graph<G: Graph + ?Sized>(source: &G) -> GraphResult<Self>;
}

/// Re-inserts every edge of `source` into the empty `target`.
///
/// Vertices are enumerated in ascending order and successors in the order the
/// source returns them.
pub(crate) fn copy_edges<S, T>(source: &S, target: &mut T) -> GraphResult<()>
where
    S: Graph + ?Sized,
    T: Graph,
{
    debug_assert_eq!(source.vertex_count(), target.vertex_count());

    for from in 0..source.vertex_count() {
        for to in source.successors(from)? {
            target.add_edge(from, to)?;
        }
    }

    trace_event!(
        debug,
        vertex_count = source.vertex_count(),
        stored = target.edge_count(),
        "copied graph edges"
    );
    Ok(())
}
