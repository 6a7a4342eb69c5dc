//! Visited markers for graph traversals.
//!
//! A `VisitedSet` is owned by exactly one traversal at a time. Whole-graph
//! drivers create one internally; single-source entry points take it by
//! `&mut` so callers can chain several sources over a shared marker.

use bit_vec::BitVec;

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

/// A dense, fixed-length visited bitmap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitedSet {
    bits: BitVec,
    count: usize,
}

impl VisitedSet {
    /// Creates an all-unvisited set for `len` vertices.
    pub fn new(len: usize) -> Self {
        Self {
            bits: BitVec::from_elem(len, false),
            count: 0,
        }
    }

    /// Creates an all-unvisited set sized for `graph`.
    pub fn for_graph<G: Graph + ?Sized>(graph: &G) -> Self {
        Self::new(graph.vertex_count())
    }

    /// Number of vertices covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the set covers no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of vertices marked so far.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` iff this call observed `vertex` as not-yet-visited and marked it.
    ///
    /// Out-of-range vertices are never marked.
    #[inline]
    pub fn visit(&mut self, vertex: usize) -> bool {
        match self.bits.get(vertex) {
            Some(false) => {
                self.bits.set(vertex, true);
                self.count += 1;
                true
            }
            _ => false,
        }
    }

    /// Returns `true` if `vertex` has been marked.
    #[inline]
    pub fn is_visited(&self, vertex: usize) -> bool {
        self.bits.get(vertex).unwrap_or(false)
    }

    /// Resets every marker, keeping the length.
    pub fn clear(&mut self) {
        self.bits.clear();
        self.count = 0;
    }

    /// Marked vertices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(vertex, bit)| bit.then_some(vertex))
    }

    /// Fails unless this set covers exactly the vertices of `graph`.
    pub(crate) fn check_covers<G: Graph + ?Sized>(&self, graph: &G) -> GraphResult<()> {
        let expected = graph.vertex_count();
        if self.len() == expected {
            Ok(())
        } else {
            Err(GraphError::SizeMismatch {
                expected,
                actual: self.len(),
            })
        }
    }
}
