//! Error type shared by every graph representation and algorithm.
//!
//! All variants describe caller-side precondition violations; none of them is
//! transient, so nothing in the crate ever retries an operation.

use thiserror::Error;

/// The error type for graph construction, mutation, queries and traversals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GraphError {
    /// A vertex index outside `[0, vertex_count)` was supplied.
    #[error("vertex {vertex} out of bounds for graph with {vertex_count} vertices")]
    InvalidVertex {
        /// The offending index.
        vertex: usize,
        /// Vertex count of the graph the index was checked against.
        vertex_count: usize,
    },

    /// A caller-supplied visited set does not cover the graph exactly.
    #[error("visited set has {actual} slots but the graph has {expected} vertices")]
    SizeMismatch {
        /// Vertex count of the graph.
        expected: usize,
        /// Length of the visited set.
        actual: usize,
    },

    /// The representation cannot be allocated for this many vertices.
    #[error("cannot allocate a {vertex_count}x{vertex_count} adjacency matrix")]
    CapacityOverflow {
        /// Requested vertex count.
        vertex_count: usize,
    },

    /// A cycle was found while a strict topological order was requested.
    #[error("graph contains a cycle through vertex {vertex}")]
    Cycle {
        /// A vertex lying on the detected cycle.
        vertex: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type GraphResult<T> = Result<T, GraphError>;
