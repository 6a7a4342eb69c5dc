//! # `digraphs` - Interchangeable Directed Graph Representations
//!
//! A small directed-graph toolkit: one graph contract, four adjacency
//! representations with different asymptotic trade-offs, and classic
//! traversal/ordering algorithms that behave the same over all of them.
//!
//! ## Key Features
//!
//! - **One contract**: [`Graph`] exposes vertex count, successors and
//!   predecessors over dense vertex indices `[0, vertex_count)`
//! - **Four representations**: [`ListGraph`], [`MatrixGraph`], [`SetGraph`],
//!   [`ArcGraph`], plus the runtime-selected [`AnyGraph`]
//! - **Symmetric conversion**: every representation implements [`FromGraph`]
//!   for *any* source graph
//! - **Representation-agnostic algorithms**: BFS, DFS and topological sort in
//!   [`algo`], with explicit work stacks instead of recursion
//! - **Recoverable errors**: out-of-range vertices surface as
//!   [`GraphError::InvalidVertex`] rather than aborting
//!
//! ## Architecture
//!
//! ### Representations
//!
//! | Type | Parallel edges | Best for |
//! |------|----------------|----------|
//! | [`ListGraph`] | kept | general sparse graphs, fast successor lookup |
//! | [`MatrixGraph`] | collapsed | dense graphs, edge-existence tests |
//! | [`SetGraph`] | collapsed | deduplicated sparse graphs, sorted output |
//! | [`ArcGraph`] | kept | compact storage, append-heavy workloads |
//!
//! ### Conversion Semantics
//!
//! `T::from_graph(&source)` builds `T::new(source.vertex_count())` and
//! re-inserts, for each vertex in ascending order, every successor reported by
//! the source through `T`'s own `add_edge`. The copy therefore inherits the
//! *target's* de-duplication policy: two parallel `0 -> 1` arcs in an
//! [`ArcGraph`] become a single edge in a [`SetGraph`]. Converting between
//! representations of the same class (List ↔ Arc) preserves the edge multiset
//! exactly.
//!
//! ### Invariants
//!
//! 1. The vertex count never changes after construction.
//! 2. `v ∈ successors(u)` iff `u ∈ predecessors(v)`, for every representation.
//! 3. Each traversal callback runs exactly once per visited vertex.
//!
//! ## Example
//!
//! ```rust
//! use digraphs::{algo, FromGraph, Graph, ListGraph, SetGraph};
//!
//! let mut graph = ListGraph::new(5);
//! for (from, to) in [(0, 1), (0, 2), (1, 3), (1, 4), (2, 4)] {
//!     graph.add_edge(from, to)?;
//! }
//!
//! let mut order = Vec::new();
//! algo::traverse_bfs(&graph, |v| order.push(v))?;
//! assert_eq!(order, vec![0, 1, 2, 3, 4]);
//!
//! let set = SetGraph::from_graph(&graph)?;
//! assert_eq!(algo::topological_sort(&set)?, vec![0, 2, 1, 4, 3]);
//! # Ok::<(), digraphs::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod trace;

pub mod algo;
pub mod error;
pub mod graph;

pub use error::{GraphError, GraphResult};
pub use graph::{
    AnyGraph, ArcGraph, Edge, FromGraph, Graph, ListGraph, MatrixGraph, Representation, SetGraph,
};

// Compile-time checks on the contract and value types.
const _: () = {
    use core::mem;

    // An edge is exactly two indices.
    assert!(mem::size_of::<Edge>() == 2 * mem::size_of::<usize>());

    // Errors stay small enough to return by value everywhere.
    assert!(mem::size_of::<GraphError>() <= 3 * mem::size_of::<usize>());
};

// The contract must remain usable as a trait object.
const _: Option<&dyn Graph> = None;
