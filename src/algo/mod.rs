//! Traversal and ordering algorithms written against [`Graph`](crate::Graph).
//!
//! Nothing here knows which representation backs a graph. Visit order follows
//! [`Graph::successors`](crate::Graph::successors), so whole-graph orders may
//! legitimately differ between representations of the same logical graph;
//! the *set* of visited vertices never does.
//!
//! Every traversal takes a callback invoked exactly once per visited vertex,
//! synchronously and in traversal order. Graphs are borrowed immutably for the
//! whole call.

pub mod bfs;
pub mod dfs;
pub mod topo;
pub mod visited;

pub use bfs::{bfs_from, traverse_bfs, traverse_bfs_from, Bfs};
pub use dfs::{dfs_from, traverse_dfs, traverse_dfs_from};
pub use topo::{topological_sort, try_topological_sort};
pub use visited::VisitedSet;
