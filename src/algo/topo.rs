//! Topological ordering by reverse depth-first post-order.
//!
//! Roots are taken in ascending index order; a vertex is placed in front of
//! everything emitted so far once all of its successors have been finished.
//! On an acyclic graph every edge `a -> b` then has `a` before `b`.

use crate::algo::dfs::walk;
use crate::algo::visited::VisitedSet;
use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::trace::trace_event;

/// Orders the vertices so that every edge points forward, if the graph is acyclic.
///
/// Cyclic input is not an error: the walk still terminates, since visited
/// vertices are never re-entered, and returns a permutation of all vertices
/// whose order is not topological across the cycle. Use
/// [`try_topological_sort`] to reject cycles instead.
///
/// The result always contains each vertex exactly once.
///
/// # Errors
/// [`GraphError::InvalidVertex`] if the graph reports a successor outside its
/// own vertex range.
pub fn topological_sort<G>(graph: &G) -> GraphResult<Vec<usize>>
where
    G: Graph + ?Sized,
{
    let n = graph.vertex_count();
    let mut visited = VisitedSet::new(n);
    let mut stack = Vec::new();
    let mut finished = Vec::with_capacity(n);

    for root in 0..n {
        walk(
            graph,
            root,
            &mut visited,
            &mut stack,
            &mut |_: usize| {},
            &mut |v: usize| finished.push(v),
        )?;
    }

    finished.reverse();
    trace_event!(debug, vertex_count = n, "topological order computed");
    Ok(finished)
}

/// Like [`topological_sort`], but fails on cyclic input.
///
/// Produces the same order as [`topological_sort`] whenever the graph is a DAG.
///
/// # Errors
/// [`GraphError::Cycle`] naming a vertex on some cycle. A self-loop counts as
/// a cycle. Out-of-range successors fail as in [`topological_sort`].
pub fn try_topological_sort<G>(graph: &G) -> GraphResult<Vec<usize>>
where
    G: Graph + ?Sized,
{
    let order = topological_sort(graph)?;

    let mut position = vec![0usize; order.len()];
    for (pos, &vertex) in order.iter().enumerate() {
        position[vertex] = pos;
    }

    // Reverse post-order sends an edge backwards exactly when it is a DFS back
    // edge, and its target then lies on a cycle.
    for (from, &from_pos) in position.iter().enumerate() {
        for to in graph.successors(from)? {
            graph.check_vertex(to)?;
            if position[to] <= from_pos {
                return Err(GraphError::Cycle { vertex: to });
            }
        }
    }
    Ok(order)
}
