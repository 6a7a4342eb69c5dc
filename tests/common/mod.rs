//! `proptest` strategies shared by the property tests.

use proptest::collection::vec;
use proptest::prelude::*;

/// A vertex count in `0..=max_vertices` paired with up to `max_edges` edges
/// whose endpoints are all in range.
pub fn arb_graph_edges(
    max_vertices: usize,
    max_edges: usize,
) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (0..=max_vertices).prop_flat_map(move |n| (Just(n), arb_edges(n, max_edges)))
}

/// Up to `max_edges` edges over `vertex_count` vertices, self-loops and
/// parallel edges included. Empty when `vertex_count` is zero.
pub fn arb_edges(vertex_count: usize, max_edges: usize) -> BoxedStrategy<Vec<(usize, usize)>> {
    if vertex_count == 0 {
        return Just(Vec::new()).boxed();
    }
    vec((0..vertex_count, 0..vertex_count), 0..=max_edges).boxed()
}

/// Edges of a DAG over `vertex_count` vertices: every edge goes from a lower
/// to a higher index.
pub fn arb_dag_edges(vertex_count: usize, max_edges: usize) -> BoxedStrategy<Vec<(usize, usize)>> {
    if vertex_count < 2 {
        return Just(Vec::new()).boxed();
    }
    vec((0..vertex_count, 0..vertex_count), 0..=max_edges)
        .prop_map(|pairs| {
            pairs
                .into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| (a.min(b), a.max(b)))
                .collect::<Vec<_>>()
        })
        .boxed()
}
