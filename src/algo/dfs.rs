//! Depth-first traversal on an explicit work stack.
//!
//! Each stack frame holds a vertex, a snapshot of its successor list and a
//! cursor into it. Advancing the top frame to its next unvisited successor and
//! pushing that successor's frame reproduces the recursive formulation exactly:
//! a child is checked against the visited set when it is *reached*, not when
//! its parent is expanded, and children are explored left to right in
//! [`Graph::successors`] order. Call-stack depth stays constant regardless of
//! path length.

use crate::algo::visited::VisitedSet;
use crate::error::GraphResult;
use crate::graph::Graph;
use crate::trace::trace_event;

/// One suspended vertex of the depth-first walk.
#[derive(Debug)]
pub(crate) struct Frame {
    vertex: usize,
    successors: Vec<usize>,
    cursor: usize,
}

impl Frame {
    fn enter<G: Graph + ?Sized>(graph: &G, vertex: usize) -> GraphResult<Self> {
        let successors = graph.successors(vertex)?;
        for &next in &successors {
            graph.check_vertex(next)?;
        }
        Ok(Self {
            vertex,
            successors,
            cursor: 0,
        })
    }

    /// Moves past successors that are already visited and marks the first one
    /// that is not.
    fn advance(&mut self, visited: &mut VisitedSet) -> Option<usize> {
        while let Some(&next) = self.successors.get(self.cursor) {
            self.cursor += 1;
            if visited.visit(next) {
                return Some(next);
            }
        }
        None
    }
}

/// Depth-first walk from `start`, calling `on_enter` in pre-order and
/// `on_exit` in post-order.
///
/// Does nothing if `start` is already visited. `stack` must be empty and is
/// left empty.
pub(crate) fn walk<G, Enter, Exit>(
    graph: &G,
    start: usize,
    visited: &mut VisitedSet,
    stack: &mut Vec<Frame>,
    on_enter: &mut Enter,
    on_exit: &mut Exit,
) -> GraphResult<()>
where
    G: Graph + ?Sized,
    Enter: FnMut(usize),
    Exit: FnMut(usize),
{
    debug_assert!(stack.is_empty());
    if !visited.visit(start) {
        return Ok(());
    }
    on_enter(start);
    stack.push(Frame::enter(graph, start)?);

    while let Some(frame) = stack.last_mut() {
        if let Some(child) = frame.advance(visited) {
            on_enter(child);
            stack.push(Frame::enter(graph, child)?);
        } else {
            let vertex = frame.vertex;
            stack.pop();
            on_exit(vertex);
        }
    }
    Ok(())
}

/// Pre-order depth-first traversal from `start` over the caller's visited set.
///
/// `visit` runs as soon as a vertex is reached, before any of its successors.
/// If `start` is already marked nothing happens.
///
/// # Errors
/// [`GraphError::InvalidVertex`](crate::GraphError::InvalidVertex) if `start`
/// or a reported successor is out of range, or
/// [`GraphError::SizeMismatch`](crate::GraphError::SizeMismatch) if `visited`
/// does not cover the graph.
pub fn dfs_from<G, F>(
    graph: &G,
    start: usize,
    visited: &mut VisitedSet,
    mut visit: F,
) -> GraphResult<()>
where
    G: Graph + ?Sized,
    F: FnMut(usize),
{
    graph.check_vertex(start)?;
    visited.check_covers(graph)?;
    walk(graph, start, visited, &mut Vec::new(), &mut visit, &mut |_: usize| {})
}

/// Pre-order depth-first traversal of the whole graph, roots in ascending
/// index order.
///
/// # Errors
/// [`GraphError::InvalidVertex`](crate::GraphError::InvalidVertex) if the
/// graph reports a successor outside its own vertex range.
pub fn traverse_dfs<G, F>(graph: &G, visit: F) -> GraphResult<()>
where
    G: Graph + ?Sized,
    F: FnMut(usize),
{
    drive(graph, None, visit)
}

/// Like [`traverse_dfs`], but the first root is `start`.
///
/// # Errors
/// [`GraphError::InvalidVertex`](crate::GraphError::InvalidVertex) if `start`
/// or a reported successor is out of range.
pub fn traverse_dfs_from<G, F>(graph: &G, start: usize, visit: F) -> GraphResult<()>
where
    G: Graph + ?Sized,
    F: FnMut(usize),
{
    graph.check_vertex(start)?;
    drive(graph, Some(start), visit)
}

fn drive<G, F>(graph: &G, first: Option<usize>, mut visit: F) -> GraphResult<()>
where
    G: Graph + ?Sized,
    F: FnMut(usize),
{
    let n = graph.vertex_count();
    trace_event!(debug, vertex_count = n, ?first, "dfs over whole graph");

    let mut visited = VisitedSet::new(n);
    let mut stack = Vec::new();
    for root in first.into_iter().chain(0..n) {
        if !visited.is_visited(root) {
            trace_event!(trace, root, "dfs root");
            walk(graph, root, &mut visited, &mut stack, &mut visit, &mut |_: usize| {})?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::graph::{ListGraph, SetGraph};

    fn collect_whole(graph: &impl Graph) -> Vec<usize> {
        let mut order = Vec::new();
        traverse_dfs(graph, |v| order.push(v)).unwrap();
        order
    }

    #[test]
    fn pre_order_follows_successor_order() {
        // 0 -> 1,2 ; 1 -> 3 ; 2 -> 3
        let g = ListGraph::from_adjacency(vec![vec![1, 2], vec![3], vec![3], vec![]]).unwrap();
        assert_eq!(collect_whole(&g), vec![0, 1, 3, 2]);

        // Reversed successor order flips the branches.
        let g = ListGraph::from_adjacency(vec![vec![2, 1], vec![3], vec![3], vec![]]).unwrap();
        assert_eq!(collect_whole(&g), vec![0, 2, 3, 1]);
    }

    #[test]
    fn visited_is_checked_when_child_is_reached() {
        // 0 -> 1, 2 ; 1 -> 2. Recursion reaches 2 through 1 first, so the
        // later 0 -> 2 edge must be skipped rather than visiting 2 twice.
        let g = ListGraph::from_adjacency(vec![vec![1, 2], vec![2], vec![]]).unwrap();
        assert_eq!(collect_whole(&g), vec![0, 1, 2]);
    }

    #[test]
    fn long_chain_does_not_grow_call_stack() {
        let n = 200_000;
        let mut g = ListGraph::new(n);
        for v in 0..n - 1 {
            g.add_edge(v, v + 1).unwrap();
        }
        let mut count = 0;
        let mut last = None;
        dfs_from(&g, 0, &mut VisitedSet::for_graph(&g), |v| {
            count += 1;
            last = Some(v);
        })
        .unwrap();
        assert_eq!(count, n);
        assert_eq!(last, Some(n - 1));
    }

    #[test]
    fn self_loop_is_not_re_expanded() {
        let mut g = SetGraph::new(3);
        g.add_edge(0, 2).unwrap();
        g.add_edge(2, 2).unwrap();
        g.add_edge(2, 1).unwrap();
        assert_eq!(collect_whole(&g), vec![0, 2, 1]);
    }

    #[test]
    fn shared_visited_across_sources() {
        let g = ListGraph::from_adjacency(vec![vec![1], vec![], vec![1, 0]]).unwrap();
        let mut visited = VisitedSet::for_graph(&g);
        let mut order = Vec::new();
        dfs_from(&g, 2, &mut visited, |v| order.push(v)).unwrap();
        dfs_from(&g, 0, &mut visited, |v| order.push(v)).unwrap();
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn caller_supplied_start_goes_first() {
        let g = ListGraph::from_adjacency(vec![vec![1], vec![], vec![0], vec![]]).unwrap();
        let mut order = Vec::new();
        traverse_dfs_from(&g, 2, |v| order.push(v)).unwrap();
        assert_eq!(order, vec![2, 0, 1, 3]);
    }

    #[test]
    fn invalid_inputs_are_reported() {
        let g = ListGraph::new(2);
        assert_eq!(
            dfs_from(&g, 2, &mut VisitedSet::new(2), |_| {}),
            Err(GraphError::InvalidVertex {
                vertex: 2,
                vertex_count: 2
            })
        );
        assert_eq!(
            dfs_from(&g, 0, &mut VisitedSet::new(3), |_| {}),
            Err(GraphError::SizeMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn empty_graph_visits_nothing() {
        assert!(collect_whole(&ListGraph::new(0)).is_empty());
    }

    /// Two vertices, but vertex 1 claims a successor 7.
    struct Dangling;

    impl Graph for Dangling {
        fn vertex_count(&self) -> usize {
            2
        }

        fn add_edge(&mut self, from: usize, to: usize) -> GraphResult<()> {
            self.check_vertex(from)?;
            self.check_vertex(to)
        }

        fn successors(&self, vertex: usize) -> GraphResult<Vec<usize>> {
            self.check_vertex(vertex)?;
            Ok(if vertex == 0 { vec![1] } else { vec![7] })
        }

        fn predecessors(&self, vertex: usize) -> GraphResult<Vec<usize>> {
            self.check_vertex(vertex)?;
            Ok(if vertex == 1 { vec![0] } else { vec![] })
        }
    }

    #[test]
    fn out_of_range_successor_is_an_error() {
        let dangling = GraphError::InvalidVertex {
            vertex: 7,
            vertex_count: 2,
        };
        let mut order = Vec::new();
        assert_eq!(traverse_dfs(&Dangling, |v| order.push(v)), Err(dangling));
        assert_eq!(order, vec![0, 1]);
        assert_eq!(
            dfs_from(&Dangling, 1, &mut VisitedSet::new(2), |_| {}),
            Err(dangling)
        );
    }
}
