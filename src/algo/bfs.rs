//! Breadth-first traversal.
//!
//! Vertices are marked visited when they are *enqueued*, not when they are
//! dequeued, so no vertex is ever queued twice. The callback runs on dequeue,
//! before the vertex's successors are examined.

use std::collections::VecDeque;

use crate::algo::visited::VisitedSet;
use crate::error::GraphResult;
use crate::graph::Graph;
use crate::trace::trace_event;

/// Breadth-first traversal from `start` over the caller's visited set.
///
/// Visits every vertex reachable from `start` that is not already marked in
/// `visited`, calling `visit` once per vertex in FIFO order. Successors are
/// enqueued in the order [`Graph::successors`] returns them. If `start` is
/// already marked nothing happens.
///
/// # Errors
/// [`GraphError::InvalidVertex`](crate::GraphError::InvalidVertex) if `start`
/// or a reported successor is out of range, or
/// [`GraphError::SizeMismatch`](crate::GraphError::SizeMismatch) if `visited`
/// does not cover the graph.
pub fn bfs_from<G, F>(
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
    let mut queue = VecDeque::new();
    run(graph, start, visited, &mut queue, &mut visit)
}

/// Breadth-first traversal of the whole graph.
///
/// Starts a traversal from every still-unvisited vertex in ascending index
/// order, so each vertex is visited exactly once even when the graph is
/// disconnected.
///
/// # Errors
/// [`GraphError::InvalidVertex`](crate::GraphError::InvalidVertex) if the
/// graph reports a successor outside its own vertex range.
pub fn traverse_bfs<G, F>(graph: &G, visit: F) -> GraphResult<()>
where
    G: Graph + ?Sized,
    F: FnMut(usize),
{
    drive(graph, None, visit)
}

/// Like [`traverse_bfs`], but the first traversal starts at `start`.
///
/// # Errors
/// [`GraphError::InvalidVertex`](crate::GraphError::InvalidVertex) if `start`
/// or a reported successor is out of range.
pub fn traverse_bfs_from<G, F>(graph: &G, start: usize, visit: F) -> GraphResult<()>
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
    trace_event!(debug, vertex_count = n, ?first, "bfs over whole graph");

    let mut visited = VisitedSet::new(n);
    let mut queue = VecDeque::new();
    for root in first.into_iter().chain(0..n) {
        if !visited.is_visited(root) {
            trace_event!(trace, root, "bfs root");
            run(graph, root, &mut visited, &mut queue, &mut visit)?;
        }
    }
    Ok(())
}

fn run<G, F>(
    graph: &G,
    start: usize,
    visited: &mut VisitedSet,
    queue: &mut VecDeque<usize>,
    visit: &mut F,
) -> GraphResult<()>
where
    G: Graph + ?Sized,
    F: FnMut(usize),
{
    if !visited.visit(start) {
        return Ok(());
    }
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        visit(current);
        enqueue_successors(graph, current, visited, queue)?;
    }
    Ok(())
}

/// Marks and enqueues every unvisited successor of `current`, rejecting
/// successors the graph reports outside its own vertex range.
fn enqueue_successors<G>(
    graph: &G,
    current: usize,
    visited: &mut VisitedSet,
    queue: &mut VecDeque<usize>,
) -> GraphResult<()>
where
    G: Graph + ?Sized,
{
    for next in graph.successors(current)? {
        graph.check_vertex(next)?;
        if visited.visit(next) {
            queue.push_back(next);
        }
    }
    Ok(())
}

/// A lazy single-source breadth-first traversal.
///
/// Yields vertex indices in the same order [`bfs_from`] would pass them to its
/// callback, owning a fresh [`VisitedSet`]. A failed successor lookup is
/// yielded once as an error, after which the iterator is exhausted.
#[derive(Debug)]
pub struct Bfs<'g, G: Graph + ?Sized> {
    graph: &'g G,
    visited: VisitedSet,
    queue: VecDeque<usize>,
}

impl<'g, G: Graph + ?Sized> Bfs<'g, G> {
    /// Creates a traversal starting at `start`.
    ///
    /// # Errors
    /// [`GraphError::InvalidVertex`](crate::GraphError::InvalidVertex) if
    /// `start` is out of range.
    pub fn new(graph: &'g G, start: usize) -> GraphResult<Self> {
        graph.check_vertex(start)?;
        let mut visited = VisitedSet::for_graph(graph);
        visited.visit(start);
        Ok(Self {
            graph,
            visited,
            queue: VecDeque::from([start]),
        })
    }

    /// Consumes the traversal, returning the vertices marked so far.
    pub fn into_visited(self) -> VisitedSet {
        self.visited
    }
}

impl<G: Graph + ?Sized> Iterator for Bfs<'_, G> {
    type Item = GraphResult<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.queue.pop_front()?;
        let enqueued =
            enqueue_successors(self.graph, current, &mut self.visited, &mut self.queue);
        if let Err(err) = enqueued {
            self.queue.clear();
            return Some(Err(err));
        }
        Some(Ok(current))
    }
}
