//! Builds a small tree, converts it through every representation and prints
//! the whole-graph BFS order of each.
//!
//! Run with `cargo run --example conversions`.

use anyhow::{Context, Result};
use digraphs::{algo, ArcGraph, FromGraph, Graph, ListGraph, MatrixGraph, SetGraph};

fn bfs_order(graph: &dyn Graph) -> Result<String> {
    let mut order = Vec::new();
    algo::traverse_bfs(graph, |v| order.push(v.to_string()))?;
    Ok(order.join(" "))
}

fn main() -> Result<()> {
    let mut list = ListGraph::new(7);
    for (from, to) in [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)] {
        list.add_edge(from, to)
            .with_context(|| format!("adding edge {from} -> {to}"))?;
    }

    let matrix = MatrixGraph::from_graph(&list).context("list -> matrix")?;
    let set = SetGraph::from_graph(&matrix).context("matrix -> set")?;
    let arcs = ArcGraph::from_graph(&set).context("set -> arc")?;

    println!("ListGraph BFS:   {}", bfs_order(&list)?);
    println!("MatrixGraph BFS: {}", bfs_order(&matrix)?);
    println!("SetGraph BFS:    {}", bfs_order(&set)?);
    println!("ArcGraph BFS:    {}", bfs_order(&arcs)?);

    let order = algo::topological_sort(&arcs)?;
    println!("Topological order: {order:?}");
    Ok(())
}
