use std::collections::BTreeSet;

use digraphs::{
    AnyGraph, ArcGraph, Edge, FromGraph, Graph, ListGraph, MatrixGraph, Representation, SetGraph,
};

const EDGES: [(usize, usize); 9] = [
    (0, 1),
    (0, 1),
    (3, 0),
    (1, 2),
    (2, 2),
    (4, 2),
    (2, 0),
    (0, 4),
    (4, 2),
];

fn build(representation: Representation) -> AnyGraph {
    let mut graph = AnyGraph::new(representation, 6).unwrap();
    for (from, to) in EDGES {
        graph.add_edge(from, to).unwrap();
    }
    graph
}

fn successor_sets(graph: &impl Graph) -> Vec<BTreeSet<usize>> {
    (0..graph.vertex_count())
        .map(|v| graph.successors(v).unwrap().into_iter().collect())
        .collect()
}

#[test]
fn successor_sets_agree_across_all_conversions() {
    let reference = successor_sets(&build(Representation::List));

    for source in Representation::ALL {
        let graph = build(source);
        assert_eq!(successor_sets(&graph), reference, "built as {source}");

        for target in Representation::ALL {
            let converted = graph.convert(target).unwrap();
            assert_eq!(converted.representation(), target);
            assert_eq!(converted.vertex_count(), 6);
            assert_eq!(successor_sets(&converted), reference, "{source} -> {target}");
        }
    }
}

#[test]
fn predecessors_invert_successors_for_every_representation() {
    for repr in Representation::ALL {
        let graph = build(repr);
        for u in 0..graph.vertex_count() {
            for v in 0..graph.vertex_count() {
                let forward = graph.successors(u).unwrap().contains(&v);
                let backward = graph.predecessors(v).unwrap().contains(&u);
                assert_eq!(forward, backward, "{repr}: {u} -> {v}");
            }
        }
    }
}

#[test]
fn parallel_arcs_collapse_only_in_deduplicating_targets() {
    let mut arcs = ArcGraph::new(2);
    arcs.add_edge(0, 1).unwrap();
    arcs.add_edge(0, 1).unwrap();

    assert_eq!(SetGraph::from_graph(&arcs).unwrap().edges(), vec![Edge::new(0, 1)]);
    assert_eq!(MatrixGraph::from_graph(&arcs).unwrap().edges(), vec![Edge::new(0, 1)]);
    assert_eq!(
        ListGraph::from_graph(&arcs).unwrap().edges(),
        vec![Edge::new(0, 1), Edge::new(0, 1)]
    );
    assert_eq!(ArcGraph::from_graph(&arcs).unwrap().edge_count(), 2);
}

#[test]
fn same_class_round_trips_preserve_multiset() {
    let list = match build(Representation::List) {
        AnyGraph::List(list) => list,
        other => panic!("expected a list graph, got {:?}", other.representation()),
    };
    let back = ListGraph::from_graph(&ArcGraph::from_graph(&list).unwrap()).unwrap();
    assert_eq!(back, list);

    let arcs = match build(Representation::Arc) {
        AnyGraph::Arc(arcs) => arcs,
        other => panic!("expected an arc graph, got {:?}", other.representation()),
    };
    let back = ArcGraph::from_graph(&ListGraph::from_graph(&arcs).unwrap()).unwrap();
    let mut original = arcs.edges();
    let mut round_tripped = back.edges();
    original.sort_unstable();
    round_tripped.sort_unstable();
    assert_eq!(round_tripped, original);
}

#[test]
fn per_representation_result_order() {
    let list = build(Representation::List);
    let matrix = build(Representation::Matrix);
    let set = build(Representation::Set);
    let arcs = build(Representation::Arc);

    // Successors: insertion order for list/arc, ascending for matrix/set.
    assert_eq!(list.successors(0).unwrap(), vec![1, 1, 4]);
    assert_eq!(arcs.successors(0).unwrap(), vec![1, 1, 4]);
    assert_eq!(matrix.successors(2).unwrap(), vec![0, 2]);
    assert_eq!(set.successors(2).unwrap(), vec![0, 2]);
    assert_eq!(list.successors(2).unwrap(), vec![2, 0]);

    // Predecessors: ascending source for list/matrix/set, insertion order for arc.
    assert_eq!(list.predecessors(2).unwrap(), vec![1, 2, 4, 4]);
    assert_eq!(matrix.predecessors(2).unwrap(), vec![1, 2, 4]);
    assert_eq!(set.predecessors(2).unwrap(), vec![1, 2, 4]);
    assert_eq!(arcs.predecessors(2).unwrap(), vec![1, 2, 4, 4]);
    assert_eq!(arcs.predecessors(0).unwrap(), vec![3, 2]);
    assert_eq!(list.predecessors(0).unwrap(), vec![2, 3]);
}

#[test]
fn edge_counts_follow_dedup_policy() {
    for repr in Representation::ALL {
        let expected = if repr.keeps_parallel_edges() { 9 } else { 7 };
        assert_eq!(build(repr).edge_count(), expected, "{repr}");
    }
}

#[test]
fn conversion_does_not_alias_the_source() {
    let mut list = ListGraph::new(3);
    list.add_edge(0, 1).unwrap();
    let copy = SetGraph::from_graph(&list).unwrap();

    list.add_edge(1, 2).unwrap();
    assert_eq!(copy.edge_count(), 1);
    assert!(!copy.contains_edge(1, 2).unwrap());
}

#[test]
fn vertex_5_is_isolated_but_valid() {
    for repr in Representation::ALL {
        let graph = build(repr);
        assert!(graph.successors(5).unwrap().is_empty());
        assert!(graph.predecessors(5).unwrap().is_empty());
        assert!(graph.successors(6).is_err());
    }
}
