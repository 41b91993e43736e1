//! Property-based invariants for the directed graph and its traversals.
//!
//! Graphs are generated as a vertex count plus an arbitrary list of weighted
//! edges (self-loops and repeated pairs included), then checked against a
//! plain adjacency model.

use std::collections::{BTreeMap, BTreeSet};

use kgraph_core::graph::traversal::{bfs_order, bfs_reaches, dfs_order};
use kgraph_core::{DirectedGraph, VertexId};
use proptest::{
    collection::vec,
    prelude::{prop_assert, prop_assert_eq, Just, Strategy},
    proptest,
    test_runner::{Config as ProptestConfig, FileFailurePersistence},
};

const GRAPH_PROP_CASES: u32 = 128;
const GRAPH_MAX_VERTICES: usize = 12;
const GRAPH_MAX_EDGES: usize = 40;

type EdgeList = Vec<(usize, usize, f32)>;

fn graph_strategy() -> impl Strategy<Value = (usize, EdgeList)> {
    (1..=GRAPH_MAX_VERTICES).prop_flat_map(|n| {
        (
            Just(n),
            vec((0..n, 0..n, -10.0_f32..10.0_f32), 0..GRAPH_MAX_EDGES),
        )
    })
}

fn graph_proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: GRAPH_PROP_CASES,
        failure_persistence: Some(Box::new(FileFailurePersistence::WithSource(
            "graph-property-regressions",
        ))),
        ..ProptestConfig::default()
    }
}

#[allow(clippy::cast_possible_truncation)]
fn label(i: usize) -> u32 {
    i as u32
}

fn build(n: usize, edges: &EdgeList) -> DirectedGraph<u32> {
    let mut graph = DirectedGraph::new();
    for i in 0..n {
        graph.add(label(i));
    }
    for &(from, to, weight) in edges {
        graph
            .connect(&label(from), &label(to), weight)
            .expect("generated endpoints exist");
    }
    graph
}

fn id_of(graph: &DirectedGraph<u32>, i: usize) -> VertexId {
    graph.find(&label(i)).expect("vertex was added")
}

/// Last weight written per ordered pair.
fn final_weights(edges: &EdgeList) -> BTreeMap<(usize, usize), f32> {
    edges
        .iter()
        .map(|&(from, to, weight)| ((from, to), weight))
        .collect()
}

/// Reference reachability over the deduplicated pairs.
fn reference_reachable(n: usize, pairs: &BTreeSet<(usize, usize)>, start: usize) -> BTreeSet<usize> {
    let mut seen = BTreeSet::from([start]);
    let mut frontier = vec![start];
    while let Some(u) = frontier.pop() {
        for &(_, v) in pairs.range((u, 0)..(u, n)) {
            if seen.insert(v) {
                frontier.push(v);
            }
        }
    }
    seen
}

proptest! {
    #![proptest_config(graph_proptest_config())]

    #[test]
    fn test_degrees_match_edge_count((n, edges) in graph_strategy()) {
        let graph = build(n, &edges);
        let weights = final_weights(&edges);

        prop_assert_eq!(graph.edge_count(), weights.len());

        let mut total_in = 0;
        let mut total_out = 0;
        for (_, vertex) in graph.iter() {
            prop_assert_eq!(vertex.in_degree() + vertex.out_degree(), vertex.all_edges().len());
            total_in += vertex.in_degree();
            total_out += vertex.out_degree();
        }
        prop_assert_eq!(total_in, weights.len());
        prop_assert_eq!(total_out, weights.len());
    }

    #[test]
    fn test_weight_is_last_written((n, edges) in graph_strategy()) {
        let graph = build(n, &edges);
        for ((from, to), weight) in final_weights(&edges) {
            prop_assert_eq!(graph.weight(&label(from), &label(to)), Ok(weight));
        }
    }

    #[test]
    fn test_add_is_idempotent((n, edges) in graph_strategy()) {
        let mut graph = build(n, &edges);
        let before = graph.to_string();
        for i in 0..n {
            let id = graph.add(label(i));
            prop_assert_eq!(id, id_of(&graph, i));
        }
        prop_assert_eq!(graph.size(), n);
        prop_assert_eq!(graph.to_string(), before);
    }

    #[test]
    fn test_traversals_visit_reachable_vertices_once((n, edges) in graph_strategy(), start in 0..GRAPH_MAX_VERTICES) {
        let start = start % n;
        let graph = build(n, &edges);
        let pairs: BTreeSet<(usize, usize)> = final_weights(&edges).into_keys().collect();
        let expected: BTreeSet<VertexId> = reference_reachable(n, &pairs, start)
            .into_iter()
            .map(|i| id_of(&graph, i))
            .collect();
        let source = id_of(&graph, start);

        for order in [bfs_order(&graph, source), dfs_order(&graph, source)] {
            prop_assert_eq!(order.first().copied(), Some(source));
            let unique: BTreeSet<VertexId> = order.iter().copied().collect();
            prop_assert_eq!(unique.len(), order.len());
            prop_assert_eq!(&unique, &expected);
        }
    }

    #[test]
    fn test_reachability_matches_reference((n, edges) in graph_strategy()) {
        let graph = build(n, &edges);
        let pairs: BTreeSet<(usize, usize)> = final_weights(&edges).into_keys().collect();

        for from in 0..n {
            let reachable = reference_reachable(n, &pairs, from);
            prop_assert!(bfs_reaches(&graph, id_of(&graph, from), id_of(&graph, from)));
            for to in 0..n {
                prop_assert_eq!(
                    bfs_reaches(&graph, id_of(&graph, from), id_of(&graph, to)),
                    reachable.contains(&to)
                );
            }
        }
    }

    #[test]
    fn test_disconnect_all_leaves_isolated_vertices((n, edges) in graph_strategy()) {
        let mut graph = build(n, &edges);
        for &(from, to, _) in &edges {
            graph.disconnect(&label(from), &label(to)).expect("endpoints exist");
        }
        prop_assert_eq!(graph.edge_count(), 0);
        for (_, vertex) in graph.iter() {
            prop_assert_eq!(vertex.in_degree(), 0);
            prop_assert_eq!(vertex.out_degree(), 0);
            prop_assert!(vertex.all_edges().is_empty());
        }
    }
}
