//! Property-based tests for graph invariants.
//!
//! Random edge lists are generated over a bounded vertex count and pushed through
//! the public API. The properties checked are the ones every caller relies on:
//! undirected symmetry, single-visit traversals, and edge-respecting topological
//! orders on DAGs.

use std::collections::HashSet;

use adjgraph::{algorithms, Graph, GraphBase, GraphType, VertexId};
use proptest::{
    collection::vec,
    prelude::{prop_assert, prop_assert_eq, Strategy},
    proptest,
    test_runner::Config as ProptestConfig,
};

const GRAPH_PROP_CASES: u32 = 256;
const MAX_VERTICES: usize = 24;

#[derive(Debug, Clone, Copy)]
enum EdgeOp {
    Add(usize, usize),
    Remove(usize, usize),
}

fn edge_list_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1..MAX_VERTICES).prop_flat_map(|n| (proptest::strategy::Just(n), vec((0..n, 0..n), 0..64)))
}

/// Edges only run from a lower to a higher index, so the graph is always a DAG.
fn dag_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    edge_list_strategy().prop_map(|(n, edges)| {
        let forward = edges
            .into_iter()
            .filter(|(u, v)| u != v)
            .map(|(u, v)| (u.min(v), u.max(v)))
            .collect();
        (n, forward)
    })
}

fn edge_ops_strategy() -> impl Strategy<Value = (usize, Vec<EdgeOp>)> {
    (1..MAX_VERTICES).prop_flat_map(|n| {
        let op = (0..n, 0..n, proptest::bool::ANY).prop_map(|(u, v, add)| {
            if add {
                EdgeOp::Add(u, v)
            } else {
                EdgeOp::Remove(u, v)
            }
        });
        (proptest::strategy::Just(n), vec(op, 0..96))
    })
}

fn build(kind: GraphType, n: usize, edges: &[(usize, usize)]) -> Graph<usize> {
    let mut graph = Graph::with_capacity(kind, n);
    for i in 0..n {
        graph.insert(i);
    }
    for &(u, v) in edges {
        graph
            .add_edge(VertexId::new(u), VertexId::new(v))
            .expect("generated edges are in range");
    }
    graph
}

fn reachable(graph: &Graph<usize>, start: VertexId) -> HashSet<usize> {
    let mut seen = HashSet::new();
    let mut pending = vec![start];
    while let Some(vertex) = pending.pop() {
        if seen.insert(vertex.index()) {
            pending.extend(graph.neighbors(vertex).expect("vertex in range"));
        }
    }
    seen
}

fn position_map(order: &[&usize], n: usize) -> Vec<usize> {
    let mut position = vec![usize::MAX; n];
    for (pos, &&payload) in order.iter().enumerate() {
        position[payload] = pos;
    }
    position
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: GRAPH_PROP_CASES,
        ..ProptestConfig::default()
    })]

    #[test]
    fn undirected_adjacency_stays_symmetric((n, ops) in edge_ops_strategy()) {
        let mut graph: Graph<usize> = build(GraphType::Undirected, n, &[]);
        for op in ops {
            match op {
                EdgeOp::Add(u, v) => graph.add_edge(VertexId::new(u), VertexId::new(v)).unwrap(),
                EdgeOp::Remove(u, v) => graph.remove_edge(VertexId::new(u), VertexId::new(v)).unwrap(),
            }
        }

        for u in graph.vertex_ids() {
            for v in graph.vertex_ids() {
                let forward = graph.neighbors(u).unwrap().filter(|&x| x == v).count();
                let backward = graph.neighbors(v).unwrap().filter(|&x| x == u).count();
                prop_assert_eq!(forward, backward);
            }
        }
    }

    #[test]
    fn traversals_visit_each_reachable_vertex_once((n, edges) in edge_list_strategy(), kind_bit in proptest::bool::ANY) {
        let kind = if kind_bit { GraphType::Directed } else { GraphType::Undirected };
        let graph = build(kind, n, &edges);

        for start in graph.vertex_ids() {
            let expected = reachable(&graph, start);
            for order in [
                graph.bfs_order(start).unwrap(),
                graph.dfs_order(start).unwrap(),
                graph.dfs_order_rec(start).unwrap(),
            ] {
                let seen: HashSet<usize> = order.iter().map(|&&p| p).collect();
                prop_assert_eq!(order.len(), seen.len());
                prop_assert_eq!(&seen, &expected);
                prop_assert_eq!(*order[0], start.index());
            }
        }
    }

    #[test]
    fn dag_topological_orders_respect_edges((n, edges) in dag_strategy()) {
        let graph = build(GraphType::Directed, n, &edges);
        prop_assert!(!graph.has_cycle());

        for order in [
            graph.topo_sort_bfs().unwrap(),
            graph.topo_sort_dfs_rec().unwrap(),
        ] {
            prop_assert_eq!(order.len(), n);
            let position = position_map(&order, n);
            prop_assert!(position.iter().all(|&p| p < n));
            for &(u, v) in &edges {
                prop_assert!(position[u] < position[v]);
            }
        }
    }

    #[test]
    fn cycle_detection_agrees_with_kahn((n, edges) in edge_list_strategy()) {
        // Kahn's algorithm leaves vertices behind exactly when a cycle exists
        let graph = build(GraphType::Directed, n, &edges);
        prop_assert_eq!(
            graph.has_cycle(),
            algorithms::topological_sort_kahn(&graph).is_none()
        );
        prop_assert_eq!(graph.has_cycle(), graph.topo_sort_bfs().is_none());
        prop_assert_eq!(graph.has_cycle(), graph.topo_sort_dfs_rec().is_none());
    }
}
