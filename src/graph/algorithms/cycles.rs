//! Cycle detection for directed graphs.
//!
//! A directed graph is cyclic exactly when a depth-first search finds a back edge: an
//! edge to a vertex that is still on the active search path. Two per-vertex flags
//! separate the states that matter:
//!
//! - `visited` - the search has entered this vertex at some point
//! - `on_path` - the vertex is on the current path (entered, not yet finished)
//!
//! An edge into a finished vertex (visited, not on the path) is a cross or forward
//! edge and never indicates a cycle.

use tracing::debug;

use crate::graph::{Successors, VertexId};

/// Checks whether any cycle exists anywhere in the graph.
///
/// Runs a depth-first search from every vertex not yet visited, in ascending index
/// order, so disconnected components are all covered. The search stops at the first
/// back edge.
///
/// Self-loops count as cycles. The algorithm does not look at whether the graph is
/// directed: for a graph that stores every edge in both directions, each edge looks
/// like a two-vertex cycle.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V) for the two flag arrays and the frame stack
///
/// # Examples
///
/// ```rust
/// use adjgraph::{algorithms::has_cycle, Graph, GraphType};
///
/// let mut dag: Graph<()> = Graph::new(GraphType::Directed);
/// let a = dag.insert(());
/// let b = dag.insert(());
/// let c = dag.insert(());
/// dag.add_edge(a, b)?;
/// dag.add_edge(b, c)?;
/// assert!(!has_cycle(&dag));
///
/// dag.add_edge(c, a)?;
/// assert!(has_cycle(&dag));
/// # Ok::<(), adjgraph::Error>(())
/// ```
pub fn has_cycle<G: Successors>(graph: &G) -> bool {
    let vertex_count = graph.vertex_count();
    let mut visited = vec![false; vertex_count];
    let mut on_path = vec![false; vertex_count];

    graph.vertex_ids().any(|vertex| {
        !visited[vertex.index()] && has_cycle_dfs(graph, vertex, &mut visited, &mut on_path)
    })
}

/// Checks whether a cycle is reachable from the given vertex.
///
/// Only vertices reachable from `start` are examined. An out-of-range `start` returns
/// `false`.
///
/// # Examples
///
/// ```rust
/// use adjgraph::{algorithms::has_cycle_from, Graph, GraphType};
///
/// // A -> B <-> C, but nothing leads back into A
/// let mut graph: Graph<char> = Graph::new(GraphType::Directed);
/// let a = graph.insert('A');
/// let b = graph.insert('B');
/// let c = graph.insert('C');
/// let d = graph.insert('D');
/// graph.add_edge(a, b)?;
/// graph.add_edge(b, c)?;
/// graph.add_edge(c, b)?;
///
/// assert!(has_cycle_from(&graph, a));
/// assert!(!has_cycle_from(&graph, d));
/// # Ok::<(), adjgraph::Error>(())
/// ```
pub fn has_cycle_from<G: Successors>(graph: &G, start: VertexId) -> bool {
    let vertex_count = graph.vertex_count();
    if start.index() >= vertex_count {
        return false;
    }

    let mut visited = vec![false; vertex_count];
    let mut on_path = vec![false; vertex_count];

    has_cycle_dfs(graph, start, &mut visited, &mut on_path)
}

/// Iterative back-edge search.
///
/// Each frame holds a vertex and its partially consumed successor iterator, so the
/// search depth is bounded by heap memory rather than the thread's stack.
fn has_cycle_dfs<G: Successors>(
    graph: &G,
    start: VertexId,
    visited: &mut [bool],
    on_path: &mut [bool],
) -> bool {
    if visited[start.index()] {
        return false;
    }

    visited[start.index()] = true;
    on_path[start.index()] = true;
    let mut frames = vec![(start, graph.successors(start))];

    while let Some((vertex, successors)) = frames.last_mut() {
        let vertex = *vertex;
        match successors.next() {
            Some(successor) => {
                let idx = successor.index();
                if on_path[idx] {
                    debug!(from = %vertex, to = %successor, "back edge closes a cycle");
                    return true;
                }
                if !visited[idx] {
                    visited[idx] = true;
                    on_path[idx] = true;
                    frames.push((successor, graph.successors(successor)));
                }
            }
            None => {
                on_path[vertex.index()] = false;
                frames.pop();
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use crate::graph::{
        algorithms::cycles::{has_cycle, has_cycle_from},
        Graph, GraphType, VertexId,
    };

    fn directed(vertices: usize, edges: &[(usize, usize)]) -> Graph<usize> {
        let mut graph = Graph::new(GraphType::Directed);
        for i in 0..vertices {
            graph.insert(i);
        }
        for &(u, v) in edges {
            graph.add_edge(VertexId::new(u), VertexId::new(v)).unwrap();
        }
        graph
    }

    #[test]
    fn test_has_cycle_empty_graph() {
        let graph: Graph<()> = Graph::new(GraphType::Directed);
        assert!(!has_cycle(&graph));
    }

    #[test]
    fn test_has_cycle_single_vertex_no_loop() {
        let graph = directed(1, &[]);
        assert!(!has_cycle(&graph));
    }

    #[test]
    fn test_has_cycle_self_loop() {
        let graph = directed(1, &[(0, 0)]);
        assert!(has_cycle(&graph));
    }

    #[test]
    fn test_has_cycle_linear() {
        let graph = directed(3, &[(0, 1), (1, 2)]);
        assert!(!has_cycle(&graph));
    }

    #[test]
    fn test_has_cycle_triangle() {
        let graph = directed(3, &[(0, 1), (1, 2), (2, 0)]);
        assert!(has_cycle(&graph));
    }

    #[test]
    fn test_has_cycle_diamond_is_acyclic() {
        // D is reached twice, through a finished vertex the second time
        let graph = directed(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        assert!(!has_cycle(&graph));
    }

    #[test]
    fn test_has_cycle_in_later_component() {
        // 0 -> 1 is acyclic; 2 <-> 3 is not and is unreachable from 0
        let graph = directed(4, &[(0, 1), (2, 3), (3, 2)]);
        assert!(has_cycle(&graph));
        assert!(!has_cycle_from(&graph, VertexId::new(0)));
        assert!(has_cycle_from(&graph, VertexId::new(2)));
    }

    #[test]
    fn test_has_cycle_cross_edge_between_trees() {
        // Second DFS tree points into the finished first tree
        let graph = directed(3, &[(0, 1), (2, 1)]);
        assert!(!has_cycle(&graph));
    }

    #[test]
    fn test_has_cycle_complex() {
        // A -> B -> C -> D
        //      ^         |
        //      +---------+
        let graph = directed(4, &[(0, 1), (1, 2), (2, 3), (3, 1)]);
        assert!(has_cycle(&graph));
    }

    #[test]
    fn test_has_cycle_undirected_edge_looks_cyclic() {
        let mut graph: Graph<()> = Graph::new(GraphType::Undirected);
        let a = graph.insert(());
        let b = graph.insert(());
        assert!(!has_cycle(&graph));

        graph.add_edge(a, b).unwrap();
        assert!(has_cycle(&graph));
    }

    #[test]
    fn test_has_cycle_deep_chain() {
        let n = 100_000;
        let edges: Vec<(usize, usize)> = (1..n).map(|i| (i - 1, i)).collect();
        let mut graph = directed(n, &edges);
        assert!(!has_cycle(&graph));

        graph.add_edge(VertexId::new(n - 1), VertexId::new(0)).unwrap();
        assert!(has_cycle(&graph));
        assert!(has_cycle_from(&graph, VertexId::new(n / 2)));
    }

    #[test]
    fn test_has_cycle_path_cleared_on_backtrack() {
        // 0 -> 1, 0 -> 2 -> 1: 1 is finished before 2 reaches it
        let graph = directed(3, &[(0, 1), (0, 2), (2, 1)]);
        assert!(!has_cycle(&graph));
        assert!(!has_cycle_from(&graph, VertexId::new(0)));
    }

    #[test]
    fn test_has_cycle_from_out_of_range() {
        let graph = directed(2, &[(0, 1), (1, 0)]);
        assert!(!has_cycle_from(&graph, VertexId::new(5)));
    }
}
