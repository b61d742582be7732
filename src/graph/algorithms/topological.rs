//! Topological sorting for directed acyclic graphs (DAGs).
//!
//! A topological ordering lists every vertex such that for each edge `u -> v`, `u`
//! comes before `v`. Two classic constructions are provided; they generally produce
//! different (equally valid) orders for the same graph:
//!
//! - [`topological_sort_kahn`] - Breadth-first, repeatedly emitting vertices whose
//!   in-degree has dropped to zero
//! - [`topological_sort_dfs`] - Depth-first, emitting vertices in reverse post-order
//!
//! Both return `None` when the graph has a cycle, since no ordering exists then.

use std::collections::VecDeque;

use crate::graph::{
    algorithms::cycles::has_cycle,
    worklist::{Fifo, Lifo},
    Successors, VertexId,
};

/// Computes a topological ordering with Kahn's algorithm.
///
/// # Algorithm
///
/// 1. Compute the in-degree of every vertex by scanning all adjacency lists
/// 2. Enqueue every vertex with in-degree 0, in ascending index order
/// 3. While the queue is not empty:
///    - Dequeue a vertex and append it to the result
///    - Decrement the in-degree of each of its successors, in adjacency order
///    - Enqueue a successor as soon as its in-degree reaches exactly 0
/// 4. If every vertex was emitted, return the result; otherwise a cycle kept some
///    in-degrees above zero and `None` is returned
///
/// Ties between vertices that become available together are resolved by queue
/// arrival order, which makes the output reproducible for a given graph.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V) for the in-degree counts and queue
///
/// # Examples
///
/// ```rust
/// use adjgraph::{algorithms::topological_sort_kahn, Graph, GraphType};
///
/// let mut graph: Graph<&str> = Graph::new(GraphType::Directed);
/// let a = graph.insert("A");
/// let b = graph.insert("B");
/// let c = graph.insert("C");
/// let d = graph.insert("D");
/// graph.add_edge(a, b)?;
/// graph.add_edge(a, c)?;
/// graph.add_edge(b, d)?;
/// graph.add_edge(c, d)?;
///
/// // A's adjacency list is [C, B], so C reaches in-degree 0 first
/// assert_eq!(topological_sort_kahn(&graph), Some(vec![a, c, b, d]));
/// # Ok::<(), adjgraph::Error>(())
/// ```
pub fn topological_sort_kahn<G: Successors>(graph: &G) -> Option<Vec<VertexId>> {
    let vertex_count = graph.vertex_count();

    let mut in_degree: Vec<usize> = vec![0; vertex_count];
    for vertex in graph.vertex_ids() {
        for successor in graph.successors(vertex) {
            in_degree[successor.index()] += 1;
        }
    }

    let mut queue: VecDeque<VertexId> = VecDeque::with_capacity(vertex_count);
    for vertex in graph.vertex_ids() {
        if in_degree[vertex.index()] == 0 {
            queue.enqueue(vertex);
        }
    }

    let mut result = Vec::with_capacity(vertex_count);

    while let Some(vertex) = queue.dequeue() {
        result.push(vertex);

        for successor in graph.successors(vertex) {
            in_degree[successor.index()] -= 1;
            if in_degree[successor.index()] == 0 {
                queue.enqueue(successor);
            }
        }
    }

    if result.len() == vertex_count {
        Some(result)
    } else {
        None
    }
}

/// Computes a topological ordering from depth-first post-order.
///
/// Refuses cyclic graphs up front (see [`has_cycle`]). Otherwise, for every vertex not
/// yet visited in ascending index order, a recursive search finishes all unvisited
/// successors first and then pushes the vertex onto a LIFO stack. Popping the whole
/// stack yields the reverse post-order, which is a valid topological order.
///
/// # Complexity
///
/// - Time: O(V + E), plus the O(V + E) cycle check
/// - Space: O(V) plus recursion depth
///
/// # Examples
///
/// ```rust
/// use adjgraph::{algorithms::topological_sort_dfs, Graph, GraphType};
///
/// let mut graph: Graph<&str> = Graph::new(GraphType::Directed);
/// let a = graph.insert("A");
/// let b = graph.insert("B");
/// let c = graph.insert("C");
/// let d = graph.insert("D");
/// graph.add_edge(a, b)?;
/// graph.add_edge(a, c)?;
/// graph.add_edge(b, d)?;
/// graph.add_edge(c, d)?;
///
/// assert_eq!(topological_sort_dfs(&graph), Some(vec![a, b, c, d]));
///
/// graph.add_edge(d, a)?;
/// assert_eq!(topological_sort_dfs(&graph), None);
/// # Ok::<(), adjgraph::Error>(())
/// ```
pub fn topological_sort_dfs<G: Successors>(graph: &G) -> Option<Vec<VertexId>> {
    if has_cycle(graph) {
        return None;
    }

    let vertex_count = graph.vertex_count();
    let mut visited = vec![false; vertex_count];
    let mut finished: Vec<VertexId> = Vec::with_capacity(vertex_count);

    for vertex in graph.vertex_ids() {
        if !visited[vertex.index()] {
            finish_dfs(graph, vertex, &mut visited, &mut finished);
        }
    }

    let mut result = Vec::with_capacity(vertex_count);
    while let Some(vertex) = Lifo::pop(&mut finished) {
        result.push(vertex);
    }
    Some(result)
}

fn finish_dfs<G: Successors, S: Lifo<VertexId>>(
    graph: &G,
    vertex: VertexId,
    visited: &mut [bool],
    finished: &mut S,
) {
    if visited[vertex.index()] {
        return;
    }
    visited[vertex.index()] = true;

    for successor in graph.successors(vertex) {
        if !visited[successor.index()] {
            finish_dfs(graph, successor, visited, finished);
        }
    }
    finished.push(vertex);
}

#[cfg(test)]
mod tests {
    use crate::graph::{
        algorithms::topological::{topological_sort_dfs, topological_sort_kahn},
        Graph, GraphType, VertexId,
    };

    fn v(index: usize) -> VertexId {
        VertexId::new(index)
    }

    fn directed(vertices: usize, edges: &[(usize, usize)]) -> Graph<usize> {
        let mut graph = Graph::new(GraphType::Directed);
        for i in 0..vertices {
            graph.insert(i);
        }
        for &(u, w) in edges {
            graph.add_edge(v(u), v(w)).unwrap();
        }
        graph
    }

    fn assert_topological(graph: &Graph<usize>, edges: &[(usize, usize)], order: &[VertexId]) {
        assert_eq!(order.len(), graph.size());
        let pos = |n: usize| order.iter().position(|&x| x == v(n)).unwrap();
        for &(u, w) in edges {
            assert!(pos(u) < pos(w), "edge {u} -> {w} violated by {order:?}");
        }
    }

    #[test]
    fn test_empty_graph() {
        let graph = directed(0, &[]);
        assert_eq!(topological_sort_kahn(&graph), Some(Vec::new()));
        assert_eq!(topological_sort_dfs(&graph), Some(Vec::new()));
    }

    #[test]
    fn test_single_vertex() {
        let graph = directed(1, &[]);
        assert_eq!(topological_sort_kahn(&graph), Some(vec![v(0)]));
        assert_eq!(topological_sort_dfs(&graph), Some(vec![v(0)]));
    }

    #[test]
    fn test_chain_has_unique_order() {
        let edges = [(0, 1), (1, 2), (2, 3)];
        let graph = directed(4, &edges);
        let expected = vec![v(0), v(1), v(2), v(3)];
        assert_eq!(topological_sort_kahn(&graph), Some(expected.clone()));
        assert_eq!(topological_sort_dfs(&graph), Some(expected));
    }

    #[test]
    fn test_chain_inserted_backwards() {
        // 3 -> 2 -> 1 -> 0
        let graph = directed(4, &[(3, 2), (2, 1), (1, 0)]);
        let expected = vec![v(3), v(2), v(1), v(0)];
        assert_eq!(topological_sort_kahn(&graph), Some(expected.clone()));
        assert_eq!(topological_sort_dfs(&graph), Some(expected));
    }

    #[test]
    fn test_diamond() {
        let edges = [(0, 1), (0, 2), (1, 3), (2, 3)];
        let graph = directed(4, &edges);

        let kahn = topological_sort_kahn(&graph).unwrap();
        assert_topological(&graph, &edges, &kahn);
        assert_eq!(kahn, vec![v(0), v(2), v(1), v(3)]);

        let dfs = topological_sort_dfs(&graph).unwrap();
        assert_topological(&graph, &edges, &dfs);
        assert_eq!(dfs, vec![v(0), v(1), v(2), v(3)]);
    }

    #[test]
    fn test_kahn_seeds_in_ascending_index_order() {
        // Three independent roots, all feeding 3
        let edges = [(2, 3), (0, 3), (1, 3)];
        let graph = directed(4, &edges);
        assert_eq!(
            topological_sort_kahn(&graph),
            Some(vec![v(0), v(1), v(2), v(3)])
        );
    }

    #[test]
    fn test_disconnected_components() {
        let edges = [(0, 1), (2, 3)];
        let graph = directed(5, &edges);

        let kahn = topological_sort_kahn(&graph).unwrap();
        assert_topological(&graph, &edges, &kahn);

        let dfs = topological_sort_dfs(&graph).unwrap();
        assert_topological(&graph, &edges, &dfs);
    }

    #[test]
    fn test_wide_dag() {
        let edges: Vec<(usize, usize)> = (1..6).map(|child| (0, child)).collect();
        let graph = directed(6, &edges);

        let kahn = topological_sort_kahn(&graph).unwrap();
        assert_eq!(kahn[0], v(0));
        assert_topological(&graph, &edges, &kahn);

        let dfs = topological_sort_dfs(&graph).unwrap();
        assert_eq!(dfs[0], v(0));
        assert_topological(&graph, &edges, &dfs);
    }

    #[test]
    fn test_deep_dag() {
        let edges: Vec<(usize, usize)> = (0..99).map(|i| (i, i + 1)).collect();
        let graph = directed(100, &edges);
        let expected: Vec<VertexId> = (0..100).map(v).collect();

        assert_eq!(topological_sort_kahn(&graph), Some(expected.clone()));
        assert_eq!(topological_sort_dfs(&graph), Some(expected));
    }

    #[test]
    fn test_cycles_have_no_order() {
        let triangle = directed(3, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(topological_sort_kahn(&triangle), None);
        assert_eq!(topological_sort_dfs(&triangle), None);

        let self_loop = directed(1, &[(0, 0)]);
        assert_eq!(topological_sort_kahn(&self_loop), None);
        assert_eq!(topological_sort_dfs(&self_loop), None);

        // Cycle B -> C -> D -> B behind an acyclic entry A
        let partial = directed(4, &[(0, 1), (1, 2), (2, 3), (3, 1)]);
        assert_eq!(topological_sort_kahn(&partial), None);
        assert_eq!(topological_sort_dfs(&partial), None);
    }

    #[test]
    fn test_duplicate_edges() {
        let edges = [(0, 1), (0, 1), (1, 2)];
        let graph = directed(3, &edges);
        let expected = vec![v(0), v(1), v(2)];
        assert_eq!(topological_sort_kahn(&graph), Some(expected.clone()));
        assert_eq!(topological_sort_dfs(&graph), Some(expected));
    }
}
