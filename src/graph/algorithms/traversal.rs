//! Graph traversal algorithms.
//!
//! This module provides breadth-first and depth-first traversals over any graph
//! implementing [`Successors`].
//!
//! # Algorithms
//!
//! - [`bfs`] / [`bfs_with`] - Breadth-first search, marking vertices when enqueued
//! - [`dfs`] / [`dfs_with`] - Iterative depth-first search, marking vertices when popped
//! - [`dfs_recursive`] - Recursive depth-first search
//!
//! # Iterative vs Recursive DFS
//!
//! The two depth-first variants visit the same set of vertices but not in the same
//! order. The iterative variant pushes every unvisited neighbor in adjacency order,
//! so the *last* listed neighbor is popped next. The recursive variant descends into
//! the *first* listed neighbor first. Both orders are valid depth-first orders and
//! both are kept as they are.
//!
//! The iterators are lazy; [`dfs_recursive`] returns a collected vector.

use std::collections::VecDeque;

use crate::graph::{
    worklist::{Fifo, Lifo},
    Successors, VertexId,
};

/// Breadth-first search iterator over graph vertices.
///
/// Vertices are marked as visited when they are enqueued, so each vertex enters the
/// work queue at most once and the queue never holds more than `vertex_count` entries.
///
/// # Type Parameters
///
/// * `'g` - Lifetime of the graph reference
/// * `G` - Graph type implementing [`Successors`]
/// * `Q` - FIFO work list, [`VecDeque`] unless supplied through [`bfs_with`]
pub struct BfsIterator<'g, G: Successors, Q: Fifo<VertexId> = VecDeque<VertexId>> {
    graph: &'g G,
    queue: Q,
    visited: Vec<bool>,
}

impl<'g, G: Successors, Q: Fifo<VertexId>> BfsIterator<'g, G, Q> {
    fn new(graph: &'g G, start: VertexId, mut queue: Q) -> Self {
        let vertex_count = graph.vertex_count();
        if start.index() >= vertex_count {
            return BfsIterator {
                graph,
                queue,
                visited: Vec::new(),
            };
        }

        let mut visited = vec![false; vertex_count];
        visited[start.index()] = true;
        queue.enqueue(start);

        BfsIterator {
            graph,
            queue,
            visited,
        }
    }
}

impl<G: Successors, Q: Fifo<VertexId>> Iterator for BfsIterator<'_, G, Q> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.visited.is_empty() {
            return None;
        }
        let vertex = self.queue.dequeue()?;

        for succ in self.graph.successors(vertex) {
            if !self.visited[succ.index()] {
                self.visited[succ.index()] = true;
                self.queue.enqueue(succ);
            }
        }

        Some(vertex)
    }
}

/// Returns a breadth-first iterator starting from the given vertex.
///
/// Each vertex reachable from `start` is yielded exactly once, in order of increasing
/// distance; ties are broken by adjacency-list order. An out-of-range `start` yields
/// nothing.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V) for the visited set and queue
///
/// # Examples
///
/// ```rust
/// use adjgraph::{algorithms::bfs, Graph, GraphType, VertexId};
///
/// let mut graph: Graph<&str> = Graph::new(GraphType::Directed);
/// let a = graph.insert("A");
/// let b = graph.insert("B");
/// let c = graph.insert("C");
/// graph.add_edge(a, b)?;
/// graph.add_edge(b, c)?;
///
/// let order: Vec<VertexId> = bfs(&graph, a).collect();
/// assert_eq!(order, vec![a, b, c]);
/// # Ok::<(), adjgraph::Error>(())
/// ```
pub fn bfs<G: Successors>(graph: &G, start: VertexId) -> BfsIterator<'_, G> {
    BfsIterator::new(
        graph,
        start,
        VecDeque::with_capacity(graph.vertex_count()),
    )
}

/// Like [`bfs`], but driven by a caller-supplied FIFO work list.
///
/// The list should be empty; any items already in it are expanded after `start`.
pub fn bfs_with<G: Successors, Q: Fifo<VertexId>>(
    graph: &G,
    start: VertexId,
    queue: Q,
) -> BfsIterator<'_, G, Q> {
    BfsIterator::new(graph, start, queue)
}

/// Iterative depth-first search iterator over graph vertices.
///
/// Vertices are marked as visited when they are *popped*, not when pushed. A vertex can
/// therefore sit on the stack several times; the stale copies are skipped when they
/// surface. After visiting a vertex, all of its currently unvisited neighbors are
/// pushed in adjacency order, so the last-listed neighbor is explored first.
///
/// # Type Parameters
///
/// * `'g` - Lifetime of the graph reference
/// * `G` - Graph type implementing [`Successors`]
/// * `S` - LIFO work list, [`Vec`] unless supplied through [`dfs_with`]
pub struct DfsIterator<'g, G: Successors, S: Lifo<VertexId> = Vec<VertexId>> {
    graph: &'g G,
    stack: S,
    visited: Vec<bool>,
}

impl<'g, G: Successors, S: Lifo<VertexId>> DfsIterator<'g, G, S> {
    fn new(graph: &'g G, start: VertexId, mut stack: S) -> Self {
        let vertex_count = graph.vertex_count();
        if start.index() >= vertex_count {
            return DfsIterator {
                graph,
                stack,
                visited: Vec::new(),
            };
        }

        stack.push(start);

        DfsIterator {
            graph,
            stack,
            visited: vec![false; vertex_count],
        }
    }
}

impl<G: Successors, S: Lifo<VertexId>> Iterator for DfsIterator<'_, G, S> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.visited.is_empty() {
            return None;
        }

        while let Some(vertex) = self.stack.pop() {
            if self.visited[vertex.index()] {
                continue;
            }
            self.visited[vertex.index()] = true;

            for succ in self.graph.successors(vertex) {
                if !self.visited[succ.index()] {
                    self.stack.push(succ);
                }
            }

            return Some(vertex);
        }

        None
    }
}

/// Returns an iterative depth-first iterator starting from the given vertex.
///
/// Each vertex reachable from `start` is yielded exactly once, in pre-order. Because
/// neighbors are pushed in adjacency order, siblings are explored last-listed first;
/// see the module documentation for how this differs from [`dfs_recursive`]. An
/// out-of-range `start` yields nothing.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E) worst case, since a vertex may be pushed once per incoming edge
///
/// # Examples
///
/// ```rust
/// use adjgraph::{algorithms::dfs, Graph, GraphType, VertexId};
///
/// let mut graph: Graph<&str> = Graph::new(GraphType::Directed);
/// let a = graph.insert("A");
/// let b = graph.insert("B");
/// let c = graph.insert("C");
/// graph.add_edge(a, b)?;
/// graph.add_edge(a, c)?;
///
/// // A's adjacency list is [C, B]; B is pushed last and therefore visited first
/// let order: Vec<VertexId> = dfs(&graph, a).collect();
/// assert_eq!(order, vec![a, b, c]);
/// # Ok::<(), adjgraph::Error>(())
/// ```
pub fn dfs<G: Successors>(graph: &G, start: VertexId) -> DfsIterator<'_, G> {
    DfsIterator::new(graph, start, Vec::with_capacity(graph.vertex_count()))
}

/// Like [`dfs`], but driven by a caller-supplied LIFO work list.
pub fn dfs_with<G: Successors, S: Lifo<VertexId>>(
    graph: &G,
    start: VertexId,
    stack: S,
) -> DfsIterator<'_, G, S> {
    DfsIterator::new(graph, start, stack)
}

/// Computes a recursive depth-first pre-order from the given vertex.
///
/// Marks the vertex, records it, then recurses into each unvisited neighbor in
/// adjacency-list order. Recursion depth is bounded by the longest simple path in the
/// reachable subgraph; for very deep graphs prefer [`dfs`]. An out-of-range `start`
/// returns an empty vector.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V) plus call-stack depth
///
/// # Examples
///
/// ```rust
/// use adjgraph::{algorithms::dfs_recursive, Graph, GraphType};
///
/// let mut graph: Graph<&str> = Graph::new(GraphType::Directed);
/// let a = graph.insert("A");
/// let b = graph.insert("B");
/// let c = graph.insert("C");
/// graph.add_edge(a, b)?;
/// graph.add_edge(a, c)?;
///
/// // A's adjacency list is [C, B]; the first-listed neighbor is visited first
/// assert_eq!(dfs_recursive(&graph, a), vec![a, c, b]);
/// # Ok::<(), adjgraph::Error>(())
/// ```
pub fn dfs_recursive<G: Successors>(graph: &G, start: VertexId) -> Vec<VertexId> {
    let vertex_count = graph.vertex_count();
    if start.index() >= vertex_count {
        return Vec::new();
    }

    let mut visited = vec![false; vertex_count];
    let mut order = Vec::with_capacity(vertex_count);
    dfs_recursive_visit(graph, start, &mut visited, &mut order);
    order
}

fn dfs_recursive_visit<G: Successors>(
    graph: &G,
    vertex: VertexId,
    visited: &mut [bool],
    order: &mut Vec<VertexId>,
) {
    if visited[vertex.index()] {
        return;
    }
    visited[vertex.index()] = true;
    order.push(vertex);

    for succ in graph.successors(vertex) {
        if !visited[succ.index()] {
            dfs_recursive_visit(graph, succ, visited, order);
        }
    }
}
