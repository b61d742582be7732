//! Adjacency-list graph container.
//!
//! This module provides [`Graph`], the container every public operation of the crate
//! goes through. Vertex payloads and adjacency lists are kept in two parallel vectors
//! indexed by [`VertexId`]; the traversal and ordering operations delegate to
//! [`crate::graph::algorithms`] and map the resulting identifiers back to payloads.

use std::{collections::VecDeque, fmt};

use tracing::{debug, trace};

use crate::{
    graph::{
        algorithms,
        kind::GraphType,
        traits::{GraphBase, Successors},
        vertex::VertexId,
    },
    Error, Result,
};

/// A directed or undirected graph over vertex payloads of type `T`.
///
/// `Graph` supports:
///
/// - Generic vertex payloads (`T`), with no trait requirements
/// - Dense vertex identifiers assigned in insertion order
/// - Edge insertion and removal by identifier pair, mirrored for undirected graphs
/// - Duplicate edges and self-loops
/// - BFS, iterative DFS and recursive DFS from a start vertex
/// - Cycle detection and two topological sorts
///
/// # Memory Layout
///
/// - `vertices[i]` holds the payload of vertex `i`
/// - `adjacency[i]` holds the out-neighbors of vertex `i`, most recently added first
///
/// Both vectors always have the same length. Vertices are never removed, so an
/// identifier stays valid for the lifetime of the graph.
///
/// # Adjacency Order
///
/// New edges are *prepended* to the source's adjacency list. Every algorithm expands
/// neighbors in list order, so after `add_edge(a, b)` and `add_edge(a, c)` the
/// neighbors of `a` are visited as `c, b`.
///
/// # Thread Safety
///
/// `Graph<T>` is [`Send`] and [`Sync`] when `T` is. Mutation takes `&mut self`; there
/// is no internal locking.
///
/// # Examples
///
/// ```rust
/// use adjgraph::{Graph, GraphType};
///
/// let mut graph: Graph<&str> = Graph::new(GraphType::Directed);
/// let a = graph.insert("A");
/// let b = graph.insert("B");
/// let c = graph.insert("C");
/// let d = graph.insert("D");
///
/// graph.add_edge(a, b)?;
/// graph.add_edge(a, c)?;
/// graph.add_edge(b, d)?;
/// graph.add_edge(c, d)?;
///
/// assert!(!graph.has_cycle());
/// assert_eq!(graph.topo_sort_bfs(), Some(vec![&"A", &"C", &"B", &"D"]));
/// assert_eq!(graph.bfs_order(a)?, vec![&"A", &"C", &"B", &"D"]);
/// # Ok::<(), adjgraph::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// Edge semantics, fixed at construction
    kind: GraphType,
    /// Vertex payloads, indexed by `VertexId`
    vertices: Vec<T>,
    /// Out-neighbors per vertex, newest edge first
    adjacency: Vec<VecDeque<VertexId>>,
}

impl<T> Default for Graph<T> {
    /// Creates an empty undirected graph.
    fn default() -> Self {
        Self::new(GraphType::default())
    }
}

impl<T> Graph<T> {
    /// Creates a new empty graph of the given kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adjgraph::{Graph, GraphType};
    ///
    /// let graph: Graph<String> = Graph::new(GraphType::Directed);
    /// assert!(graph.is_empty());
    /// assert_eq!(graph.graph_type(), GraphType::Directed);
    /// ```
    #[must_use]
    pub fn new(kind: GraphType) -> Self {
        Graph {
            kind,
            vertices: Vec::new(),
            adjacency: Vec::new(),
        }
    }

    /// Creates a new empty graph with storage pre-allocated for `vertex_capacity`
    /// vertices.
    #[must_use]
    pub fn with_capacity(kind: GraphType, vertex_capacity: usize) -> Self {
        Graph {
            kind,
            vertices: Vec::with_capacity(vertex_capacity),
            adjacency: Vec::with_capacity(vertex_capacity),
        }
    }

    /// Returns the kind fixed at construction.
    #[must_use]
    pub fn graph_type(&self) -> GraphType {
        self.kind
    }

    /// Appends a new vertex and returns its identifier.
    ///
    /// The identifier equals the vertex count before the call, so the first vertex is
    /// `0`, the second `1`, and so on. Insertion cannot fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adjgraph::{Graph, VertexId};
    ///
    /// let mut graph: Graph<&str> = Graph::default();
    /// assert_eq!(graph.insert("first"), VertexId::new(0));
    /// assert_eq!(graph.insert("second"), VertexId::new(1));
    /// assert_eq!(graph.size(), 2);
    /// ```
    pub fn insert(&mut self, payload: T) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(payload);
        self.adjacency.push(VecDeque::new());
        id
    }

    /// Adds an edge from `u` to `v`.
    ///
    /// `v` is prepended to the adjacency list of `u`. For undirected graphs `u` is also
    /// prepended to the adjacency list of `v`. Adding the same edge twice stores it
    /// twice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if either endpoint is not a vertex of the
    /// graph. Nothing is modified in that case.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        self.adjacency[u.index()].push_front(v);
        if self.kind == GraphType::Undirected {
            self.adjacency[v.index()].push_front(u);
        }

        trace!(%u, %v, kind = %self.kind, "edge added");
        Ok(())
    }

    /// Removes one edge from `u` to `v`.
    ///
    /// The first occurrence of `v` in the adjacency list of `u` is removed; for
    /// undirected graphs, the first occurrence of `u` in the list of `v` as well.
    /// Removing an edge that does not exist is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if either endpoint is not a vertex of the
    /// graph. Nothing is modified in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adjgraph::{Graph, GraphType};
    ///
    /// let mut graph: Graph<char> = Graph::new(GraphType::Undirected);
    /// let a = graph.insert('a');
    /// let b = graph.insert('b');
    ///
    /// graph.add_edge(a, b)?;
    /// graph.remove_edge(b, a)?;
    /// assert!(!graph.has_edge(a, b)?);
    /// assert!(!graph.has_edge(b, a)?);
    ///
    /// // Never added: nothing happens
    /// graph.remove_edge(a, b)?;
    /// # Ok::<(), adjgraph::Error>(())
    /// ```
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        let removed = remove_first(&mut self.adjacency[u.index()], v);
        if self.kind == GraphType::Undirected {
            remove_first(&mut self.adjacency[v.index()], u);
        }

        trace!(%u, %v, kind = %self.kind, removed, "edge removal");
        Ok(())
    }

    /// Returns a mutable reference to the payload of the given vertex.
    pub fn vertex_mut(&mut self, vertex: VertexId) -> Option<&mut T> {
        self.vertices.get_mut(vertex.index())
    }

    /// Returns the number of vertices in the graph.
    #[must_use]
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` if `vertex` names a vertex of this graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.index() < self.vertices.len()
    }

    /// Returns the payload of the given vertex.
    ///
    /// # Returns
    ///
    /// `Some(&T)` if the vertex exists, `None` otherwise.
    #[must_use]
    pub fn vertex(&self, vertex: VertexId) -> Option<&T> {
        self.vertices.get(vertex.index())
    }

    /// Returns an iterator over all vertices with their identifiers, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &T)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, payload)| (VertexId::new(i), payload))
    }

    /// Returns the out-neighbors of `vertex` in adjacency-list order.
    ///
    /// Duplicate edges appear once per edge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `vertex` is not a vertex of the graph.
    pub fn neighbors(&self, vertex: VertexId) -> Result<impl Iterator<Item = VertexId> + '_> {
        self.check_vertex(vertex)?;
        Ok(self.adjacency[vertex.index()].iter().copied())
    }

    /// Returns `true` if at least one edge `u -> v` is stored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if either endpoint is not a vertex of the
    /// graph.
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> Result<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.adjacency[u.index()].contains(&v))
    }

    /// Returns the number of entries in the adjacency list of `u`.
    ///
    /// For undirected graphs this is the degree of `u`, with a self-loop counted twice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `u` is not a vertex of the graph.
    pub fn out_degree(&self, u: VertexId) -> Result<usize> {
        self.check_vertex(u)?;
        Ok(self.adjacency[u.index()].len())
    }

    /// Returns the payloads of all vertices reachable from `start`, breadth-first.
    ///
    /// Vertices are marked when enqueued, so each reachable vertex appears exactly once.
    /// Unreachable vertices never appear.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `start` is not a vertex of the graph.
    pub fn bfs_order(&self, start: VertexId) -> Result<Vec<&T>> {
        self.check_vertex(start)?;
        Ok(self.payloads(algorithms::bfs(self, start)))
    }

    /// Returns the payloads of all vertices reachable from `start`, in iterative
    /// depth-first order.
    ///
    /// Vertices are marked when popped and neighbors are pushed in adjacency order, so
    /// siblings are explored last-listed first. This order intentionally differs from
    /// [`dfs_order_rec`](Self::dfs_order_rec).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `start` is not a vertex of the graph.
    pub fn dfs_order(&self, start: VertexId) -> Result<Vec<&T>> {
        self.check_vertex(start)?;
        Ok(self.payloads(algorithms::dfs(self, start)))
    }

    /// Returns the payloads of all vertices reachable from `start`, in recursive
    /// depth-first order.
    ///
    /// Neighbors are descended into in adjacency order. Recursion depth grows with the
    /// longest simple path from `start`; use [`dfs_order`](Self::dfs_order) for graphs
    /// deep enough to threaten the thread's stack.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `start` is not a vertex of the graph.
    pub fn dfs_order_rec(&self, start: VertexId) -> Result<Vec<&T>> {
        self.check_vertex(start)?;
        Ok(self.payloads(algorithms::dfs_recursive(self, start)))
    }

    /// Returns `true` if the graph contains a cycle.
    ///
    /// Every component is searched. A self-loop is a cycle.
    ///
    /// This is a directed-graph notion. On an undirected graph each edge is stored in
    /// both directions and is therefore reported as a two-vertex cycle: any undirected
    /// graph with at least one edge returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adjgraph::{Graph, GraphType, VertexId};
    ///
    /// let mut graph: Graph<u8> = Graph::new(GraphType::Directed);
    /// assert!(!graph.has_cycle());
    ///
    /// let a = graph.insert(0);
    /// graph.add_edge(a, a)?;
    /// assert!(graph.has_cycle());
    /// # Ok::<(), adjgraph::Error>(())
    /// ```
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        algorithms::has_cycle(self)
    }

    /// Returns a topological order of all payloads computed with Kahn's algorithm.
    ///
    /// Vertices with in-degree zero are seeded in ascending index order; later ties are
    /// broken by queue arrival order.
    ///
    /// # Returns
    ///
    /// `None` if the graph is undirected or contains a cycle, since no topological order
    /// exists then. Otherwise every payload exactly once, with each edge `u -> v`
    /// placing `u` before `v`.
    #[must_use]
    pub fn topo_sort_bfs(&self) -> Option<Vec<&T>> {
        if !self.is_directed_for_sort() {
            return None;
        }
        // Kahn's algorithm leaves vertices unemitted exactly when a cycle exists
        let order = algorithms::topological_sort_kahn(self);
        if order.is_none() {
            debug!(vertices = self.size(), "topological sort requested on a cyclic graph");
        }
        order.map(|order| self.payloads(order))
    }

    /// Returns a topological order of all payloads computed from depth-first
    /// post-order.
    ///
    /// The result is usually different from [`topo_sort_bfs`](Self::topo_sort_bfs);
    /// both are valid orders.
    ///
    /// # Returns
    ///
    /// `None` if the graph is undirected or contains a cycle.
    #[must_use]
    pub fn topo_sort_dfs_rec(&self) -> Option<Vec<&T>> {
        if !self.is_directed_for_sort() {
            return None;
        }
        let order = algorithms::topological_sort_dfs(self);
        if order.is_none() {
            debug!(vertices = self.size(), "topological sort requested on a cyclic graph");
        }
        order.map(|order| self.payloads(order))
    }

    fn is_directed_for_sort(&self) -> bool {
        if self.kind == GraphType::Undirected {
            debug!("topological sort requested on an undirected graph");
            return false;
        }
        true
    }

    fn payloads(&self, ids: impl IntoIterator<Item = VertexId>) -> Vec<&T> {
        ids.into_iter()
            .map(|id| &self.vertices[id.index()])
            .collect()
    }

    fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex.index() >= self.vertices.len() {
            return Err(Error::IndexOutOfRange {
                index: vertex.index(),
                size: self.vertices.len(),
            });
        }
        Ok(())
    }
}

fn remove_first(list: &mut VecDeque<VertexId>, target: VertexId) -> bool {
    match list.iter().position(|&n| n == target) {
        Some(pos) => {
            list.remove(pos);
            true
        }
        None => false,
    }
}

impl<T> GraphBase for Graph<T> {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

impl<T> Successors for Graph<T> {
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> {
        self.adjacency[vertex.index()].iter().copied()
    }
}

impl<T: fmt::Display> fmt::Display for Graph<T> {
    /// Renders one line per vertex, `payload -> neighbor, neighbor`, in adjacency order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Adjacency List Graph ({})", self.kind)?;
        for (id, payload) in self.vertices() {
            write!(f, "{payload} ->")?;
            for (i, neighbor) in self.adjacency[id.index()].iter().enumerate() {
                let sep = if i == 0 { " " } else { ", " };
                write!(f, "{sep}{}", self.vertices[neighbor.index()])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
