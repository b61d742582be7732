//! Trait definitions for graph abstractions.
//!
//! The algorithms in [`crate::graph::algorithms`] are written against these traits
//! rather than against [`Graph`](crate::graph::Graph) directly, so they only ever see
//! vertex identifiers and adjacency, never payloads.
//!
//! - [`GraphBase`] - Vertex count and vertex iteration
//! - [`Successors`] - Outgoing adjacency, in adjacency-list order

use crate::graph::VertexId;

/// Base trait providing core graph properties.
///
/// # Examples
///
/// ```rust
/// use adjgraph::{Graph, GraphBase, GraphType};
///
/// let mut graph: Graph<&str> = Graph::new(GraphType::Directed);
/// graph.insert("A");
/// graph.insert("B");
///
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.vertex_ids().count(), 2);
/// ```
pub trait GraphBase {
    /// Returns the number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Returns an iterator over all vertex identifiers in ascending index order.
    fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertex_count()).map(VertexId::new)
    }
}

/// Trait for graphs that support forward edge traversal.
///
/// The iteration order of [`successors`](Successors::successors) is significant: every
/// traversal and ordering algorithm expands neighbors in exactly this order, which is
/// what makes their output deterministic.
pub trait Successors: GraphBase {
    /// Returns an iterator over the out-neighbors of the given vertex.
    ///
    /// Duplicate edges yield the neighbor once per edge.
    ///
    /// # Panics
    ///
    /// May panic if `vertex` is not a valid vertex in the graph. Algorithms only call
    /// this with identifiers they have already validated.
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId>;
}
