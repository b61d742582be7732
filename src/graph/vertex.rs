//! Vertex identifier for adjacency-list graphs.
//!
//! This module provides the [`VertexId`] type, a strongly-typed position of a vertex
//! within a [`Graph`](crate::graph::Graph). Identifiers are dense: the n-th inserted
//! vertex receives index `n - 1`, and an identifier never changes once assigned.

use std::fmt;

/// A strongly-typed identifier for vertices within a graph.
///
/// `VertexId` wraps a `usize` index so vertex positions cannot be mixed up with
/// degrees, counts or other integers. Because the index is unsigned, a negative
/// vertex reference cannot be expressed at all; the only invalid identifier is
/// one at or beyond the graph's current size.
///
/// # Usage
///
/// Identifiers are returned by [`Graph::insert`](crate::graph::Graph::insert). They are
/// used to:
///
/// - Reference endpoints when adding or removing edges
/// - Pick the start vertex of a traversal
/// - Index per-vertex scratch arrays inside the algorithms
///
/// # Examples
///
/// ```rust
/// use adjgraph::{Graph, GraphType, VertexId};
///
/// let mut graph: Graph<&str> = Graph::new(GraphType::Directed);
/// let a = graph.insert("A");
/// let b = graph.insert("B");
///
/// assert_eq!(a, VertexId::new(0));
/// assert_eq!(b, VertexId::new(1));
/// assert_ne!(a, b);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Creates a new `VertexId` from a raw index value.
    ///
    /// Normal usage obtains identifiers from [`Graph::insert`](crate::graph::Graph::insert);
    /// constructing one by hand is useful when indices come from outside, for example
    /// a fixture that numbers its vertices.
    ///
    /// # Arguments
    ///
    /// * `index` - The raw vertex index (0-based)
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        VertexId(index)
    }

    /// Returns the raw index value of this vertex identifier.
    ///
    /// The index can be used directly to address vectors holding per-vertex data.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for VertexId {
    #[inline]
    fn from(index: usize) -> Self {
        VertexId(index)
    }
}

impl From<VertexId> for usize {
    #[inline]
    fn from(vertex: VertexId) -> Self {
        vertex.0
    }
}
