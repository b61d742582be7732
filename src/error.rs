use thiserror::Error;

/// The generic Error type, which covers every failure this library can return.
///
/// Graph operations fail in exactly one way: a caller hands in a vertex index that
/// does not name a vertex of the graph. Everything else either succeeds or, in the
/// case of topological sorting, reports "no order exists" through an `Option`
/// rather than an error.
///
/// # Examples
///
/// ```rust
/// use adjgraph::{Error, Graph, GraphType, VertexId};
///
/// let mut graph: Graph<&str> = Graph::new(GraphType::Directed);
/// let a = graph.insert("A");
///
/// match graph.add_edge(a, VertexId::new(7)) {
///     Err(Error::IndexOutOfRange { index, size }) => {
///         assert_eq!(index, 7);
///         assert_eq!(size, 1);
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vertex index was not smaller than the current vertex count.
    ///
    /// Raised before any state is touched, so a failed call leaves the graph
    /// exactly as it was.
    ///
    /// # Fields
    ///
    /// * `index` - The offending vertex index
    /// * `size` - The number of vertices in the graph at the time of the call
    #[error("vertex index {index} out of range for graph with {size} vertices")]
    IndexOutOfRange {
        /// The index that was rejected
        index: usize,
        /// The vertex count of the graph when the index was rejected
        size: usize,
    },
}
