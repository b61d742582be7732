//! Generic adjacency-list graph infrastructure.
//!
//! This module provides a single graph container, [`Graph`], together with the
//! traversal, cycle-detection and topological-sorting algorithms that run on it.
//!
//! # Architecture
//!
//! - **Core Types**: [`VertexId`], [`GraphType`] and [`Graph`] provide the
//!   representation: dense vertex identifiers, the directed/undirected switch, and the
//!   container holding payloads and adjacency lists side by side
//! - **Traits**: [`GraphBase`] and [`Successors`] are all the algorithms need to see of
//!   a graph
//! - **Work Lists**: [`Lifo`] and [`Fifo`] are the stack and queue operations the
//!   algorithms drive their expansion with
//! - **Algorithms**: [`algorithms`] holds the identifier-level implementations
//!
//! # Design Principles
//!
//! ## Strongly-Typed Identifiers
//!
//! Vertex positions use a newtype wrapper, so they cannot be confused with counts or
//! degrees, and negative indices cannot be expressed.
//!
//! ## Append-Only Vertices
//!
//! Vertices are appended and never removed. Edges can be added and removed at any time.
//! An identifier handed out by [`Graph::insert`] therefore stays valid forever.
//!
//! ## Deterministic Orders
//!
//! Each adjacency list keeps the most recently added edge first, and every algorithm
//! expands neighbors in list order. Given the same sequence of calls, every traversal
//! and ordering produces the same output.
//!
//! # Usage Examples
//!
//! ```rust
//! use adjgraph::{Graph, GraphType};
//!
//! // A chain has exactly one topological order
//! let mut graph: Graph<u32> = Graph::new(GraphType::Directed);
//! let ids: Vec<_> = (0..4).map(|i| graph.insert(i)).collect();
//! for pair in ids.windows(2) {
//!     graph.add_edge(pair[0], pair[1])?;
//! }
//!
//! assert_eq!(graph.topo_sort_bfs(), Some(vec![&0, &1, &2, &3]));
//! assert_eq!(graph.topo_sort_dfs_rec(), Some(vec![&0, &1, &2, &3]));
//! # Ok::<(), adjgraph::Error>(())
//! ```

mod adjacency;
mod kind;
mod traits;
mod vertex;
mod worklist;

pub mod algorithms;

pub use adjacency::Graph;
pub use kind::GraphType;
pub use traits::{GraphBase, Successors};
pub use vertex::VertexId;
pub use worklist::{Fifo, Lifo};
