//! Graph algorithms over vertex identifiers.
//!
//! Every algorithm here is generic over [`Successors`](crate::graph::Successors) and
//! works purely on [`VertexId`](crate::graph::VertexId)s. The payload-level methods on
//! [`Graph`](crate::graph::Graph) (`bfs_order`, `topo_sort_bfs`, ...) validate their
//! arguments, call into this module and map the resulting identifiers to payloads.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`bfs`] - Breadth-first search
//! - [`dfs`] - Iterative depth-first search (visit-at-pop)
//! - [`dfs_recursive`] - Recursive depth-first search
//!
//! ## Cycle Detection
//!
//! - [`has_cycle`] - Check the whole graph for a cycle
//! - [`has_cycle_from`] - Check the part of the graph reachable from one vertex
//!
//! ## Topological Ordering
//!
//! - [`topological_sort_kahn`] - Kahn's in-degree algorithm
//! - [`topological_sort_dfs`] - Reverse depth-first post-order
//!
//! | Algorithm | Time Complexity | Recursive |
//! |-----------|-----------------|-----------|
//! | BFS / DFS | O(V + E) | no |
//! | Recursive DFS | O(V + E) | yes |
//! | Cycle detection | O(V + E) | no |
//! | Kahn | O(V + E) | no |
//! | DFS topological sort | O(V + E) | yes |

mod cycles;
mod topological;
mod traversal;

pub use cycles::{has_cycle, has_cycle_from};
pub use topological::{topological_sort_dfs, topological_sort_kahn};
pub use traversal::{bfs, bfs_with, dfs, dfs_recursive, dfs_with, BfsIterator, DfsIterator};
