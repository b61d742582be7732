// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # adjgraph
//!
//! A generic in-memory graph container built on adjacency lists, with the classic
//! traversal and ordering algorithms on top.
//!
//! ## Features
//!
//! - **Directed or undirected** - chosen once at construction; undirected edges are
//!   mirrored into both endpoints
//! - **Generic payloads** - any `T`, stored at a dense [`VertexId`]
//! - **Traversals** - breadth-first, iterative depth-first and recursive depth-first
//! - **Cycle detection** - back-edge search over every component
//! - **Topological sorting** - Kahn's algorithm and depth-first post-order
//!
//! ## Quick Start
//!
//! ```rust
//! use adjgraph::prelude::*;
//!
//! let mut graph: Graph<&str> = Graph::new(GraphType::Directed);
//! let shirt = graph.insert("shirt");
//! let tie = graph.insert("tie");
//! let jacket = graph.insert("jacket");
//!
//! graph.add_edge(shirt, tie)?;
//! graph.add_edge(tie, jacket)?;
//!
//! assert_eq!(graph.topo_sort_bfs(), Some(vec![&"shirt", &"tie", &"jacket"]));
//! assert_eq!(graph.bfs_order(tie)?, vec![&"tie", &"jacket"]);
//! # Ok::<(), adjgraph::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Every operation taking a vertex index validates it first and returns
//! [`Error::IndexOutOfRange`] without touching the graph when it is invalid.
//! Topological sorts signal "no order exists" (undirected or cyclic graph) with
//! `None`, which is an answer rather than a failure.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events at `trace` level for edge mutation and at
//! `debug` level when a cycle is found or a topological sort is refused. No subscriber
//! is installed; wire one up in the application to see them.
//!
//! ## Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//! ```

mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// ```rust
/// use adjgraph::prelude::*;
///
/// let mut graph: Graph<i32> = Graph::default();
/// let a = graph.insert(1);
/// assert_eq!(graph.vertex(a), Some(&1));
/// ```
pub mod prelude;

/// Adjacency-list graph container and algorithms.
///
/// # Key Types
///
/// - [`graph::Graph`] - The container
/// - [`graph::VertexId`] - Dense vertex identifier
/// - [`graph::GraphType`] - Directed or undirected
/// - [`graph::algorithms`] - Identifier-level traversal, cycle and ordering algorithms
pub mod graph;

/// `adjgraph` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always
/// [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `adjgraph` Error type
///
/// See [`Error`] for the failure it describes.
pub use error::Error;

pub use graph::{algorithms, Graph, GraphBase, GraphType, Successors, VertexId};
