//! # adjgraph Prelude
//!
//! The most commonly used types and traits, for glob import.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all adjgraph operations
pub use crate::Error;

/// The result type used throughout adjgraph
pub use crate::Result;

// ================================================================================================
// Graph Container
// ================================================================================================

/// The adjacency-list graph container
pub use crate::graph::Graph;

/// Directed or undirected edge semantics
pub use crate::graph::GraphType;

/// Dense vertex identifier
pub use crate::graph::VertexId;

// ================================================================================================
// Abstractions
// ================================================================================================

/// Traits the algorithms are written against
pub use crate::graph::{GraphBase, Successors};

/// Work-list operations driving the traversals
pub use crate::graph::{Fifo, Lifo};
