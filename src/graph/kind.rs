use strum::{Display, EnumCount, EnumIter, EnumString};

/// The edge semantics of a [`Graph`](crate::graph::Graph), fixed at construction.
///
/// ## Variants
/// - **`Directed`**: `add_edge(u, v)` records only `u -> v`. Cycle detection and both
///   topological sorts are meaningful.
/// - **`Undirected`**: every edge insertion and removal is mirrored into both
///   endpoints' adjacency lists. Topological sorting always reports that no order
///   exists.
///
/// The variant names parse from and display as lowercase strings, so the kind can be
/// taken straight from configuration text.
///
/// # Examples
///
/// ```rust
/// use adjgraph::GraphType;
///
/// let kind: GraphType = "directed".parse().unwrap();
/// assert_eq!(kind, GraphType::Directed);
/// assert_eq!(GraphType::default(), GraphType::Undirected);
/// assert_eq!(GraphType::Undirected.to_string(), "undirected");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, EnumCount,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GraphType {
    /// Edges point from source to target only.
    Directed,
    /// Edges connect both endpoints symmetrically.
    #[default]
    Undirected,
}

impl GraphType {
    /// Returns `true` for [`GraphType::Directed`].
    #[must_use]
    pub const fn is_directed(self) -> bool {
        matches!(self, GraphType::Directed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_graph_type_default_is_undirected() {
        assert_eq!(GraphType::default(), GraphType::Undirected);
    }

    #[test]
    fn test_graph_type_parse() {
        assert_eq!("directed".parse::<GraphType>(), Ok(GraphType::Directed));
        assert_eq!("UNDIRECTED".parse::<GraphType>(), Ok(GraphType::Undirected));
        assert!("weighted".parse::<GraphType>().is_err());
    }

    #[test]
    fn test_graph_type_display_roundtrip() {
        for kind in GraphType::iter() {
            assert_eq!(kind.to_string().parse::<GraphType>(), Ok(kind));
        }
        assert_eq!(GraphType::COUNT, 2);
    }

    #[test]
    fn test_is_directed() {
        assert!(GraphType::Directed.is_directed());
        assert!(!GraphType::Undirected.is_directed());
    }
}
