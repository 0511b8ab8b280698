//! Constructor-time configuration for tree builders.

/// Configuration shared by the tree-shaped builders.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeConfig {
    /// Number of nodes to reserve in the arena up front.
    /// Default: 64. The arena still grows on demand past this.
    pub node_capacity: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self { node_capacity: 64 }
    }
}
