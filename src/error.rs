use std::result;
use thiserror::Error;

/// Errors reported by the fallible edges of the crate: rendering and invariant checks.
///
/// The tree operations themselves never fail. Inserting a duplicate or removing an absent
/// key is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A canvas was requested for a tree that holds no keys.
    #[error("cannot render an empty tree")]
    EmptyTree,

    /// The canvas for a tree this tall would be too large to allocate.
    #[error("cannot render a tree of height {height}, the limit is {max_height}")]
    TooTall { height: usize, max_height: usize },

    /// Two keys are out of lexicographic order, or a key occurs twice.
    #[error("key {key:?} is out of order with respect to {neighbor:?}")]
    Unordered { key: String, neighbor: String },

    /// A node's cached height disagrees with the heights of its children.
    #[error("node {key:?} stores height {stored} but its children imply {computed}")]
    HeightMismatch {
        key: String,
        stored: usize,
        computed: usize,
    },

    /// A node's subtrees differ in height by more than one.
    #[error("node {key:?} has balance factor {balance}")]
    Unbalanced { key: String, balance: i32 },

    /// The cached number of keys disagrees with the number of nodes.
    #[error("tree caches {cached} keys but holds {counted} nodes")]
    LengthMismatch { cached: usize, counted: usize },
}

pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_display() {
        assert_eq!(Error::EmptyTree.to_string(), "cannot render an empty tree");
        assert_eq!(
            Error::Unbalanced { key: String::from("Bob"), balance: 2 }.to_string(),
            "node \"Bob\" has balance factor 2",
        );
        assert_eq!(
            Error::LengthMismatch { cached: 3, counted: 2 }.to_string(),
            "tree caches 3 keys but holds 2 nodes",
        );
    }
}
