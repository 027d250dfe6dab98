//! An AVL tree of unique string labels.
//!
//! The tree keeps its keys in lexicographic order and restores the AVL invariant with
//! rotations after every insertion and deletion, so lookups, insertions and deletions all
//! run in `O(log n)`. A small ASCII-art renderer in [`render`] draws the shape of a tree.
//!
//! # Examples
//! ```
//! use label_tree::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! tree.insert("Alice");
//! tree.insert("Bob");
//! tree.insert("Charlie");
//!
//! assert_eq!(tree.root().map(|node| node.key()), Some("Bob"));
//! assert_eq!(tree.iter().collect::<Vec<&str>>(), vec!["Alice", "Bob", "Charlie"]);
//! ```

#[macro_use]
extern crate serde_derive;

pub mod avl_tree;
mod error;
pub mod render;

pub use crate::avl_tree::{AvlTree, Node};
pub use crate::error::{Error, Result};
pub use crate::render::{Canvas, RenderConfig};
