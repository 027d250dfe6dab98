use crate::avl_tree::tree::{self, Tree};
use std::cmp;

/// A node of an AVL tree holding a single key.
///
/// A node exclusively owns its children. Renderers walk the shape of a tree through the
/// read-only accessors below.
#[derive(Debug, Serialize)]
pub struct Node {
    pub(crate) key: String,
    pub(crate) height: usize,
    pub(crate) left: Tree,
    pub(crate) right: Tree,
}

impl Node {
    pub(crate) fn new(key: String) -> Self {
        Node {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    // Recomputes the cached height from the cached heights of the children.
    pub(crate) fn update(&mut self) {
        self.height = cmp::max(tree::height(&self.left), tree::height(&self.right)) + 1;
    }

    pub(crate) fn balance(&self) -> i32 {
        (tree::height(&self.left) as i32) - (tree::height(&self.right) as i32)
    }

    /// Returns the key stored in this node.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the height of the subtree rooted at this node. A leaf has height 1.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the height of the left subtree minus the height of the right subtree.
    pub fn balance_factor(&self) -> i32 {
        self.balance()
    }

    /// Returns the left child, if any.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_ref().map(|node| &**node)
    }

    /// Returns the right child, if any.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_ref().map(|node| &**node)
    }

    /// Returns `true` if this node has a left child.
    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    /// Returns `true` if this node has a right child.
    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::Node;
    use serde_test::{assert_ser_tokens, Token};

    #[test]
    fn test_new_leaf() {
        let node = Node::new(String::from("Alice"));
        assert_eq!(node.key(), "Alice");
        assert_eq!(node.height(), 1);
        assert_eq!(node.balance_factor(), 0);
        assert!(!node.has_left());
        assert!(!node.has_right());
    }

    #[test]
    fn test_update() {
        let mut node = Node::new(String::from("Bob"));
        let mut left = Node::new(String::from("Alice"));
        left.left = Some(Box::new(Node::new(String::from("Aaron"))));
        left.update();
        node.left = Some(Box::new(left));
        node.update();

        assert_eq!(node.height(), 3);
        assert_eq!(node.balance_factor(), 2);
        assert_eq!(node.left().map(|child| child.key()), Some("Alice"));
        assert!(node.right().is_none());
        assert!(node.has_left());
        assert!(!node.has_right());
    }

    #[test]
    fn test_has_children() {
        let mut node = Node::new(String::from("Bob"));
        node.left = Some(Box::new(Node::new(String::from("Alice"))));
        node.right = Some(Box::new(Node::new(String::from("Charlie"))));
        node.update();

        assert!(node.has_left());
        assert!(node.has_right());
        assert_eq!(node.right().map(|child| child.key()), Some("Charlie"));
        assert_eq!(node.balance_factor(), 0);
    }

    #[test]
    fn test_serialize_shape() {
        let mut node = Node::new(String::from("Bob"));
        node.left = Some(Box::new(Node::new(String::from("Alice"))));
        node.update();

        assert_ser_tokens(
            &node,
            &[
                Token::Struct { name: "Node", len: 4 },
                Token::Str("key"),
                Token::Str("Bob"),
                Token::Str("height"),
                Token::U64(2),
                Token::Str("left"),
                Token::Some,
                Token::Struct { name: "Node", len: 4 },
                Token::Str("key"),
                Token::Str("Alice"),
                Token::Str("height"),
                Token::U64(1),
                Token::Str("left"),
                Token::None,
                Token::Str("right"),
                Token::None,
                Token::StructEnd,
                Token::Str("right"),
                Token::None,
                Token::StructEnd,
            ],
        );
    }
}
