use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::error::{Error, Result};
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;
use std::iter::FromIterator;

/// An ordered set of string labels implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Keys are ordered
/// lexicographically.
///
/// # Examples
/// ```
/// use label_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.insert("Bob");
/// tree.insert("Alice");
///
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.min(), Some("Alice"));
///
/// assert!(tree.remove("Alice"));
/// assert!(!tree.remove("Charlie"));
/// ```
#[derive(Default)]
pub struct AvlTree {
    root: tree::Tree,
    len: usize,
}

impl AvlTree {
    /// Constructs a new, empty `AvlTree`.
    ///
    /// # Examples
    /// ```
    /// use label_tree::AvlTree;
    ///
    /// let tree = AvlTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        AvlTree {
            root: None,
            len: 0,
        }
    }

    /// Inserts a key into the tree. Inserting a key that already exists does nothing.
    ///
    /// # Examples
    /// ```
    /// use label_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert("Alice");
    /// tree.insert("Alice");
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert<S>(&mut self, key: S)
    where
        S: AsRef<str>,
    {
        let (root, inserted) = tree::insert(self.root.take(), key.as_ref());
        self.root = root;
        if inserted {
            self.len += 1;
        }
    }

    /// Removes a key from the tree. Returns `true` if the key was present.
    ///
    /// # Examples
    /// ```
    /// use label_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert("Alice");
    /// assert!(tree.remove("Alice"));
    /// assert!(!tree.remove("Alice"));
    /// ```
    pub fn remove(&mut self, key: &str) -> bool {
        let (root, removed) = tree::remove(self.root.take(), key);
        self.root = root;
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Returns the node holding `key`, or `None` if the key is absent.
    ///
    /// # Examples
    /// ```
    /// use label_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert("Alice");
    /// assert_eq!(tree.search("Alice").map(|node| node.key()), Some("Alice"));
    /// assert!(tree.search("Bob").is_none());
    /// ```
    pub fn search(&self, key: &str) -> Option<&Node> {
        tree::search(&self.root, key)
    }

    /// Checks if a key exists in the tree.
    pub fn contains(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Clears the tree, removing all keys.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns the root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref().map(|node| &**node)
    }

    /// Returns the height of the tree. An empty tree has height 0.
    ///
    /// # Examples
    /// ```
    /// use label_tree::AvlTree;
    ///
    /// let tree: AvlTree = vec!["Alice", "Bob", "Charlie"].into_iter().collect();
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    /// Returns the balance factor of the root. An empty tree has balance factor 0.
    pub fn balance_factor(&self) -> i32 {
        tree::balance_factor(&self.root)
    }

    /// Returns the minimum key of the tree. Returns `None` if the tree is empty.
    pub fn min(&self) -> Option<&str> {
        tree::find_min(&self.root).map(|node| node.key())
    }

    /// Returns the maximum key of the tree. Returns `None` if the tree is empty.
    pub fn max(&self) -> Option<&str> {
        tree::find_max(&self.root).map(|node| node.key())
    }

    /// Verifies the ordering, height and balance invariants of every node, as well as the
    /// cached length.
    ///
    /// # Examples
    /// ```
    /// use label_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert("Alice");
    /// tree.insert("Bob");
    /// assert!(tree.check_consistency().is_ok());
    /// ```
    pub fn check_consistency(&self) -> Result<()> {
        tree::check(&self.root)?;
        let counted = tree::len(&self.root);
        if counted != self.len {
            return Err(Error::LengthMismatch {
                cached: self.len,
                counted,
            });
        }
        Ok(())
    }

    /// Returns an iterator over the tree. The iterator will yield keys using in-order
    /// traversal, so keys come out in ascending order. Calling `iter` again restarts the walk.
    ///
    /// # Examples
    /// ```
    /// use label_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert("Charlie");
    /// tree.insert("Alice");
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some("Alice"));
    /// assert_eq!(iterator.next(), Some("Charlie"));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            current: &self.root,
            stack: Vec::new(),
        }
    }
}

impl fmt::Debug for AvlTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl PartialEq for AvlTree {
    fn eq(&self, other: &AvlTree) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for AvlTree {}

impl<S> Extend<S> for AvlTree
where
    S: AsRef<str>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = S>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<S> FromIterator<S> for AvlTree
where
    S: AsRef<str>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut tree = AvlTree::new();
        tree.extend(iter);
        tree
    }
}

impl IntoIterator for AvlTree {
    type Item = String;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            current: self.root,
            stack: Vec::new(),
        }
    }
}

impl<'a> IntoIterator for &'a AvlTree {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlTree`.
///
/// This iterator traverses the keys of the tree in-order and yields owned keys.
pub struct IntoIter {
    current: tree::Tree,
    stack: Vec<Node>,
}

impl Iterator for IntoIter {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { key, right, .. } = node;
            self.current = right;
            key
        })
    }
}

/// An iterator for `AvlTree`.
///
/// This iterator traverses the keys of the tree in-order and yields string slices.
pub struct Iter<'a> {
    current: &'a tree::Tree,
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = *self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let &Node { ref key, ref right, .. } = node;
            self.current = right;
            key.as_str()
        })
    }
}

impl Serialize for AvlTree {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len))?;
        for key in self.iter() {
            seq.serialize_element(key)?;
        }
        seq.end()
    }
}

struct AvlTreeVisitor;

impl<'de> Visitor<'de> for AvlTreeVisitor {
    type Value = AvlTree;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence of string keys")
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut tree = AvlTree::new();
        while let Some(key) = seq.next_element::<String>()? {
            tree.insert(key);
        }
        Ok(tree)
    }
}

impl<'de> Deserialize<'de> for AvlTree {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(AvlTreeVisitor)
    }
}
