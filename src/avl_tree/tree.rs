use crate::avl_tree::node::Node;
use crate::error::{Error, Result};
use std::cmp::{self, Ordering};
use tracing::{debug, trace};

pub type Tree = Option<Box<Node>>;

pub fn height(tree: &Tree) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

pub fn balance_factor(tree: &Tree) -> i32 {
    match tree {
        None => 0,
        Some(ref node) => node.balance(),
    }
}

// precondition: node has a right child
fn rotate_left(mut node: Box<Node>) -> Box<Node> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!(pivot = %node.key, promoted = %child.key, "rotate left");
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

// precondition: node has a left child
fn rotate_right(mut node: Box<Node>) -> Box<Node> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!(pivot = %node.key, promoted = %child.key, "rotate right");
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

/// Inserts `key` into the subtree and returns the new root of the subtree, along with whether
/// a node was created.
///
/// A key that is already present leaves the subtree untouched. After an insertion at most one
/// single or double rotation is needed, and the case is picked by comparing the new key with
/// the key of the heavier child.
pub fn insert(tree: Tree, key: &str) -> (Tree, bool) {
    let mut node = match tree {
        Some(node) => node,
        None => return (Some(Box::new(Node::new(key.to_owned()))), true),
    };

    let inserted = match key.cmp(node.key.as_str()) {
        Ordering::Less => {
            let (left, inserted) = insert(node.left.take(), key);
            node.left = left;
            inserted
        },
        Ordering::Greater => {
            let (right, inserted) = insert(node.right.take(), key);
            node.right = right;
            inserted
        },
        Ordering::Equal => {
            debug!(key, "ignoring duplicate key");
            return (Some(node), false);
        },
    };

    (Some(rebalance_inserted(node, key)), inserted)
}

fn rebalance_inserted(mut node: Box<Node>, key: &str) -> Box<Node> {
    node.update();
    let balance = node.balance();

    if balance > 1 {
        match node.left.as_ref().map(|child| key.cmp(child.key.as_str())) {
            // left-left
            Some(Ordering::Less) => return rotate_right(node),
            // left-right
            Some(Ordering::Greater) => {
                node.left = node.left.take().map(rotate_left);
                return rotate_right(node);
            },
            _ => {},
        }
    } else if balance < -1 {
        match node.right.as_ref().map(|child| key.cmp(child.key.as_str())) {
            // right-right
            Some(Ordering::Greater) => return rotate_left(node),
            // right-left
            Some(Ordering::Less) => {
                node.right = node.right.take().map(rotate_right);
                return rotate_left(node);
            },
            _ => {},
        }
    }

    node
}

// Restores the AVL invariant at `node` after a deletion below it. The case is picked by the
// balance factor of the heavier child since the deletion happened on the other side.
fn rebalance(mut node: Box<Node>) -> Box<Node> {
    node.update();
    let balance = node.balance();

    if balance > 1 {
        if balance_factor(&node.left) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    if balance < -1 {
        if balance_factor(&node.right) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    node
}

/// Removes `key` from the subtree and returns the new root of the subtree, along with whether
/// the key was present.
///
/// A node with two children takes over the key of its in-order successor, and the successor
/// is then removed from the right subtree. Every node on the path back up is rebalanced, so a
/// single removal may rotate at several levels.
pub fn remove(tree: Tree, key: &str) -> (Tree, bool) {
    let mut node = match tree {
        Some(node) => node,
        None => {
            debug!(key, "key to remove is absent");
            return (None, false);
        },
    };

    let removed = match key.cmp(node.key.as_str()) {
        Ordering::Less => {
            let (left, removed) = remove(node.left.take(), key);
            node.left = left;
            removed
        },
        Ordering::Greater => {
            let (right, removed) = remove(node.right.take(), key);
            node.right = right;
            removed
        },
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => return (right, true),
            (left, None) => return (left, true),
            (left, right) => {
                let successor = match find_min(&right) {
                    Some(min_node) => min_node.key.clone(),
                    None => unreachable!(),
                };
                node.left = left;
                node.right = remove(right, &successor).0;
                node.key = successor;
                true
            },
        },
    };

    (Some(rebalance(node)), removed)
}

pub fn len(tree: &Tree) -> usize {
    match tree {
        None => 0,
        Some(ref node) => len(&node.left) + len(&node.right) + 1,
    }
}

pub fn search<'a>(tree: &'a Tree, key: &str) -> Option<&'a Node> {
    tree.as_ref().and_then(|node| match key.cmp(node.key.as_str()) {
        Ordering::Less => search(&node.left, key),
        Ordering::Greater => search(&node.right, key),
        Ordering::Equal => Some(&**node),
    })
}

pub fn find_min(tree: &Tree) -> Option<&Node> {
    tree.as_ref().map(|node| {
        let mut curr = &**node;
        while let Some(ref left_node) = curr.left {
            curr = &**left_node;
        }
        curr
    })
}

pub fn find_max(tree: &Tree) -> Option<&Node> {
    tree.as_ref().map(|node| {
        let mut curr = &**node;
        while let Some(ref right_node) = curr.right {
            curr = &**right_node;
        }
        curr
    })
}

/// Verifies key order, cached heights and balance factors of every node in the subtree and
/// returns the number of nodes.
pub fn check(tree: &Tree) -> Result<usize> {
    check_bounded(tree, None, None)
}

fn check_bounded(tree: &Tree, lower: Option<&str>, upper: Option<&str>) -> Result<usize> {
    let node = match tree {
        Some(ref node) => node,
        None => return Ok(0),
    };

    let key = node.key.as_str();
    if let Some(lower) = lower {
        if key <= lower {
            return Err(Error::Unordered {
                key: key.to_owned(),
                neighbor: lower.to_owned(),
            });
        }
    }
    if let Some(upper) = upper {
        if key >= upper {
            return Err(Error::Unordered {
                key: key.to_owned(),
                neighbor: upper.to_owned(),
            });
        }
    }

    let len = check_bounded(&node.left, lower, Some(key))?
        + check_bounded(&node.right, Some(key), upper)?
        + 1;

    let computed = cmp::max(height(&node.left), height(&node.right)) + 1;
    if node.height != computed {
        return Err(Error::HeightMismatch {
            key: key.to_owned(),
            stored: node.height,
            computed,
        });
    }

    let balance = node.balance();
    if balance.abs() > 1 {
        return Err(Error::Unbalanced {
            key: key.to_owned(),
            balance,
        });
    }

    Ok(len)
}
