//! A BST built from boxed nodes. Every node exclusively owns its two children, so dropping a
//! subtree releases all of its nodes and no node can ever be reachable from two places.
//!
//! The tree never rebalances. Keys equal to a node's key are always placed in that node's right
//! subtree, so duplicates are kept rather than overwritten.
//!
//! # Examples
//!
//! ```
//! use bstree::boxed::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert_eq!(tree.min(), None);
//!
//! for key in [50, 30, 70] {
//!     tree.insert(key);
//! }
//! assert!(tree.contains(&30));
//! assert_eq!(tree.height(), 2);
//!
//! // Deleting a key that isn't there changes nothing.
//! assert!(!tree.delete(&42));
//! assert_eq!(tree.len(), 3);
//!
//! assert!(tree.delete(&50));
//! assert_eq!(tree.in_order(), vec![&30, &70]);
//! ```

use std::cmp::Ordering;
use std::iter::FromIterator;

mod render;
mod traversal;

pub use traversal::Order;

/// An owned, possibly empty, subtree.
type Link<K> = Option<Box<Node<K>>>;

/// An unbalanced Binary Search Tree. This can be used for inserting, finding, and deleting keys
/// and for asking aggregate questions about its shape.
#[derive(Clone, Debug)]
pub struct Tree<K> {
    root: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Inserts the given key into the tree. Keys smaller than a node's key go to its left and
    /// all other keys, including equal ones, go to its right. Inserting a key that is already
    /// present adds another node for it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::boxed::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.in_order(), vec![&1, &1]);
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        match self.root.as_deref_mut() {
            Some(root) => root.insert(key),
            None => self.root = Some(Node::new_boxed(key)),
        }
    }

    /// Returns whether any node in the tree holds the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::boxed::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.root.as_deref().map_or(false, |root| root.contains(key))
    }

    /// Deletes one node holding the given key and returns whether a node was removed. If the
    /// tree does not contain the key, nothing happens.
    ///
    /// When the node to delete has two children it stays in place and takes the key of its
    /// in-order successor, which is then deleted from the right subtree instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::boxed::Tree;
    ///
    /// let mut tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.delete(&2));
    /// assert!(!tree.contains(&2));
    /// assert!(!tree.delete(&2));
    /// ```
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord + Clone,
    {
        delete_from(&mut self.root, key)
    }

    /// Returns the smallest key in the tree, or `None` if the tree is empty.
    pub fn min(&self) -> Option<&K> {
        self.root.as_deref().map(Node::min)
    }

    /// Returns the largest key in the tree, or `None` if the tree is empty.
    pub fn max(&self) -> Option<&K> {
        self.root.as_deref().map(Node::max)
    }

    /// Gets the number of levels in this tree. An empty tree has a height of 0 and a tree with a
    /// single node has a height of 1.
    pub fn height(&self) -> usize {
        self.root.as_deref().map_or(0, Node::height)
    }

    /// Counts the nodes in this tree.
    pub fn len(&self) -> usize {
        self.root.as_deref().map_or(0, Node::len)
    }

    /// Returns `true` if the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the nodes in this tree that have no children.
    pub fn count_leaves(&self) -> usize {
        self.root.as_deref().map_or(0, Node::count_leaves)
    }

    /// Releases every node, leaving the tree empty. Clearing an empty tree does nothing.
    ///
    /// Nodes are unlinked and dropped one at a time so that clearing a long chain of nodes
    /// doesn't recurse once per level.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}

/// Deletes one node holding `key` from the subtree behind `link` and rebinds `link` to the root
/// of what remains. Returns whether a node was removed.
fn delete_from<K>(link: &mut Link<K>, key: &K) -> bool
where
    K: Ord + Clone,
{
    match link.take() {
        Some(node) => {
            let (new_root, removed) = node.delete(key);
            *link = new_root;
            removed
        }
        None => false,
    }
}

/// A `Node` has a key that is used for searching/sorting. Either child may be missing; a node
/// missing both is a leaf.
#[derive(Clone, Debug)]
struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let child = match key.cmp(&self.key) {
            Ordering::Less => &mut self.left,
            Ordering::Equal | Ordering::Greater => &mut self.right,
        };
        match child {
            Some(node) => node.insert(key),
            None => *child = Some(Self::new_boxed(key)),
        }
    }

    fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => self.left.as_deref().map_or(false, |n| n.contains(key)),
            Ordering::Equal => true,
            Ordering::Greater => self.right.as_deref().map_or(false, |n| n.contains(key)),
        }
    }

    /// Consumes the subtree rooted at this node and returns the subtree left after deleting one
    /// node holding `key`, along with whether a node was removed.
    fn delete(mut self: Box<Self>, key: &K) -> (Link<K>, bool)
    where
        K: Ord + Clone,
    {
        match key.cmp(&self.key) {
            Ordering::Less => {
                let removed = delete_from(&mut self.left, key);
                (Some(self), removed)
            }
            Ordering::Greater => {
                let removed = delete_from(&mut self.right, key);
                (Some(self), removed)
            }
            // The children are taken out first so dropping `self` only drops this one node.
            Ordering::Equal => match (self.left.take(), self.right.take()) {
                (None, right) => (right, true),
                (left, None) => (left, true),
                (Some(left), Some(right)) => {
                    // The successor is the smallest key in the right subtree. Whichever node on
                    // the path to it holds that key has no left child, so deleting it below
                    // never needs another copy-up.
                    self.key = right.min().clone();
                    let (right, _) = right.delete(&self.key);
                    self.left = Some(left);
                    self.right = right;
                    (Some(self), true)
                }
            },
        }
    }

    fn min(&self) -> &K {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        &node.key
    }

    fn max(&self) -> &K {
        let mut node = self;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        &node.key
    }

    fn height(&self) -> usize {
        let left = self.left.as_deref().map_or(0, Self::height);
        let right = self.right.as_deref().map_or(0, Self::height);
        left.max(right) + 1
    }

    fn len(&self) -> usize {
        1 + self.left.as_deref().map_or(0, Self::len) + self.right.as_deref().map_or(0, Self::len)
    }

    fn count_leaves(&self) -> usize {
        match (self.left.as_deref(), self.right.as_deref()) {
            (None, None) => 1,
            (left, right) => {
                left.map_or(0, Self::count_leaves) + right.map_or(0, Self::count_leaves)
            }
        }
    }
}
