//! Depth-first traversals. Every traversal walks the whole tree eagerly and can be repeated any
//! number of times.

use super::{Node, Tree};

/// When a depth-first traversal visits a node relative to its two subtrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// The node, then its left subtree, then its right subtree.
    PreOrder,
    /// The left subtree, then the node, then the right subtree. This yields keys in sorted order.
    InOrder,
    /// The left subtree, then the right subtree, then the node.
    PostOrder,
}

impl<K> Tree<K> {
    /// Calls `f` with every key in the tree in the given [`Order`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::boxed::{Order, Tree};
    ///
    /// let tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
    /// let mut sum = 0;
    /// tree.visit(Order::PostOrder, |key| sum += key);
    ///
    /// assert_eq!(sum, 6);
    /// ```
    pub fn visit<'a, F>(&'a self, order: Order, mut f: F)
    where
        F: FnMut(&'a K),
    {
        if let Some(root) = self.root.as_deref() {
            root.visit(order, &mut f);
        }
    }

    /// Collects the keys visiting each node before its subtrees.
    pub fn pre_order(&self) -> Vec<&K> {
        self.keys(Order::PreOrder)
    }

    /// Collects the keys in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::boxed::Tree;
    ///
    /// let tree: Tree<_> = vec![50, 30, 70, 30].into_iter().collect();
    ///
    /// assert_eq!(tree.in_order(), vec![&30, &30, &50, &70]);
    /// ```
    pub fn in_order(&self) -> Vec<&K> {
        self.keys(Order::InOrder)
    }

    /// Collects the keys visiting each node after its subtrees.
    pub fn post_order(&self) -> Vec<&K> {
        self.keys(Order::PostOrder)
    }

    fn keys(&self, order: Order) -> Vec<&K> {
        let mut keys = Vec::new();
        self.visit(order, |key| keys.push(key));
        keys
    }
}

impl<K> Node<K> {
    fn visit<'a, F>(&'a self, order: Order, f: &mut F)
    where
        F: FnMut(&'a K),
    {
        if order == Order::PreOrder {
            f(&self.key);
        }
        if let Some(left) = self.left.as_deref() {
            left.visit(order, f);
        }
        if order == Order::InOrder {
            f(&self.key);
        }
        if let Some(right) = self.right.as_deref() {
            right.visit(order, f);
        }
        if order == Order::PostOrder {
            f(&self.key);
        }
    }
}
