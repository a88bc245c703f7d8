//! This crate exposes a plain, unbalanced Binary Search Tree (BST) whose
//! nodes own their children through `Box`.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the key that
//! was inserted and will sometimes have child `Node`s. The most important
//! invariants of this BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than or equal to its own key. Duplicates always go right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is the
//! number of levels on the longest path from the root `Node` to a leaf `Node`).
//! This tree does no rebalancing, so inserting keys in sorted order yields a
//! tree whose height equals its number of nodes. BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod boxed;
