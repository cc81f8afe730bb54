//! This crate exposes an ordered key container backed by a Binary Search
//! Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one key and
//! will sometimes have child `Node`s. The most important invariants of a
//! BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root,
//! then the right subtree.
//!
//! The tree in this crate does no rebalancing, so its height is whatever
//! the insertion order produces. Keys inserted in a sufficiently random
//! order give a height of roughly `O(lg N)`; keys inserted in sorted order
//! give a degenerate, list-shaped tree of height `N`.

#![deny(missing_docs)]

pub mod recursive;

#[cfg(test)]
mod test;
