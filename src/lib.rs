//! This crate exposes an ordered set of values kept in a Binary Search Tree (BST) that is
//! balanced when it is built and rebalanced only when asked to.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`). Building the tree from a sorted
//! sequence by repeatedly splitting it at the middle limits the height to `O(lg N)`. Plain
//! insertion does not keep that bound, so [`Tree::is_balanced`] reports whether the shape has
//! degraded and [`Tree::rebalance`] rebuilds it. BSTs also naturally support sorted iteration
//! by visiting the left subtree, then the subtree root, then the right subtree.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{Order, Tree};
//!
//! let mut tree = Tree::from_values([40, 10, 30, 20, 10]);
//! assert_eq!(tree.len(), 4);
//! assert!(tree.find(&30));
//!
//! tree.delete(&30);
//! assert!(!tree.find(&30));
//!
//! let levels: Vec<_> = tree.iter_order(Order::Level).collect();
//! assert_eq!(levels, vec![&20, &10, &40]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod pretty;
mod traverse;
mod tree;

pub use error::Error;
pub use traverse::{Iter, Order};
pub use tree::{Node, Tree, NOT_FOUND};
