//! This crate exposes a Binary Search Tree (BST) that is built from an
//! arbitrary sequence of values and can be rebuilt into minimal height
//! on demand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a
//! BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the
//! longest path from the root `Node` to a leaf `Node`). Building a tree from a
//! sorted sequence by always picking the middle value as the subtree root gives
//! a height of `O(lg N)`. The [`Tree`] here does *not* rebalance itself as values
//! are inserted and deleted. Instead, [`Tree::is_balanced`] reports whether it has
//! drifted and [`Tree::rebalance`] rebuilds it from scratch.
//!
//! # Examples
//!
//! ```
//! use rebuild_bst::Tree;
//!
//! let mut tree = Tree::new([1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 6345, 324]);
//! assert!(tree.includes(&23));
//! assert!(tree.is_balanced());
//!
//! // Always adding to the right eventually tips the tree over.
//! for x in [7000, 8000, 9000] {
//!     tree.insert(x);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node;
mod traverse;
pub mod tree;
mod util;


pub use error::Error;
pub use tree::Tree;
