//! This crate exposes an ordered Binary Search Tree (BST) that is balanced
//! on demand rather than on every mutation.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores a value and may have child
//! `Node`s. The invariants of this BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    less than or equal to its own value. Duplicates are kept and go left.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)` where `height` is the number of nodes on the
//! longest path from the root to a leaf. Nothing here rotates nodes while
//! inserting, so inserting already sorted values gives a tree of height `N`.
//! Calling [`Tree::rebalance`] rebuilds the tree with the minimal height of
//! `⌈lg(N + 1)⌉` by inserting the median of the sorted values first and then
//! recursing into both halves.
//!
//! # Examples
//!
//! ```
//! use ordtree::Tree;
//!
//! let mut tree = Tree::new();
//! for x in [10, 20, 30, 40] {
//!     tree.insert(x);
//! }
//!
//! // Ascending inserts make a stick, not a tree.
//! assert_eq!(tree.height(), 4);
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert_eq!(tree.height(), 3);
//! assert!(tree.is_balanced());
//! assert_eq!(tree.to_sorted_list(), vec![10, 20, 30, 40]);
//! ```

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod iter;
pub mod node;
pub mod tree;

#[cfg(test)]
mod test;

pub use iter::{IntoIter, Iter};
pub use node::{Link, Node};
pub use tree::Tree;
