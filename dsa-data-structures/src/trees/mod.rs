//! Tree data structures.
//!
//! This module contains:
//!
//! - [`ArrayAvlTree`] - An AVL-balanced BST embedded in a single flat,
//!   heap-indexed array, with rotations performed as subtree shifts

pub mod array_avl_tree;

pub use array_avl_tree::{ArrayAvlTree, Cursor};
