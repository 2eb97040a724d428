//! # DSA Data Structures
//!
//! An array-embedded, self-balancing ordered container.
//!
//! This crate provides an educational implementation of an AVL-balanced
//! binary search tree stored entirely inside a flat, heap-indexed array —
//! rebalancing rotations are bulk index translations of subtrees rather
//! than pointer relinking — with detailed documentation, complexity
//! analysis, and comprehensive tests.
//!
//! ## Modules
//!
//! - `trees` - The array-embedded AVL tree (`ArrayAvlTree`) and its cursor

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod trees;

pub use dsa_core::{DsaError, Result};
