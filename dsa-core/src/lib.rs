//! # DSA Core
//!
//! Core traits and utilities shared by the data structure implementations in
//! this workspace.
//!
//! This crate provides the foundational traits and error type used by
//! `dsa-data-structures`.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod traits;

pub use error::{DsaError, Result};
pub use traits::*;
