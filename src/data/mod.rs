//! # Storing of vectors and matrices in memory
//!
//! This module provides the data structures of the crate. They are plain owned values;
//! nothing here does IO or holds state between operations.

pub mod linear_algebra;
