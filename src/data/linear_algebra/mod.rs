//! # Linear algebra primitives
//!
//! An offset-indexed dense vector and an upper-triangular matrix built by composing
//! vectors of vectors. These were written by hand, because the triangular storage
//! pattern and the start-index addressing need to be enforced by the types themselves.

pub mod error;
pub mod matrix;
pub mod vector;

/// Largest element count any vector may have, matrix rows included.
///
/// Construction beyond this ceiling is rejected with an out-of-range error.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// Largest order (row and column count) any matrix may have.
///
/// Construction beyond this ceiling is rejected with an out-of-range error.
pub const MAX_MATRIX_SIZE: usize = 10_000;
