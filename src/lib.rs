//! # Triangular matrices from offset-indexed vectors
//!
//! Two generic value types: [`OffsetVector`], an owned fixed-length sequence addressed
//! through an arbitrary logical start index, and [`UpperTriangularMatrix`], an order-n
//! upper-triangular matrix storing only its n(n+1)/2 upper-triangle cells as a vector
//! of progressively shorter row vectors.
//!
//! Shape violations are reported through [`data::linear_algebra::error::Error`] rather
//! than panics; the `Index` operators are sugar over the checked accessors.
//!
//! [`OffsetVector`]: data::linear_algebra::vector::OffsetVector
//! [`UpperTriangularMatrix`]: data::linear_algebra::matrix::UpperTriangularMatrix
#![warn(missing_docs)]

pub mod data;

#[cfg(test)]
mod tests;
