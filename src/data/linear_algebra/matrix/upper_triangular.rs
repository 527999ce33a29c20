//! # Upper-triangular matrix
//!
//! An order-n matrix whose lower triangle is structurally absent. Row `i` is an
//! offset vector of length `n - i` starting at logical index `i`, so exactly
//! n(n+1)/2 scalar cells are stored and `m[i][j]` is defined iff `i <= j < n`.
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, Index, IndexMut, Sub};
use std::slice::Iter;
use std::str::FromStr;

use num_traits::Zero;

use crate::data::linear_algebra::error::{Error, OutOfRange, SizeMismatch};
use crate::data::linear_algebra::vector::OffsetVector;
use crate::data::linear_algebra::MAX_MATRIX_SIZE;

/// Built from the offset vector type: an outer vector of rows, each itself an offset
/// vector enforcing its own per-row window.
///
/// The outer vector starts at logical index 0; comparison, copying and row-wise
/// arithmetic are the vector's own machinery applied one level up.
#[derive(Debug)]
pub struct UpperTriangular<F> {
    rows: OffsetVector<OffsetVector<F>>,
}

impl<F> UpperTriangular<F> {
    /// Create a zero-filled matrix of the given order.
    ///
    /// # Arguments
    ///
    /// * `order`: Row and column count of the represented square matrix.
    ///
    /// # Errors
    ///
    /// `OutOfRange` when `order` exceeds `MAX_MATRIX_SIZE`.
    pub fn zeros(order: usize) -> Result<Self, Error>
    where
        F: Zero,
    {
        if order > MAX_MATRIX_SIZE {
            return Err(OutOfRange::Size { requested: order, maximum: MAX_MATRIX_SIZE, }.into());
        }

        let rows = (0..order)
            .map(|i| OffsetVector::zeros(order - i, i))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows: OffsetVector::from_parts(rows, 0)?, })
    }

    /// Order of the matrix: its row count, equal to its column count.
    pub fn order(&self) -> usize {
        self.rows.len()
    }

    /// Whether the matrix has order zero.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Retrieve row `i`, the vector holding the stored cells `[i, order)`.
    ///
    /// # Errors
    ///
    /// `OutOfRange` when `i >= order`.
    pub fn row(&self, i: usize) -> Result<&OffsetVector<F>, Error> {
        self.rows.get(i)
    }

    /// Iterate over the rows in order.
    pub fn iter_rows(&self) -> Iter<'_, OffsetVector<F>> {
        self.rows.iter_values()
    }

    /// Retrieve the cell at row `i`, column `j`.
    ///
    /// # Errors
    ///
    /// `OutOfRange` when `i >= order`, or when `j` lies outside `[i, order)` — the
    /// lower triangle is not stored, so `j < i` is rejected by the row's own window.
    pub fn get(&self, i: usize, j: usize) -> Result<&F, Error> {
        self.rows.get(i)?.get(j)
    }

    /// Retrieve the cell at row `i`, column `j`, mutably.
    ///
    /// # Errors
    ///
    /// As [`UpperTriangular::get`].
    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut F, Error> {
        self.rows.get_mut(i)?.get_mut(j)
    }

    /// Row-wise sum of two matrices of equal order.
    ///
    /// Equal orders guarantee that corresponding rows have matching shapes, so the
    /// per-row addition cannot mismatch.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` carrying the two orders when they differ.
    pub fn try_add(&self, other: &Self) -> Result<Self, Error>
    where
        for<'r> &'r F: Add<&'r F, Output = F>,
    {
        self.check_equal_order(other)?;

        let rows = self.iter_rows().zip(other.iter_rows())
            .map(|(a, b)| a.try_add(b))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows: OffsetVector::from_parts(rows, 0)?, })
    }

    /// Row-wise difference of two matrices of equal order.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` carrying the two orders when they differ.
    pub fn try_sub(&self, other: &Self) -> Result<Self, Error>
    where
        for<'r> &'r F: Sub<&'r F, Output = F>,
    {
        self.check_equal_order(other)?;

        let rows = self.iter_rows().zip(other.iter_rows())
            .map(|(a, b)| a.try_sub(b))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows: OffsetVector::from_parts(rows, 0)?, })
    }

    fn check_equal_order(&self, other: &Self) -> Result<(), SizeMismatch> {
        if self.order() == other.order() {
            Ok(())
        } else {
            Err(SizeMismatch { left: self.order(), right: other.order(), })
        }
    }

    /// Overwrite the cells with values read from a token stream, row by row.
    ///
    /// Each row consumes exactly its own element count of tokens. Rows already read
    /// keep their new values when a later row fails; there is no rollback.
    ///
    /// # Errors
    ///
    /// `Parse` when a token does not parse as an `F` or the stream ends early.
    pub fn read_tokens<'a, I>(&mut self, tokens: &mut I) -> Result<(), Error>
    where
        F: FromStr,
        F::Err: Display,
        I: Iterator<Item = &'a str>,
    {
        for row in self.rows.iter_values_mut() {
            row.read_tokens(tokens)?;
        }

        Ok(())
    }
}

/// Adopt an already-shaped collection of rows as a matrix.
///
/// This is a trusted-input path: the triangular invariant (row `i` of length
/// `order - i` starting at `i`) is not re-validated. Callers are responsible for
/// shape correctness; the checked constructors remain [`UpperTriangular::zeros`] and
/// the per-row vector constructors.
impl<F> From<OffsetVector<OffsetVector<F>>> for UpperTriangular<F> {
    fn from(rows: OffsetVector<OffsetVector<F>>) -> Self {
        Self { rows, }
    }
}

impl<F: Clone> Clone for UpperTriangular<F> {
    /// Deep copy: every row is copied into freshly owned storage.
    fn clone(&self) -> Self {
        Self { rows: self.rows.clone(), }
    }

    /// Reuses the row array when the orders match, row buffers included.
    fn clone_from(&mut self, source: &Self) {
        self.rows.clone_from(&source.rows);
    }
}

/// Delegates to the outer vector's row-wise comparison: equal orders and every
/// row pair equal.
impl<F: PartialEq> PartialEq for UpperTriangular<F> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl<F: Eq> Eq for UpperTriangular<F> {}

impl<F> Index<usize> for UpperTriangular<F> {
    type Output = OffsetVector<F>;

    /// Select row `index`; `m[i][j]` composes this with the row's own checked window.
    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl<F> IndexMut<usize> for UpperTriangular<F> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.rows[index]
    }
}

impl<F: Display> Display for UpperTriangular<F> {
    /// One row per line, each in the row's own space-separated format.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.iter_rows() {
            writeln!(f, "{}", row)?;
        }

        Ok(())
    }
}
