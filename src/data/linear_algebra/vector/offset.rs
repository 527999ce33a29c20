//! # Offset vector
//!
//! Wrapping a `Vec` such that it has a fixed length and is addressed through a logical
//! window `[start_index, start_index + len)` rather than from zero.
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Range, Sub, SubAssign};
use std::slice::{Iter, IterMut};
use std::str::FromStr;

use itertools::Itertools;
use num_traits::Zero;

use crate::data::linear_algebra::error::{Error, OutOfRange, ParseError, SizeMismatch};
use crate::data::linear_algebra::MAX_VECTOR_SIZE;

/// Uses a `Vec` as underlying data structure. Length is fixed at creation.
///
/// The buffer is exclusively owned; copies never share storage. Element `i` of the
/// buffer is addressed as logical index `start_index + i`, so the valid logical
/// indices are exactly `[start_index, start_index + len)`.
#[derive(Debug)]
pub struct Offset<F> {
    data: Vec<F>,
    start_index: usize,
}

impl<F> Offset<F> {
    /// Create a zero-filled vector.
    ///
    /// # Arguments
    ///
    /// * `len`: Length of the vector, number of elements.
    /// * `start_index`: Logical index of the first element.
    ///
    /// # Errors
    ///
    /// `OutOfRange` when either argument exceeds `MAX_VECTOR_SIZE`. Lengths and
    /// indices are `usize`, so negative values are unrepresentable.
    pub fn zeros(len: usize, start_index: usize) -> Result<Self, Error>
    where
        F: Zero,
    {
        Self::check_shape(len, start_index)?;

        Ok(Self {
            data: (0..len).map(|_| F::zero()).collect(),
            start_index,
        })
    }

    /// Create a vector by adopting an existing buffer.
    ///
    /// # Arguments
    ///
    /// * `data`: Internal data values. Will not be changed and directly used for
    /// creation; its length is the vector's length.
    /// * `start_index`: Logical index of the first element.
    ///
    /// # Errors
    ///
    /// `OutOfRange` when the buffer length or the start index exceeds
    /// `MAX_VECTOR_SIZE`.
    pub fn from_parts(data: Vec<F>, start_index: usize) -> Result<Self, Error> {
        Self::check_shape(data.len(), start_index)?;

        Ok(Self { data, start_index, })
    }

    fn check_shape(len: usize, start_index: usize) -> Result<(), OutOfRange> {
        if len > MAX_VECTOR_SIZE {
            return Err(OutOfRange::Size { requested: len, maximum: MAX_VECTOR_SIZE, });
        }
        if start_index > MAX_VECTOR_SIZE {
            return Err(OutOfRange::StartIndex {
                requested: start_index,
                maximum: MAX_VECTOR_SIZE,
            });
        }

        Ok(())
    }

    /// Number of elements stored.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this vector stores no elements at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Logical index of the first element.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// The valid logical index window, `start_index..(start_index + len)`.
    pub fn range(&self) -> Range<usize> {
        self.start_index..(self.start_index + self.data.len())
    }

    /// Iterate over the element values in index order.
    pub fn iter_values(&self) -> Iter<'_, F> {
        self.data.iter()
    }

    /// Iterate mutably over the element values in index order.
    pub fn iter_values_mut(&mut self) -> IterMut<'_, F> {
        self.data.iter_mut()
    }

    /// Retrieve the element at a logical index.
    ///
    /// This checked method and its mutable sibling are the only fallible access path;
    /// the `Index` operators are sugar over them and panic instead.
    ///
    /// # Errors
    ///
    /// `OutOfRange` when `index` lies outside the logical window.
    pub fn get(&self, index: usize) -> Result<&F, Error> {
        let offset = self.offset(index)?;

        Ok(&self.data[offset])
    }

    /// Retrieve the element at a logical index, mutably.
    ///
    /// # Errors
    ///
    /// `OutOfRange` when `index` lies outside the logical window.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut F, Error> {
        let offset = self.offset(index)?;

        Ok(&mut self.data[offset])
    }

    /// Translate a logical index into a buffer offset.
    fn offset(&self, index: usize) -> Result<usize, OutOfRange> {
        let range = self.range();
        if range.contains(&index) {
            Ok(index - self.start_index)
        } else {
            Err(OutOfRange::Index { index, start: range.start, end: range.end, })
        }
    }

    /// Element-wise sum of two vectors of equal length.
    ///
    /// The result has the length and start index of `self`.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` when the lengths differ.
    pub fn try_add(&self, other: &Self) -> Result<Self, Error>
    where
        for<'r> &'r F: Add<&'r F, Output = F>,
    {
        self.check_equal_len(other)?;

        Ok(Self {
            data: self.data.iter().zip(&other.data).map(|(a, b)| a + b).collect(),
            start_index: self.start_index,
        })
    }

    /// Element-wise difference of two vectors of equal length.
    ///
    /// The result has the length and start index of `self`.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` when the lengths differ.
    pub fn try_sub(&self, other: &Self) -> Result<Self, Error>
    where
        for<'r> &'r F: Sub<&'r F, Output = F>,
    {
        self.check_equal_len(other)?;

        Ok(Self {
            data: self.data.iter().zip(&other.data).map(|(a, b)| a - b).collect(),
            start_index: self.start_index,
        })
    }

    /// Compute the inner product with another vector of equal length.
    ///
    /// The sum of element-wise products, accumulated from `F::zero()`.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` when the lengths differ.
    pub fn dot(&self, other: &Self) -> Result<F, Error>
    where
        F: Zero + AddAssign,
        for<'r> &'r F: Mul<&'r F, Output = F>,
    {
        self.check_equal_len(other)?;

        let mut total = F::zero();
        for (a, b) in self.data.iter().zip(&other.data) {
            total += a * b;
        }

        Ok(total)
    }

    fn check_equal_len(&self, other: &Self) -> Result<(), SizeMismatch> {
        if self.data.len() == other.data.len() {
            Ok(())
        } else {
            Err(SizeMismatch { left: self.data.len(), right: other.data.len(), })
        }
    }

    /// Overwrite the elements, in index order, with values read from a token stream.
    ///
    /// Consumes exactly `len` tokens. The receiver is unchanged when an error is
    /// returned.
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
        let mut values = Vec::with_capacity(self.data.len());
        for _ in 0..self.data.len() {
            let token = tokens.next().ok_or_else(|| ParseError::new(
                "token stream ended before the vector was filled",
            ))?;
            values.push(token.parse::<F>().map_err(|error| ParseError::new(
                format!("invalid value \"{}\": {}", token, error),
            ))?);
        }
        self.data = values;

        Ok(())
    }
}

impl<F: Clone> Clone for Offset<F> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            start_index: self.start_index,
        }
    }

    /// `Vec::clone_from` reuses the existing allocation when it is large enough, so
    /// assigning between vectors of equal length copies elements without reallocating.
    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.start_index = source.start_index;
    }
}

/// Equal exactly when the lengths match and every element pair is equal.
///
/// Every pair participates; the start index does not. Two windows addressed by
/// different ranges but holding the same values compare equal.
impl<F: PartialEq> PartialEq for Offset<F> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<F: Eq> Eq for Offset<F> {}

impl<F> Index<usize> for Offset<F> {
    type Output = F;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<F> IndexMut<usize> for Offset<F> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<F: AddAssign + Clone> AddAssign<F> for Offset<F> {
    /// Add the scalar to every element, in place.
    fn add_assign(&mut self, rhs: F) {
        for value in &mut self.data {
            *value += rhs.clone();
        }
    }
}

impl<F: AddAssign + Clone> Add<F> for Offset<F> {
    type Output = Self;

    /// Add the scalar to every element of the moved vector.
    fn add(mut self, rhs: F) -> Self::Output {
        self += rhs;
        self
    }
}

impl<F: SubAssign + Clone> SubAssign<F> for Offset<F> {
    /// Subtract the scalar from every element, in place.
    fn sub_assign(&mut self, rhs: F) {
        for value in &mut self.data {
            *value -= rhs.clone();
        }
    }
}

impl<F: SubAssign + Clone> Sub<F> for Offset<F> {
    type Output = Self;

    /// Subtract the scalar from every element of the moved vector.
    fn sub(mut self, rhs: F) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<F: MulAssign + Clone> MulAssign<F> for Offset<F> {
    /// Multiply every element by the scalar, in place.
    fn mul_assign(&mut self, rhs: F) {
        for value in &mut self.data {
            *value *= rhs.clone();
        }
    }
}

impl<F: MulAssign + Clone> Mul<F> for Offset<F> {
    type Output = Self;

    /// Multiply every element of the moved vector by the scalar.
    fn mul(mut self, rhs: F) -> Self::Output {
        self *= rhs;
        self
    }
}

impl<F: Display> Display for Offset<F> {
    /// Elements in index order, separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.data.iter().format(" "))
    }
}
