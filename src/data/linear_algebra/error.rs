//! # Error reporting for vector and matrix operations
//!
//! A collection of enums and structures describing any shape violation encountered
//! while constructing, indexing or combining vectors and matrices, and any problem
//! encountered while reading them back from text.
use std::error;
use std::fmt;
use std::fmt::Display;

/// An `Error` is created when an operation on a vector or matrix is rejected.
///
/// It is the highest error in the error hierarchy of this crate. Every violation is
/// detected synchronously at the call that would commit it; the receiver of a failed
/// operation is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A size, start index or element index lies outside its allowed range.
    OutOfRange(OutOfRange),
    /// A binary operation was attempted between operands of unequal length.
    SizeMismatch(SizeMismatch),
    /// A value could not be read back from its text form.
    Parse(ParseError),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OutOfRange(error) => error.fmt(f),
            Error::SizeMismatch(error) => error.fmt(f),
            Error::Parse(error) => error.fmt(f),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::OutOfRange(_) | Error::SizeMismatch(_) => None,
            Error::Parse(error) => Some(error),
        }
    }
}

/// Which of the range invariants was violated, and by which values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutOfRange {
    /// A requested element count or matrix order exceeds its ceiling.
    Size {
        /// The rejected count.
        requested: usize,
        /// The largest acceptable count.
        maximum: usize,
    },
    /// A requested start index exceeds its ceiling.
    StartIndex {
        /// The rejected start index.
        requested: usize,
        /// The largest acceptable start index.
        maximum: usize,
    },
    /// An element access outside the valid logical window `[start, end)`.
    Index {
        /// The rejected logical index.
        index: usize,
        /// First valid logical index.
        start: usize,
        /// One past the last valid logical index.
        end: usize,
    },
}

impl Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OutOfRange::Size { requested, maximum } => write!(
                f, "size {} exceeds the maximum of {}", requested, maximum,
            ),
            OutOfRange::StartIndex { requested, maximum } => write!(
                f, "start index {} exceeds the maximum of {}", requested, maximum,
            ),
            OutOfRange::Index { index, start, end } => write!(
                f, "index {} outside the valid range [{}, {})", index, start, end,
            ),
        }
    }
}

impl error::Error for OutOfRange {
}

impl From<OutOfRange> for Error {
    fn from(error: OutOfRange) -> Self {
        Self::OutOfRange(error)
    }
}

/// Lengths of the two operands of a rejected binary operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeMismatch {
    /// Length of the left operand.
    pub left: usize,
    /// Length of the right operand.
    pub right: usize,
}

impl Display for SizeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "operand sizes {} and {} differ", self.left, self.right)
    }
}

impl error::Error for SizeMismatch {
}

impl From<SizeMismatch> for Error {
    fn from(error: SizeMismatch) -> Self {
        Self::SizeMismatch(error)
    }
}

/// A `ParseError` represents all problems encountered while reading values from text.
///
/// The text format carries no size information of its own; a stream ending before the
/// receiver is filled is reported through this type as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    description: String,
}

impl ParseError {
    /// Create a new `ParseError` with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    pub fn new(description: impl Into<String>) -> ParseError {
        ParseError { description: description.into(), }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "parse error: {}", self.description)
    }
}

impl error::Error for ParseError {
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}
