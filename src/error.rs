//! Error types returned by [`InlineVec`](crate::InlineVec).
//!
//! Both failure kinds are detected before the container is touched, so an
//! `Err` always means "nothing happened".

use core::{error::Error as CoreError, fmt};

/// An insertion was rejected because the vector is full.
///
/// Carries back the element that could not be inserted, so that no value is
/// lost when the container has no room for it. Operations with nothing to
/// hand back use the default `T = ()`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CapacityError<T = ()> {
    element: T,
}

impl<T> CapacityError<T> {
    /// Creates a new `CapacityError` holding the rejected `element`.
    pub const fn new(element: T) -> Self {
        Self { element }
    }

    /// Returns a reference to the rejected element.
    pub const fn element(&self) -> &T {
        &self.element
    }

    /// Extracts the rejected element, consuming the error.
    pub fn into_inner(self) -> T {
        self.element
    }

    /// Drops the rejected element, keeping only the fact that the vector was full.
    pub fn simplify(self) -> CapacityError {
        CapacityError::new(())
    }
}

// Hand written so that `T` does not need to be `Debug`.
impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CapacityError")
    }
}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("insufficient capacity")
    }
}

impl<T> CoreError for CapacityError<T> {}

/// A checked access used an index outside of the live elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfRange {
    /// The index that was requested.
    pub index: usize,
    /// The length of the vector at the time of the access.
    pub len: usize,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of range for vector of length {}",
            self.index, self.len
        )
    }
}

impl CoreError for OutOfRange {}

/// Any error an [`InlineVec`](crate::InlineVec) operation can report.
///
/// Useful when a caller mixes checked accesses and insertions and wants a
/// single error type to propagate with `?`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An insertion would have exceeded the fixed capacity.
    CapacityExceeded,
    /// A checked access was outside of `0..len`.
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// The length of the vector at the time of the access.
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded => f.write_str("insufficient capacity"),
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for vector of length {len}")
            }
        }
    }
}

impl CoreError for Error {}

impl<T> From<CapacityError<T>> for Error {
    fn from(_: CapacityError<T>) -> Self {
        Self::CapacityExceeded
    }
}

impl From<OutOfRange> for Error {
    fn from(e: OutOfRange) -> Self {
        Self::OutOfRange {
            index: e.index,
            len: e.len,
        }
    }
}
