//! Defmt implementations for the vector and its errors

use defmt::Formatter;

use crate::{CapacityError, Error, InlineVec, OutOfRange};

impl<T, const N: usize> defmt::Format for InlineVec<T, N>
where
    T: defmt::Format,
{
    fn format(&self, fmt: Formatter<'_>) {
        defmt::write!(fmt, "{=[?]}", self.as_slice())
    }
}

impl<T> defmt::Format for CapacityError<T> {
    fn format(&self, fmt: Formatter<'_>) {
        defmt::write!(fmt, "CapacityError")
    }
}

impl defmt::Format for OutOfRange {
    fn format(&self, fmt: Formatter<'_>) {
        defmt::write!(
            fmt,
            "OutOfRange(index: {=usize}, len: {=usize})",
            self.index,
            self.len
        )
    }
}

impl defmt::Format for Error {
    fn format(&self, fmt: Formatter<'_>) {
        match self {
            Self::CapacityExceeded => defmt::write!(fmt, "CapacityExceeded"),
            Self::OutOfRange { index, len } => defmt::write!(
                fmt,
                "OutOfRange(index: {=usize}, len: {=usize})",
                *index,
                *len
            ),
        }
    }
}
