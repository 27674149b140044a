use ufmt_write::uWrite;

use crate::{CapacityError, InlineVec};

impl<const N: usize> uWrite for InlineVec<u8, N> {
    type Error = CapacityError;
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.extend_from_slice(s.as_bytes())
    }
}
