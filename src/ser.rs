use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::InlineVec;

// Serialized like a slice: the capacity is part of the type, not of the data.
impl<T, const N: usize> Serialize for InlineVec<T, N>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}
