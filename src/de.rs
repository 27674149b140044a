use core::{fmt, marker::PhantomData};

use serde::de::{self, Deserialize, Deserializer, Error, SeqAccess};

use crate::InlineVec;

impl<'de, T, const N: usize> Deserialize<'de> for InlineVec<T, N>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor<'de, T, const N: usize>(PhantomData<(&'de (), T)>);

        impl<'de, T, const N: usize> de::Visitor<'de> for ValueVisitor<'de, T, N>
        where
            T: Deserialize<'de>,
        {
            type Value = InlineVec<T, N>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(formatter, "a sequence of at most {N} elements")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                // A size hint larger than the capacity is rejected before
                // deserializing a single element.
                if let Some(len) = seq.size_hint() {
                    if len > N {
                        return Err(A::Error::invalid_length(len, &self));
                    }
                }

                let mut values = InlineVec::new();

                while let Some(value) = seq.next_element()? {
                    if values.push(value).is_err() {
                        return Err(A::Error::invalid_length(N + 1, &self));
                    }
                }

                Ok(values)
            }
        }
        deserializer.deserialize_seq(ValueVisitor(PhantomData))
    }
}
