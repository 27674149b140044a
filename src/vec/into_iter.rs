use core::{fmt, iter::FusedIterator, mem::ManuallyDrop, ptr, slice};

use super::InlineVec;

/// An iterator that moves out of an [`InlineVec`].
///
/// This struct is created by calling `into_iter` on an [`InlineVec`].
/// Elements that are not yielded are dropped together with the iterator.
pub struct IntoIter<T, const N: usize> {
    // `ManuallyDrop` so the vector's own destructor never runs: the live
    // range of the iterator is `next..end`, not `0..len`.
    vec: ManuallyDrop<InlineVec<T, N>>,
    next: usize,
    end: usize,
}

impl<T, const N: usize> IntoIter<T, N> {
    pub(super) fn new(vec: InlineVec<T, N>) -> Self {
        let end = vec.len();
        Self {
            vec: ManuallyDrop::new(vec),
            next: 0,
            end,
        }
    }

    /// Returns the elements not yet yielded as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots `next..end` are still initialized
        unsafe { slice::from_raw_parts(self.vec.as_ptr().add(self.next), self.end - self.next) }
    }

    /// Returns the elements not yet yielded as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe {
            slice::from_raw_parts_mut(
                self.vec.as_mut_ptr().add(self.next),
                self.end - self.next,
            )
        }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next < self.end {
            // SAFETY: the slot is live and is excluded from the live range
            // before anyone can observe it again
            let item = unsafe { ptr::read(self.vec.as_ptr().add(self.next)) };
            self.next += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next < self.end {
            self.end -= 1;
            Some(unsafe { ptr::read(self.vec.as_ptr().add(self.end)) })
        } else {
            None
        }
    }
}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {
    fn len(&self) -> usize {
        self.end - self.next
    }
}

impl<T, const N: usize> Clone for IntoIter<T, N>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut vec = InlineVec::new();
        // the remaining elements always fit, they came from a vector of the
        // same capacity
        for elem in self.as_slice() {
            unsafe { vec.push_unchecked(elem.clone()) };
        }
        Self::new(vec)
    }
}

impl<T, const N: usize> fmt::Debug for IntoIter<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        // Drop all the elements that have not been moved out
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}
