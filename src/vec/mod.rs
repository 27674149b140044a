//! A fixed capacity vector whose elements are stored inline.

use core::{
    borrow,
    cmp::Ordering,
    fmt, hash,
    mem::{self, ManuallyDrop, MaybeUninit},
    ops, ptr, slice,
};

use crate::error::{CapacityError, OutOfRange};

mod into_iter;

pub use into_iter::IntoIter;

/// A vector with a fixed capacity of `N` elements, stored inline.
///
/// The storage is an array of `N` uninitialized slots embedded in the value
/// itself. Only the first [`len`](Self::len) slots hold live elements; the
/// rest are never read, written through a reference, or dropped. The
/// container never allocates and never grows: every insertion checks the
/// capacity first and hands the element back when there is no room.
///
/// # Examples
///
/// ```
/// use inline_vec::InlineVec;
///
/// // A vector with a fixed capacity of 8 elements allocated on the stack
/// let mut vec = InlineVec::<_, 8>::new();
/// vec.push(1).unwrap();
/// vec.push(2).unwrap();
///
/// assert_eq!(vec.len(), 2);
/// assert_eq!(vec[0], 1);
///
/// assert_eq!(vec.pop(), Some(2));
/// assert_eq!(vec.len(), 1);
///
/// vec[0] = 7;
/// assert_eq!(vec[0], 7);
///
/// vec.extend([1, 2, 3].iter().cloned());
///
/// for x in &vec {
///     println!("{}", x);
/// }
/// assert_eq!(*vec, [7, 1, 2, 3]);
/// ```
pub struct InlineVec<T, const N: usize> {
    len: usize,
    buffer: [MaybeUninit<T>; N],
}

impl<T, const N: usize> InlineVec<T, N> {
    /// The maximum number of elements the vector can hold.
    pub const CAPACITY: usize = N;

    const ELEM: MaybeUninit<T> = MaybeUninit::uninit();
    const INIT: [MaybeUninit<T>; N] = [Self::ELEM; N]; // important for optimization of `new`

    /// Constructs a new, empty vector with a fixed capacity of `N`
    ///
    /// # Examples
    ///
    /// ```
    /// use inline_vec::InlineVec;
    ///
    /// // allocate the vector on the stack
    /// let mut x: InlineVec<u8, 16> = InlineVec::new();
    ///
    /// // allocate the vector in a static variable
    /// static mut X: InlineVec<u8, 16> = InlineVec::new();
    /// ```
    pub const fn new() -> Self {
        Self {
            len: 0,
            buffer: Self::INIT,
        }
    }

    /// Constructs a new vector holding the elements of `src`, in order.
    ///
    /// The length of the array, `M`, may be equal to or less than the
    /// capacity `N`. A larger array is rejected at compile time:
    ///
    /// ```compile_fail
    /// use inline_vec::InlineVec;
    ///
    /// let v: InlineVec<u8, 2> = InlineVec::from_array([1, 2, 3]);
    /// ```
    pub const fn from_array<const M: usize>(src: [T; M]) -> Self {
        const {
            assert!(N >= M, "array is longer than the vector capacity");
        }

        // The elements are moved bitwise into the buffer, the array itself
        // must not run any destructor.
        let src = ManuallyDrop::new(src);

        let mut v = Self::new();

        // `ManuallyDrop<[T; M]>` is transparent over `[T; M]`.
        let src_ptr: *const T = ptr::from_ref(&src).cast();
        let dst_ptr: *mut T = v.buffer.as_mut_ptr().cast();

        unsafe { ptr::copy_nonoverlapping(src_ptr, dst_ptr, M) };
        v.len = M;

        v
    }

    /// Constructs a new vector by cloning every element of `other`.
    ///
    /// Fails without cloning anything if `other` is longer than `N`.
    ///
    /// ```
    /// use inline_vec::InlineVec;
    ///
    /// let v: InlineVec<u8, 4> = InlineVec::from_slice(&[1, 2, 3]).unwrap();
    /// assert_eq!(v, [1, 2, 3]);
    ///
    /// assert!(InlineVec::<u8, 2>::from_slice(&[1, 2, 3]).is_err());
    /// ```
    pub fn from_slice(other: &[T]) -> Result<Self, CapacityError>
    where
        T: Clone,
    {
        let mut v = Self::new();
        v.extend_from_slice(other)?;
        Ok(v)
    }

    /// Constructs a new vector from the items of an iterator.
    ///
    /// Unlike [`FromIterator`], this doesn't panic when the iterator yields
    /// more than `N` items: the first item that doesn't fit is returned in
    /// the error and everything collected so far is dropped.
    ///
    /// ```
    /// use inline_vec::InlineVec;
    ///
    /// let v = InlineVec::<_, 3>::try_from_iter(1..=3).unwrap();
    /// assert_eq!(v, [1, 2, 3]);
    ///
    /// let err = InlineVec::<_, 3>::try_from_iter(1..=5).unwrap_err();
    /// assert_eq!(err.into_inner(), 4);
    /// ```
    pub fn try_from_iter<I>(iter: I) -> Result<Self, CapacityError<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let mut v = Self::new();
        for elem in iter {
            v.push(elem)?;
        }
        Ok(v)
    }

    /// Moves every element into a new vector, leaving `self` empty.
    ///
    /// `self` stays usable afterwards and behaves like a freshly created
    /// vector. This is the same as `core::mem::take(self)`.
    ///
    /// ```
    /// use inline_vec::InlineVec;
    ///
    /// let mut a = InlineVec::<_, 4>::from_array([1, 2, 3]);
    /// let b = a.take();
    /// assert!(a.is_empty());
    /// assert_eq!(b, [1, 2, 3]);
    ///
    /// a.push(4).unwrap();
    /// assert_eq!(a, [4]);
    /// ```
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }

    /// Returns a raw pointer to the vector's buffer.
    ///
    /// The pointer is valid for reads of [`len`](Self::len) elements and
    /// stays the same for as long as the vector isn't moved.
    pub fn as_ptr(&self) -> *const T {
        self.buffer.as_ptr().cast::<T>()
    }

    /// Returns a raw pointer to the vector's buffer, which may be mutated through.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buffer.as_mut_ptr().cast::<T>()
    }

    /// Extracts a slice containing the entire vector.
    ///
    /// Equivalent to `&s[..]`.
    pub fn as_slice(&self) -> &[T] {
        // NOTE(unsafe) slots `0..len` are initialized
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    /// Extracts a mutable slice containing the entire vector.
    ///
    /// Equivalent to `&mut s[..]`.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // NOTE(unsafe) slots `0..len` are initialized
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    /// Returns the maximum number of elements the vector can hold.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the largest length the vector can ever reach.
    ///
    /// There's no distinction between capacity and maximum size for an
    /// inline vector, so this always equals [`capacity`](Self::capacity).
    pub const fn max_len(&self) -> usize {
        N
    }

    /// Returns the number of elements in the vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the vec is empty
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the vec is full
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns how many more elements fit before the vector is full.
    pub const fn remaining_capacity(&self) -> usize {
        N - self.len
    }

    /// Returns a reference to the element at `index`, or [`OutOfRange`] if
    /// there is no such element.
    ///
    /// ```
    /// use inline_vec::{InlineVec, OutOfRange};
    ///
    /// let v = InlineVec::<_, 10>::from_array([1, 2, 3]);
    /// assert_eq!(v.at(2), Ok(&3));
    /// assert_eq!(v.at(3), Err(OutOfRange { index: 3, len: 3 }));
    ///
    /// let empty = InlineVec::<u8, 10>::new();
    /// assert!(empty.at(0).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        if index >= self.len {
            return Err(OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(unsafe { &*self.as_ptr().add(index) })
    }

    /// Returns a mutable reference to the element at `index`, or
    /// [`OutOfRange`] if there is no such element.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        if index >= self.len {
            return Err(OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(unsafe { &mut *self.as_mut_ptr().add(index) })
    }

    /// Returns the first element, or `None` if the vector is empty.
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the first element mutably, or `None` if the vector is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element, or `None` if the vector is empty.
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the last element mutably, or `None` if the vector is empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Clears the vector, removing all values.
    ///
    /// Elements are dropped in index order.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Extends the vec from an iterator.
    ///
    /// # Panic
    ///
    /// Panics if the vec cannot hold all elements of the iterator.
    pub fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for elem in iter {
            if self.push(elem).is_err() {
                panic!("InlineVec::extend overflow (capacity is {N})");
            }
        }
    }

    /// Clones and appends all elements in a slice to the vector.
    ///
    /// Either every element is appended or, when they don't all fit,
    /// nothing is.
    ///
    /// ```
    /// use inline_vec::InlineVec;
    ///
    /// let mut vec = InlineVec::<u8, 4>::new();
    /// vec.push(1).unwrap();
    /// vec.extend_from_slice(&[2, 3, 4]).unwrap();
    /// assert_eq!(*vec, [1, 2, 3, 4]);
    /// ```
    pub fn extend_from_slice(&mut self, other: &[T]) -> Result<(), CapacityError>
    where
        T: Clone,
    {
        if other.len() > self.remaining_capacity() {
            // won't fit; don't modify anything and return an error
            return Err(CapacityError::new(()));
        }

        for elem in other {
            // `len` is bumped after every write so a panicking `clone`
            // leaves a consistent prefix behind
            unsafe { self.push_unchecked(elem.clone()) };
        }
        Ok(())
    }

    /// Removes the last element from a vector and returns it, or `None` if it's empty
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            Some(unsafe { self.pop_unchecked() })
        }
    }

    /// Appends an `item` to the back of the collection
    ///
    /// Returns back the `item` inside the error if the vector is full.
    pub fn push(&mut self, item: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            return Err(CapacityError::new(item));
        }
        unsafe { self.push_unchecked(item) }
        Ok(())
    }

    /// Constructs a new element directly in the next free slot.
    ///
    /// The capacity is checked before `f` runs: when the vector is full, `f`
    /// is never called. Returns a reference to the new element.
    ///
    /// ```
    /// use inline_vec::InlineVec;
    ///
    /// let mut v = InlineVec::<[u8; 4], 1>::new();
    /// let slot = v.push_with(|| [0; 4]).unwrap();
    /// slot[3] = 9;
    /// assert_eq!(v[0], [0, 0, 0, 9]);
    ///
    /// assert!(v.push_with(|| unreachable!()).is_err());
    /// ```
    pub fn push_with<F>(&mut self, f: F) -> Result<&mut T, CapacityError>
    where
        F: FnOnce() -> T,
    {
        if self.is_full() {
            return Err(CapacityError::new(()));
        }

        let len = self.len;
        let elem = self.buffer[len].write(f());
        self.len = len + 1;
        Ok(elem)
    }

    /// Removes the last element from a vector and returns it
    ///
    /// # Safety
    ///
    /// This assumes the vec to have at least one element.
    pub unsafe fn pop_unchecked(&mut self) -> T {
        debug_assert!(!self.is_empty());

        self.len -= 1;
        self.buffer.get_unchecked(self.len).as_ptr().read()
    }

    /// Appends an `item` to the back of the collection
    ///
    /// # Safety
    ///
    /// This assumes the vec is not full.
    pub unsafe fn push_unchecked(&mut self, item: T) {
        // NOTE the slot we are about to write to is uninitialized, so it is
        // overwritten as a `MaybeUninit` and no destructor runs on it
        debug_assert!(!self.is_full());

        *self.buffer.get_unchecked_mut(self.len) = MaybeUninit::new(item);

        self.len += 1;
    }

    /// Shortens the vector, keeping the first `len` elements and dropping the rest.
    ///
    /// Has no effect if `len` is greater than the current length.
    pub fn truncate(&mut self, len: usize) {
        // The length is shrunk before `drop_in_place` runs, so a panicking
        // destructor can't cause the tail to be dropped twice.
        if len > self.len {
            return;
        }
        let remaining_len = self.len - len;
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.as_mut_ptr().add(len), remaining_len);
            self.len = len;
            ptr::drop_in_place(tail);
        }
    }

    /// Resizes the vector in-place so that its length is `new_len`.
    ///
    /// Grows with clones of `value`, or truncates. Fails without changing
    /// anything if `new_len` is greater than the capacity.
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), CapacityError>
    where
        T: Clone,
    {
        if new_len > N {
            return Err(CapacityError::new(()));
        }

        if new_len > self.len {
            while self.len < new_len {
                unsafe { self.push_unchecked(value.clone()) };
            }
        } else {
            self.truncate(new_len);
        }

        Ok(())
    }

    /// Forces the length of the vector to `new_len`.
    ///
    /// # Safety
    ///
    /// - `new_len` must be less than or equal to [`capacity()`](Self::capacity).
    /// - The elements at `old_len..new_len` must be initialized.
    pub unsafe fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= N);

        self.len = new_len;
    }

    /// Inserts an element at position `index` within the vector, shifting all
    /// elements after it to the right.
    ///
    /// Returns back the `element` inside the error if the vector is full; in
    /// that case the vector is left untouched. On success, returns a
    /// reference to the inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use inline_vec::InlineVec;
    ///
    /// let mut vec: InlineVec<_, 4> = InlineVec::from_array([1, 2, 3]);
    /// vec.insert(0, 10).unwrap();
    /// assert_eq!(vec, [10, 1, 2, 3]);
    ///
    /// let err = vec.insert(4, 5).unwrap_err();
    /// assert_eq!(err.into_inner(), 5);
    /// assert_eq!(vec, [10, 1, 2, 3]);
    /// ```
    pub fn insert(&mut self, index: usize, element: T) -> Result<&mut T, CapacityError<T>> {
        let len = self.len;
        if index > len {
            panic!("insertion index (is {index}) should be <= len (is {len})");
        }

        if self.is_full() {
            return Err(CapacityError::new(element));
        }

        // Relocating the tail is a bitwise move: the first vacated slot is
        // written with `ptr::write`, never assigned to, so there is no state
        // in which an uninitialized slot is treated as a live element.
        unsafe {
            let p = self.as_mut_ptr().add(index);
            // Shift everything over to make space. (Duplicating the
            // `index`th element into two consecutive places.)
            ptr::copy(p, p.add(1), len - index);
            // Write it in, overwriting the first copy of the `index`th
            // element.
            ptr::write(p, element);
            self.len = len + 1;
            Ok(&mut *p)
        }
    }

    /// Removes and returns the element at position `index` within the vector,
    /// shifting all elements after it to the left.
    ///
    /// Afterwards `index` refers to the element that followed the removed one,
    /// or is equal to the length if the last element was removed.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use inline_vec::InlineVec;
    ///
    /// let mut v: InlineVec<_, 3> = InlineVec::from_array([1, 2, 3]);
    /// assert_eq!(v.remove(0), 1);
    /// assert_eq!(v, [2, 3]);
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        if index >= len {
            panic!("removal index (is {index}) should be < len (is {len})");
        }
        unsafe {
            let p = self.as_mut_ptr().add(index);
            // Copy it out, for a moment the value exists both on the stack
            // and in the vector.
            let ret = ptr::read(p);

            // Shift everything down to fill in that spot.
            ptr::copy(p.add(1), p, len - index - 1);
            self.len = len - 1;
            ret
        }
    }

    /// Removes an element from the vector and returns it.
    ///
    /// The removed element is replaced by the last element of the vector.
    /// This does not preserve ordering, but is *O*(1).
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn swap_remove(&mut self, index: usize) -> T {
        let len = self.len;
        if index >= len {
            panic!("swap_remove index (is {index}) should be < len (is {len})");
        }
        unsafe {
            let base = self.as_mut_ptr();
            let value = ptr::read(base.add(index));
            ptr::copy(base.add(len - 1), base.add(index), 1);
            self.len = len - 1;
            value
        }
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// Each element is visited exactly once, in order, and the retained
    /// elements keep their relative order.
    ///
    /// ```
    /// use inline_vec::InlineVec;
    ///
    /// let mut vec: InlineVec<_, 8> = InlineVec::from_array([1, 2, 3, 4]);
    /// vec.retain(|&x| x % 2 == 0);
    /// assert_eq!(vec, [2, 4]);
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.retain_mut(|elem| f(elem));
    }

    /// Retains only the elements specified by the predicate, passing a
    /// mutable reference to it.
    pub fn retain_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T) -> bool,
    {
        // [kept | holes | unchecked]
        //
        // While the predicate runs the vector may contain holes, so its
        // length is zero until the guard below closes them. The guard also
        // runs if the predicate or an element's `Drop` panics.
        struct BackshiftOnDrop<'a, T, const N: usize> {
            v: &'a mut InlineVec<T, N>,
            processed: usize,
            deleted: usize,
            original_len: usize,
        }

        impl<T, const N: usize> Drop for BackshiftOnDrop<'_, T, N> {
            fn drop(&mut self) {
                if self.deleted > 0 {
                    // SAFETY: unchecked elements are still valid and the
                    // destination range only covers holes and the tail
                    unsafe {
                        let base = self.v.as_mut_ptr();
                        ptr::copy(
                            base.add(self.processed),
                            base.add(self.processed - self.deleted),
                            self.original_len - self.processed,
                        );
                    }
                }
                self.v.len = self.original_len - self.deleted;
            }
        }

        let original_len = self.len;
        self.len = 0;

        let mut g = BackshiftOnDrop {
            v: self,
            processed: 0,
            deleted: 0,
            original_len,
        };

        while g.processed != original_len {
            let base = g.v.as_mut_ptr();
            // SAFETY: `processed < original_len`, the element is live
            let cur = unsafe { &mut *base.add(g.processed) };
            if !f(cur) {
                // Advance first so a panicking `drop_in_place` can't cause
                // a double drop.
                g.processed += 1;
                g.deleted += 1;
                unsafe { ptr::drop_in_place(cur) };
                continue;
            }
            if g.deleted > 0 {
                // SAFETY: the hole is strictly before `cur`, the element is
                // moved and never touched again at its old position
                unsafe {
                    let hole = base.add(g.processed - g.deleted);
                    ptr::copy_nonoverlapping(cur, hole, 1);
                }
            }
            g.processed += 1;
        }

        drop(g);
    }

    /// Returns the unused slots as a slice of `MaybeUninit<T>`.
    ///
    /// Values written here become part of the vector only after a call to
    /// [`set_len`](Self::set_len).
    pub fn spare_capacity_mut(&mut self) -> &mut [MaybeUninit<T>] {
        &mut self.buffer[self.len..]
    }
}

// Trait implementations

impl<T, const N: usize> Default for InlineVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Drop for InlineVec<T, N> {
    fn drop(&mut self) {
        // SAFETY: exactly the slots `0..len` are initialized
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T, const N: usize> Clone for InlineVec<T, N>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut new = Self::new();
        // same capacity, so every push fits
        for elem in self {
            unsafe { new.push_unchecked(elem.clone()) }
        }
        new
    }

    fn clone_from(&mut self, source: &Self) {
        // Old elements go first: mixing them with the new ones could exceed
        // the capacity.
        self.clear();
        for elem in source {
            unsafe { self.push_unchecked(elem.clone()) }
        }
    }
}

impl<T, const N: usize> fmt::Debug for InlineVec<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <[T] as fmt::Debug>::fmt(self, f)
    }
}

impl<const N: usize> fmt::Write for InlineVec<u8, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.extend_from_slice(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

impl<T, const N: usize, const M: usize> From<[T; M]> for InlineVec<T, N> {
    fn from(array: [T; M]) -> Self {
        Self::from_array(array)
    }
}

impl<'a, T: Clone, const N: usize> TryFrom<&'a [T]> for InlineVec<T, N> {
    type Error = CapacityError;

    fn try_from(slice: &'a [T]) -> Result<Self, Self::Error> {
        Self::from_slice(slice)
    }
}

impl<T, const N: usize> Extend<T> for InlineVec<T, N> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.extend(iter);
    }
}

impl<'a, T, const N: usize> Extend<&'a T> for InlineVec<T, N>
where
    T: 'a + Copy,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = &'a T>,
    {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const N: usize> FromIterator<T> for InlineVec<T, N> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        match Self::try_from_iter(iter) {
            Ok(vec) => vec,
            Err(_) => panic!("InlineVec::from_iter overflow (capacity is {N})"),
        }
    }
}

impl<T, const N: usize> hash::Hash for InlineVec<T, N>
where
    T: hash::Hash,
{
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        <[T] as hash::Hash>::hash(self, state);
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a InlineVec<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut InlineVec<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, const N: usize> IntoIterator for InlineVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<A, B, const N: usize, const M: usize> PartialEq<InlineVec<B, M>> for InlineVec<A, N>
where
    A: PartialEq<B>,
{
    fn eq(&self, other: &InlineVec<B, M>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<A, B, const N: usize, const M: usize> PartialEq<InlineVec<B, N>> for [A; M]
where
    A: PartialEq<B>,
{
    fn eq(&self, other: &InlineVec<B, N>) -> bool {
        self.eq(other.as_slice())
    }
}

impl<A, B, const N: usize, const M: usize> PartialEq<InlineVec<B, N>> for &[A; M]
where
    A: PartialEq<B>,
{
    fn eq(&self, other: &InlineVec<B, N>) -> bool {
        (*self).eq(other)
    }
}

impl<A, B, const N: usize> PartialEq<InlineVec<B, N>> for [A]
where
    A: PartialEq<B>,
{
    fn eq(&self, other: &InlineVec<B, N>) -> bool {
        self.eq(other.as_slice())
    }
}

impl<A, B, const N: usize> PartialEq<InlineVec<B, N>> for &[A]
where
    A: PartialEq<B>,
{
    fn eq(&self, other: &InlineVec<B, N>) -> bool {
        (*self).eq(other)
    }
}

impl<A, B, const N: usize, const M: usize> PartialEq<[B; M]> for InlineVec<A, N>
where
    A: PartialEq<B>,
{
    #[inline]
    fn eq(&self, other: &[B; M]) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<A, B, const N: usize, const M: usize> PartialEq<&[B; M]> for InlineVec<A, N>
where
    A: PartialEq<B>,
{
    #[inline]
    fn eq(&self, other: &&[B; M]) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<A, B, const N: usize> PartialEq<[B]> for InlineVec<A, N>
where
    A: PartialEq<B>,
{
    #[inline]
    fn eq(&self, other: &[B]) -> bool {
        self.as_slice().eq(other)
    }
}

impl<A, B, const N: usize> PartialEq<&[B]> for InlineVec<A, N>
where
    A: PartialEq<B>,
{
    #[inline]
    fn eq(&self, other: &&[B]) -> bool {
        self.as_slice().eq(*other)
    }
}

impl<T, const N: usize> Eq for InlineVec<T, N> where T: Eq {}

impl<T, const N: usize, const M: usize> PartialOrd<InlineVec<T, M>> for InlineVec<T, N>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &InlineVec<T, M>) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T, const N: usize> Ord for InlineVec<T, N>
where
    T: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T, const N: usize> ops::Deref for InlineVec<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, const N: usize> ops::DerefMut for InlineVec<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> borrow::Borrow<[T]> for InlineVec<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> borrow::BorrowMut<[T]> for InlineVec<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for InlineVec<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> AsMut<[T]> for InlineVec<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

#[cfg(test)]
mod tests {
    use core::fmt::Write;

    use static_assertions::{assert_impl_all, assert_not_impl_any};

    use super::InlineVec;
    use crate::{CapacityError, OutOfRange};

    // A vector is exactly as thread-safe as its elements.
    assert_impl_all!(InlineVec<u8, 4>: Send, Sync);
    assert_not_impl_any!(InlineVec<*const (), 4>: Send, Sync);

    #[test]
    fn static_new() {
        static mut _V: InlineVec<i32, 4> = InlineVec::new();
    }

    #[test]
    fn stack_new() {
        let v: InlineVec<i32, 10> = InlineVec::new();
        assert_eq!(v.len(), 0);
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 10);
        assert_eq!(v.max_len(), 10);
        assert_eq!(InlineVec::<i32, 10>::CAPACITY, 10);
    }

    #[test]
    fn zero_capacity() {
        let mut v: InlineVec<i32, 0> = InlineVec::new();
        assert!(v.is_empty());
        assert!(v.is_full());
        assert_eq!(v.push(1).unwrap_err().into_inner(), 1);
        assert!(v.insert(0, 1).is_err());
        assert_eq!(v.at(0), Err(OutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn is_full_empty() {
        let mut v: InlineVec<i32, 4> = InlineVec::new();

        assert!(v.is_empty());
        assert!(!v.is_full());

        for _ in 0..3 {
            v.push(1).unwrap();
            assert!(!v.is_empty());
            assert!(!v.is_full());
        }

        v.push(1).unwrap();
        assert!(!v.is_empty());
        assert!(v.is_full());
        assert_eq!(v.remaining_capacity(), 0);
    }

    #[test]
    fn from_array_keeps_order() {
        let v: InlineVec<i32, 10> = InlineVec::from_array([1, 2, 3]);
        assert_eq!(v[0], 1);
        assert_eq!(v[1], 2);
        assert_eq!(v[2], 3);
        assert_eq!(v.len(), 3);
        assert_eq!(v, InlineVec::<i32, 10>::from([1, 2, 3]));
    }

    #[test]
    fn from_array_no_drop() {
        droppable!();

        {
            let v: InlineVec<Droppable, 3> =
                InlineVec::from([Droppable::new(), Droppable::new()]);
            assert_eq!(Droppable::count(), 2);
            assert_eq!(v.len(), 2);
        }

        assert_eq!(Droppable::count(), 0);
        assert_eq!(Droppable::drops(), 2);
    }

    #[test]
    fn from_slice() {
        let v: InlineVec<u8, 4> = InlineVec::from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3]);

        assert_eq!(
            InlineVec::<u8, 2>::from_slice(&[1, 2, 3]),
            Err(CapacityError::new(()))
        );

        let v: InlineVec<u8, 3> = (&[4, 5][..]).try_into().unwrap();
        assert_eq!(v, [4, 5]);
    }

    #[test]
    fn try_from_iter_overflow_drops_collected() {
        droppable!();

        let err = InlineVec::<Droppable, 2>::try_from_iter((0..4).map(|_| Droppable::new()))
            .unwrap_err();
        // the rejected element is handed back, the two collected ones are gone
        assert_eq!(Droppable::count(), 1);
        core::mem::drop(err);
        assert_eq!(Droppable::count(), 0);
    }

    #[test]
    fn collect_from_iter() {
        let slice = &[1, 2, 3];
        let vec: InlineVec<i32, 4> = slice.iter().cloned().collect();
        assert_eq!(&vec, slice);
    }

    #[test]
    #[should_panic]
    fn collect_from_iter_overfull() {
        let slice = &[1, 2, 3];
        let _vec = slice.iter().cloned().collect::<InlineVec<_, 2>>();
    }

    #[test]
    fn push_within_capacity() {
        let mut v: InlineVec<i32, 10> = InlineVec::new();
        for i in 0..10 {
            v.push(i * 7).unwrap();
            assert_eq!(v.len() as i32, i + 1);
        }
        for i in 0..10 {
            assert_eq!(v[i], i as i32 * 7);
        }
    }

    #[test]
    fn push_when_full() {
        let mut v: InlineVec<i32, 4> = InlineVec::from_array([0, 1, 2, 3]);

        let err = v.push(4).unwrap_err();
        assert_eq!(err.into_inner(), 4);
        assert_eq!(v, [0, 1, 2, 3]);
    }

    #[test]
    fn push_with_constructs_in_place() {
        let mut v: InlineVec<(u8, u8), 2> = InlineVec::new();

        let elem = v.push_with(|| (1, 2)).unwrap();
        elem.1 = 3;
        assert_eq!(v[0], (1, 3));

        v.push_with(|| (4, 5)).unwrap();

        let mut called = false;
        assert!(v
            .push_with(|| {
                called = true;
                (0, 0)
            })
            .is_err());
        assert!(!called);
        assert_eq!(v, [(1, 3), (4, 5)]);
    }

    #[test]
    fn push_and_pop() {
        let mut v: InlineVec<i32, 4> = InlineVec::new();
        assert_eq!(v.len(), 0);

        assert_eq!(v.pop(), None);
        assert_eq!(v.len(), 0);

        v.push(0).unwrap();
        assert_eq!(v.len(), 1);

        assert_eq!(v.pop(), Some(0));
        assert_eq!(v.len(), 0);

        assert_eq!(v.pop(), None);
        assert_eq!(v.len(), 0);
    }

    #[test]
    fn at() {
        let mut v: InlineVec<i32, 10> = InlineVec::from_array([1, 2, 3]);

        assert_eq!(v.at(0), Ok(&1));
        assert_eq!(v.at(2), Ok(&3));
        assert_eq!(v.at(3), Err(OutOfRange { index: 3, len: 3 }));
        assert_eq!(v.at(usize::MAX), Err(OutOfRange { index: usize::MAX, len: 3 }));

        *v.at_mut(1).unwrap() = 20;
        assert_eq!(v, [1, 20, 3]);
        assert!(v.at_mut(3).is_err());
    }

    #[test]
    fn at_on_empty() {
        let mut v: InlineVec<i32, 10> = InlineVec::new();
        assert_eq!(v.at(0), Err(OutOfRange { index: 0, len: 0 }));
        assert!(v.at_mut(0).is_err());
    }

    #[test]
    fn front_back() {
        let mut v: InlineVec<i32, 10> = InlineVec::from_array([1, 2, 3]);
        assert_eq!(v.front(), Some(&1));
        assert_eq!(v.back(), Some(&3));

        *v.front_mut().unwrap() = 0;
        *v.back_mut().unwrap() = 4;
        assert_eq!(v, [0, 2, 4]);

        v.clear();
        assert_eq!(v.front(), None);
        assert_eq!(v.back(), None);
    }

    #[test]
    fn data_points_at_first_element() {
        let mut v: InlineVec<i32, 10> = InlineVec::from_array([1, 2, 3]);
        assert_eq!(v.as_ptr(), &v[0] as *const i32);
        assert_eq!(unsafe { *v.as_ptr().add(2) }, 3);

        let p = v.as_mut_ptr();
        unsafe { *p = 9 };
        assert_eq!(v[0], 9);
    }

    #[test]
    fn storage_address_is_stable() {
        let mut v: InlineVec<i32, 8> = InlineVec::new();
        let before = v.as_ptr();
        v.push(1).unwrap();
        v.insert(0, 0).unwrap();
        v.remove(1);
        v.clear();
        assert_eq!(v.as_ptr(), before);
    }

    #[test]
    fn iter() {
        let v: InlineVec<i32, 4> = InlineVec::from_array([0, 1, 2, 3]);

        let mut items = v.iter();

        assert_eq!(items.next(), Some(&0));
        assert_eq!(items.next(), Some(&1));
        assert_eq!(items.next(), Some(&2));
        assert_eq!(items.next(), Some(&3));
        assert_eq!(items.next(), None);

        // restartable
        assert_eq!(v.iter().sum::<i32>(), 6);
        assert_eq!(v.iter().sum::<i32>(), 6);
    }

    #[test]
    fn iter_mut() {
        let mut v: InlineVec<i32, 4> = InlineVec::from_array([0, 1, 2, 3]);

        for x in &mut v {
            *x *= 2;
        }

        assert_eq!(v, [0, 2, 4, 6]);
    }

    #[test]
    fn insert_at_end() {
        let mut v: InlineVec<i32, 10> = InlineVec::from_array([1, 2, 3]);
        assert_eq!(*v.insert(3, 4).unwrap(), 4);
        assert_eq!(v, [1, 2, 3, 4]);
    }

    #[test]
    fn insert_at_begin() {
        let mut v: InlineVec<i32, 4> = InlineVec::from_array([1, 2, 3]);
        v.insert(0, 10).unwrap();
        assert_eq!(v, [10, 1, 2, 3]);

        for index in 0..=4 {
            assert_eq!(v.insert(index, 11).unwrap_err().into_inner(), 11);
        }
        assert!(v.push(11).is_err());
        assert!(v.push_with(|| 11).is_err());
        assert_eq!(v, [10, 1, 2, 3]);
    }

    #[test]
    fn insert_in_the_middle() {
        let mut v: InlineVec<i32, 10> = InlineVec::from_array([1, 2, 3]);
        v.insert(1, 10).unwrap();
        assert_eq!(v, [1, 10, 2, 3]);
    }

    #[test]
    fn insert_into_full_is_rejected() {
        let mut v: InlineVec<i32, 3> = InlineVec::from_array([1, 2, 3]);
        assert_eq!(v.insert(0, 10), Err(CapacityError::new(10)));
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    #[should_panic]
    fn insert_past_len() {
        let mut v: InlineVec<i32, 10> = InlineVec::from_array([1, 2, 3]);
        let _ = v.insert(4, 0);
    }

    #[test]
    fn insert_non_trivial() {
        droppable!();

        {
            let mut v: InlineVec<Droppable, 4> = InlineVec::new();
            v.push(Droppable::new()).unwrap();
            v.push(Droppable::new()).unwrap();
            v.insert(1, Droppable::new()).unwrap();
            assert_eq!(v.iter().map(|d| d.0).collect::<InlineVec<_, 4>>(), [1, 3, 2]);
            // shifting relocates, it never creates or destroys
            assert_eq!(Droppable::count(), 3);
            assert_eq!(Droppable::drops(), 0);
        }

        assert_eq!(Droppable::count(), 0);
        assert_eq!(Droppable::drops(), 3);
    }

    #[test]
    fn remove() {
        let mut v: InlineVec<i32, 3> = InlineVec::from_array([1, 2, 3]);
        assert_eq!(v.remove(0), 1);
        assert_eq!(v, [2, 3]);
        assert_eq!(v.len(), 2);

        let mut v: InlineVec<i32, 3> = InlineVec::from_array([1, 2, 3]);
        assert_eq!(v.remove(1), 2);
        assert_eq!(v, [1, 3]);

        let mut v: InlineVec<i32, 3> = InlineVec::from_array([1, 2, 3]);
        assert_eq!(v.remove(2), 3);
        assert_eq!(v, [1, 2]);
    }

    #[test]
    #[should_panic]
    fn remove_from_empty() {
        let mut v: InlineVec<i32, 3> = InlineVec::new();
        v.remove(0);
    }

    #[test]
    fn swap_remove() {
        let mut v: InlineVec<_, 8> = InlineVec::from_array(["foo", "bar", "baz", "qux"]);

        assert_eq!(v.swap_remove(1), "bar");
        assert_eq!(&*v, ["foo", "qux", "baz"]);

        assert_eq!(v.swap_remove(0), "foo");
        assert_eq!(&*v, ["baz", "qux"]);
    }

    #[test]
    fn drop() {
        droppable!();

        {
            let mut v: InlineVec<Droppable, 2> = InlineVec::new();
            v.push(Droppable::new()).ok().unwrap();
            v.push(Droppable::new()).ok().unwrap();
            v.pop().unwrap();
        }

        assert_eq!(Droppable::count(), 0);

        {
            let mut v: InlineVec<Droppable, 2> = InlineVec::new();
            v.push(Droppable::new()).ok().unwrap();
            v.push(Droppable::new()).ok().unwrap();
        }

        assert_eq!(Droppable::count(), 0);
        assert_eq!(Droppable::drops(), 4);
    }

    #[test]
    fn hash_matches_slice() {
        use std::hash::{BuildHasher, BuildHasherDefault, DefaultHasher};

        let hasher = BuildHasherDefault::<DefaultHasher>::default();

        let v: InlineVec<u32, 8> = InlineVec::from_array([1, 2, 3]);
        assert_eq!(hasher.hash_one(&v), hasher.hash_one(v.as_slice()));

        let empty: InlineVec<u32, 8> = InlineVec::new();
        assert_eq!(hasher.hash_one(&empty), hasher.hash_one(&[] as &[u32]));
        assert_ne!(hasher.hash_one(&v), hasher.hash_one(&empty));
    }

    #[test]
    fn clear_drops_each_element_once() {
        droppable!();

        let mut v: InlineVec<Droppable, 4> = InlineVec::new();
        for _ in 0..3 {
            v.push(Droppable::new()).unwrap();
        }

        v.clear();
        assert!(v.is_empty());
        assert_eq!(Droppable::count(), 0);
        assert_eq!(Droppable::drops(), 3);

        core::mem::drop(v);
        assert_eq!(Droppable::drops(), 3);
    }

    #[test]
    fn truncate() {
        droppable!();

        let mut v: InlineVec<Droppable, 4> = InlineVec::new();
        for _ in 0..4 {
            v.push(Droppable::new()).unwrap();
        }

        v.truncate(8);
        assert_eq!(v.len(), 4);

        v.truncate(1);
        assert_eq!(v.len(), 1);
        assert_eq!(Droppable::count(), 1);
    }

    #[test]
    fn clone_is_independent() {
        let mut a: InlineVec<i32, 4> = InlineVec::from_array([1, 2, 3]);
        let mut b = a.clone();
        assert_eq!(a, b);

        b.push(4).unwrap();
        a[0] = 0;
        assert_eq!(a, [0, 2, 3]);
        assert_eq!(b, [1, 2, 3, 4]);
    }

    #[test]
    fn clone_from_replaces_contents() {
        droppable!();

        {
            let source: InlineVec<Droppable, 3> =
                InlineVec::from([Droppable::new(), Droppable::new()]);
            let mut dest: InlineVec<Droppable, 3> =
                InlineVec::from([Droppable::new(), Droppable::new(), Droppable::new()]);

            // a full destination must not overflow while cloning into it
            dest.clone_from(&source);
            assert_eq!(dest, source);
            assert_eq!(Droppable::count(), 4);
            assert_eq!(Droppable::drops(), 3);
        }

        assert_eq!(Droppable::count(), 0);
    }

    #[test]
    fn take_leaves_source_empty() {
        droppable!();

        {
            let mut a: InlineVec<Droppable, 3> =
                InlineVec::from([Droppable::new(), Droppable::new()]);
            let b = a.take();
            assert!(a.is_empty());
            assert_eq!(b.len(), 2);
            assert_eq!(Droppable::count(), 2);

            a.push(Droppable::new()).unwrap();
            assert_eq!(a.len(), 1);
        }

        assert_eq!(Droppable::count(), 0);
        assert_eq!(Droppable::drops(), 3);
    }

    #[test]
    fn moved_vec_keeps_elements() {
        let a: InlineVec<i32, 4> = InlineVec::from_array([1, 2, 3]);
        let b = a;
        assert_eq!(b, [1, 2, 3]);
    }

    #[test]
    fn resize() {
        let mut v: InlineVec<u8, 4> = InlineVec::new();

        v.resize(1, 17).unwrap();
        assert_eq!(v, [17]);

        v.resize(3, 18).unwrap();
        assert_eq!(v, [17, 18, 18]);

        v.resize(2, 0).unwrap();
        assert_eq!(v, [17, 18]);

        assert!(v.resize(5, 0).is_err());
        assert_eq!(v, [17, 18]);
    }

    #[test]
    fn retain() {
        droppable!();

        let mut v: InlineVec<Droppable, 8> = InlineVec::new();
        for _ in 0..6 {
            v.push(Droppable::new()).unwrap();
        }

        v.retain(|d| d.0 % 2 == 0);
        assert_eq!(v.iter().map(|d| d.0).collect::<InlineVec<_, 8>>(), [2, 4, 6]);
        assert_eq!(Droppable::count(), 3);
    }

    #[test]
    fn extend_from_slice_all_or_nothing() {
        let mut v: InlineVec<u8, 4> = InlineVec::new();
        v.extend_from_slice(&[1, 2]).unwrap();
        v.extend_from_slice(&[3]).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3]);

        assert!(v.extend_from_slice(&[4, 5]).is_err());
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn iter_move() {
        let v: InlineVec<i32, 4> = InlineVec::from_array([0, 1, 2, 3]);

        let mut items = v.into_iter();

        assert_eq!(items.next(), Some(0));
        assert_eq!(items.next_back(), Some(3));
        assert_eq!(items.len(), 2);
        assert_eq!(items.next(), Some(1));
        assert_eq!(items.next(), Some(2));
        assert_eq!(items.next(), None);
    }

    #[test]
    fn eq() {
        let mut xs: InlineVec<i32, 4> = InlineVec::new();
        let mut ys: InlineVec<i32, 8> = InlineVec::new();

        assert_eq!(xs, ys);

        xs.push(1).unwrap();
        ys.push(1).unwrap();

        assert_eq!(xs, ys);
    }

    #[test]
    fn cmp_heterogenous_size() {
        let mut xs: InlineVec<i32, 4> = InlineVec::new();
        let mut ys: InlineVec<i32, 8> = InlineVec::new();

        xs.push(1).unwrap();
        ys.push(2).unwrap();

        assert!(xs < ys);
    }

    #[test]
    fn cmp_with_arrays_and_slices() {
        let mut xs: InlineVec<i32, 12> = InlineVec::new();
        xs.push(1).unwrap();

        let array = [1];

        assert_eq!(xs, array);
        assert_eq!(array, xs);

        assert_eq!(xs, array.as_slice());
        assert_eq!(array.as_slice(), xs);

        assert_eq!(xs, &array);
        assert_eq!(&array, xs);

        assert_ne!(xs, [1; 20]);
    }

    #[test]
    fn write() {
        let mut v: InlineVec<u8, 4> = InlineVec::new();
        write!(v, "{:x}", 1234).unwrap();
        assert_eq!(&v[..], b"4d2");

        assert!(write!(v, "toolong").is_err());
    }

    #[test]
    fn debug() {
        let v: InlineVec<i32, 4> = InlineVec::from_array([1, 2]);
        assert_eq!(std::format!("{v:?}"), "[1, 2]");
    }

    #[test]
    fn spare_capacity_mut() {
        let mut v: InlineVec<_, 4> = InlineVec::new();
        let uninit = v.spare_capacity_mut();
        assert_eq!(uninit.len(), 4);
        uninit[0].write(1);
        uninit[1].write(2);
        unsafe { v.set_len(2) };
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(v.spare_capacity_mut().len(), 2);
    }

    fn _test_variance<'a: 'b, 'b>(x: InlineVec<&'a (), 42>) -> InlineVec<&'b (), 42> {
        x
    }
}
