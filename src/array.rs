use alloc::vec::Vec;
use core::fmt;
use core::ops::{Deref, DerefMut, Index, IndexMut};

use crate::error::DynArrayError;
use crate::storage::{self, FIRST_CAPACITY, GROWTH_FACTOR};

/// A contiguous growable array with an explicit capacity
///
/// Every slot in `[0, capacity)` holds an initialized `T`. Only `[0, len)` is
/// visible; the rest are stale slots that keep their previous contents until
/// a mutation writes over them or a reallocation discards them.
pub struct DynArray<T> {
    pub(crate) slots: Vec<T>,
    pub(crate) len: usize,
}

impl<T> DynArray<T> {
    /// Creates an empty `DynArray` without allocating.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
        }
    }

    /// Creates a `DynArray` of `len` default-constructed elements.
    ///
    /// Capacity equals `len`. A zero `len` allocates nothing.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if the buffer cannot be allocated.
    pub fn with_len(len: usize) -> Result<Self, DynArrayError>
    where
        T: Default,
    {
        let mut slots = storage::allocate_slots(len)?;
        slots.extend(core::iter::repeat_with(T::default).take(len));
        Ok(Self { slots, len })
    }

    /// Creates a `DynArray` of `len` copies of `value`.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if the buffer cannot be allocated.
    pub fn from_elem(len: usize, value: T) -> Result<Self, DynArrayError>
    where
        T: Clone,
    {
        let mut slots = storage::allocate_slots(len)?;
        if len > 0 {
            slots.resize(len, value);
        }
        Ok(Self { slots, len })
    }

    /// Creates a `DynArray` holding the items of an exact-size range, in order.
    ///
    /// Capacity equals the number of items produced.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if the buffer cannot be allocated.
    pub fn try_from_iter<I>(items: I) -> Result<Self, DynArrayError>
    where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator<Item = T>,
    {
        let items = items.into_iter();
        let expected = items.len();
        let mut slots = storage::allocate_slots(expected)?;
        // `take` keeps a misreporting iterator from growing past the reservation
        for item in items.take(expected) {
            slots.push(item);
        }
        Ok(Self::from_slots(slots))
    }

    /// Creates a `DynArray` holding clones of `items`.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if the buffer cannot be allocated.
    pub fn from_slice(items: &[T]) -> Result<Self, DynArrayError>
    where
        T: Clone,
    {
        Self::try_from_iter(items.iter().cloned())
    }

    /// Adopts `slots` as a full buffer, releasing any spare allocation so
    /// that `capacity()` counts every allocated slot.
    pub(crate) fn from_slots(mut slots: Vec<T>) -> Self {
        if slots.is_empty() {
            return Self::new();
        }
        slots.shrink_to_fit();
        let len = slots.len();
        Self { slots, len }
    }

    /// Returns an independent copy with the same length and capacity.
    ///
    /// Visible elements are cloned; the stale slots of the copy are
    /// default-constructed. A panicking `clone` leaks nothing and leaves
    /// `self` untouched.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if the buffer cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, DynArrayError>
    where
        T: Clone + Default,
    {
        let capacity = self.capacity();
        let mut slots = storage::allocate_slots(capacity)?;
        slots.extend(self.as_slice().iter().cloned());
        slots.extend(core::iter::repeat_with(T::default).take(capacity - self.len));
        Ok(Self {
            slots,
            len: self.len,
        })
    }

    /// Replaces the contents of `self` with a copy of `source`.
    ///
    /// Afterwards `self` has the length and capacity of `source`. When
    /// `source` holds no allocation, neither does `self`.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if the buffer cannot be
    /// allocated; `self` is unchanged in that case.
    pub fn assign_from(&mut self, source: &Self) -> Result<(), DynArrayError>
    where
        T: Clone + Default,
    {
        if source.capacity() == 0 {
            *self = Self::new();
            return Ok(());
        }
        *self = source.try_clone()?;
        Ok(())
    }

    /// Moves the contents out, leaving `self` empty with no allocation.
    #[must_use]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the visible elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.slots[..self.len]
    }

    /// Returns the visible elements as a mutable slice.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots[..self.len]
    }

    /// Gets the element at the specified index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Gets the element at the specified index with a bounds check.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::OutOfRange` if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, DynArrayError> {
        let len = self.len;
        self.get(index)
            .ok_or(DynArrayError::OutOfRange { index, len })
    }

    /// Mutable form of [`DynArray::at`].
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::OutOfRange` if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, DynArrayError> {
        let len = self.len;
        self.get_mut(index)
            .ok_or(DynArrayError::OutOfRange { index, len })
    }

    /// Gets the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be below `len()`.
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        // SAFETY: the caller keeps `index < len <= slots.len()`
        unsafe { self.slots.get_unchecked(index) }
    }

    /// Mutable form of [`DynArray::get_unchecked`].
    ///
    /// # Safety
    ///
    /// `index` must be below `len()`.
    #[must_use]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        // SAFETY: the caller keeps `index < len <= slots.len()`
        unsafe { self.slots.get_unchecked_mut(index) }
    }

    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    #[must_use]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    #[must_use]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Returns a raw pointer to the backing buffer, or null when nothing is allocated.
    ///
    /// The pointer is invalidated by any reallocation, swap or take.
    #[must_use]
    pub fn as_ptr(&self) -> *const T {
        if self.slots.is_empty() {
            core::ptr::null()
        } else {
            self.slots.as_ptr()
        }
    }

    /// Mutable form of [`DynArray::as_ptr`].
    #[must_use]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        if self.slots.is_empty() {
            core::ptr::null_mut()
        } else {
            self.slots.as_mut_ptr()
        }
    }

    /// Appends `value` after the last visible element.
    ///
    /// The first allocation holds one slot; a full buffer doubles.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if growing fails. Nothing is
    /// appended in that case.
    pub fn push_back(&mut self, value: T) -> Result<(), DynArrayError>
    where
        T: Default,
    {
        if self.len == 0 {
            self.reserve(FIRST_CAPACITY)?;
        } else if self.len == self.capacity() {
            let doubled = self
                .len
                .checked_mul(GROWTH_FACTOR)
                .ok_or(DynArrayError::AllocationFailed {
                    requested: usize::MAX,
                })?;
            self.reserve(doubled)?;
        }

        self.slots[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Removes the last visible element and returns a reference to it.
    ///
    /// The value stays in its slot as a stale value. Returns `None` if the
    /// array is empty.
    pub fn pop_back(&mut self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        self.slots.get(self.len)
    }

    /// Hides every element. Capacity and slot contents are kept.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Sets the visible length to `new_len`.
    ///
    /// Within capacity only the length changes, and growing that way exposes
    /// stale slots as they are. Beyond capacity the buffer grows to exactly
    /// `new_len` and the new slots are default-constructed.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if growing fails; the array
    /// is unchanged in that case.
    pub fn resize(&mut self, new_len: usize) -> Result<(), DynArrayError>
    where
        T: Default,
    {
        if new_len > self.capacity() {
            self.reserve(new_len)?;
        }
        self.len = new_len;
        Ok(())
    }

    /// Like [`DynArray::resize`], but every slot in `[old_len, new_len)` holds
    /// a clone of `value` afterwards.
    ///
    /// The length changes only once all the new slots are written, so a
    /// panicking `clone` leaves the visible elements and `len()` as they were.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if growing fails; the array
    /// is unchanged in that case.
    pub fn resize_with_value(&mut self, new_len: usize, value: T) -> Result<(), DynArrayError>
    where
        T: Clone,
    {
        if new_len > self.capacity() {
            // Every slot past `len` in the grown buffer is in the new range
            self.grow_with(new_len, || value.clone())?;
        } else if new_len > self.len {
            self.slots[self.len..new_len].fill(value);
        }
        self.len = new_len;
        Ok(())
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Default> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(err) => panic!("{err}"),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(err) = self.assign_from(source) {
            panic!("{err}");
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> Deref for DynArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for DynArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for DynArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T, const N: usize> From<[T; N]> for DynArray<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_slots(Vec::from(items))
    }
}

impl<T> From<Vec<T>> for DynArray<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_slots(items)
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self::from_slots(items.into_iter().collect())
    }
}
