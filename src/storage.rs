use alloc::vec::Vec;

use crate::array::DynArray;
use crate::error::DynArrayError;

/// Slots allocated by the first append into an empty array
pub(crate) const FIRST_CAPACITY: usize = 1;
/// Capacity multiplier applied when an append finds the buffer full
pub(crate) const GROWTH_FACTOR: usize = 2;

/// Allocates an empty `Vec` able to hold exactly `capacity` slots without reallocating.
///
/// A zero `capacity` allocates nothing.
pub(crate) fn allocate_slots<T>(capacity: usize) -> Result<Vec<T>, DynArrayError> {
    let mut slots = Vec::new();
    if capacity > 0 {
        slots.try_reserve_exact(capacity).map_err(|_| {
            debug!("allocation of {} slots failed", capacity);
            DynArrayError::AllocationFailed {
                requested: capacity,
            }
        })?;
    }
    Ok(slots)
}

impl<T> DynArray<T> {
    /// Grows the buffer to exactly `new_capacity` slots.
    ///
    /// Does nothing if the capacity is already at least `new_capacity`.
    /// Otherwise a new buffer is allocated, its slots past `len()` are
    /// default-constructed, and the visible elements are moved over in order.
    /// Stale values of the old buffer are dropped.
    ///
    /// If a `T::default()` call panics, the array is left as it was.
    ///
    /// For a zero-sized `T` the allocation never fails, so a huge
    /// `new_capacity` costs one `T::default()` call per new slot.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if the new buffer cannot be
    /// allocated. The array is unchanged in that case.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), DynArrayError>
    where
        T: Default,
    {
        self.grow_with(new_capacity, T::default)
    }

    /// Grows the buffer to exactly `new_capacity` slots, filling every slot
    /// from `len()` on with values produced by `fill`.
    ///
    /// The new buffer is complete before `self` is touched, so a panicking
    /// `fill` leaves the array as it was.
    pub(crate) fn grow_with<F>(
        &mut self,
        new_capacity: usize,
        fill: F,
    ) -> Result<(), DynArrayError>
    where
        F: FnMut() -> T,
    {
        if new_capacity <= self.capacity() {
            return Ok(());
        }

        let mut fresh = allocate_slots(new_capacity)?;
        fresh.extend(core::iter::repeat_with(fill).take(new_capacity - self.len));

        trace!(
            "growing from {} to {} slots, moving {} elements",
            self.capacity(),
            new_capacity,
            self.len
        );
        self.relocate(fresh);
        Ok(())
    }

    /// Reallocates to exactly `len()` slots, or releases the buffer when empty.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if the smaller buffer cannot
    /// be allocated. The array is unchanged in that case.
    pub fn shrink_to_fit(&mut self) -> Result<(), DynArrayError> {
        if self.len == self.capacity() {
            return Ok(());
        }

        if self.len == 0 {
            trace!("releasing {} unused slots", self.capacity());
            self.slots = Vec::new();
            return Ok(());
        }

        let fresh = allocate_slots(self.len)?;
        trace!("shrinking from {} to {} slots", self.capacity(), self.len);
        self.relocate(fresh);
        Ok(())
    }

    /// Exchanges buffers, lengths and capacities with `other`. No element is copied.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Moves the visible elements to the front of `fresh` and installs it as the buffer.
    ///
    /// `fresh` must already hold its spare slots and have room for `len`
    /// more, so the moves cannot allocate or fail.
    fn relocate(&mut self, mut fresh: Vec<T>) {
        debug_assert!(fresh.capacity() - fresh.len() >= self.len);
        fresh.extend(self.slots.drain(..self.len));
        fresh.rotate_right(self.len);
        self.slots = fresh;
    }
}
