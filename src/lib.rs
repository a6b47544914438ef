#![no_std]

//! `DynArray`: a contiguous growable array with explicit capacity control.
//!
//! `DynArray<T>` owns one heap buffer of `capacity` slots and exposes the
//! first `len` of them. Appends grow the buffer geometrically, every other
//! capacity change is explicit, and every operation that allocates reports
//! failure through [`DynArrayError`] instead of aborting.
//!
//! This crate is `no_std` compatible and only needs `alloc`.
//!
//! # Capacity and Stale Slots
//!
//! Every slot of the buffer holds an initialized value. Slots past `len` are
//! *stale*: they keep whatever they held last and are not visible through the
//! API. Shortening the array, `pop_back()` and `clear()` only move `len`;
//! growing back within capacity exposes the stale values as they are:
//!
//! ```
//! # use dynarray::DynArray;
//! let mut array = DynArray::new();
//! array.push_back(10).unwrap();
//! array.push_back(20).unwrap();
//! array.push_back(30).unwrap();
//! assert_eq!(array.capacity(), 4);
//!
//! array.resize(2).unwrap();
//! assert_eq!(array.as_slice(), &[10, 20]);
//!
//! // Slot 2 still holds 30
//! array.resize(3).unwrap();
//! assert_eq!(array.as_slice(), &[10, 20, 30]);
//!
//! // `resize_with_value` overwrites the newly exposed slots
//! array.resize(2).unwrap();
//! array.resize_with_value(4, 99).unwrap();
//! assert_eq!(array.as_slice(), &[10, 20, 99, 99]);
//! ```
//!
//! Slots created by growth are filled with `T::default()`, so the growing
//! operations require `T: Default`.
//!
//! ## Time Complexity
//! - `push_back()`: amortized O(1), O(n) on a growth step
//! - `pop_back()`, `clear()`, `resize()` within capacity: O(1)
//! - `reserve()`, `shrink_to_fit()`: O(capacity)
//! - `swap()`, `take()`: O(1), no element is copied
//!
//! # Error Handling
//!
//! Allocating operations return `Result<_, DynArrayError>` and give the strong
//! guarantee: on failure the array is exactly as before the call.
//!
//! ```
//! # use dynarray::{DynArray, DynArrayError};
//! let mut array: DynArray<u64> = DynArray::from_slice(&[1, 2, 3]).unwrap();
//!
//! let err = array.reserve(usize::MAX).unwrap_err();
//! assert!(matches!(err, DynArrayError::AllocationFailed { .. }));
//! assert_eq!(array.capacity(), 3);
//!
//! assert_eq!(
//!     array.at(3),
//!     Err(DynArrayError::OutOfRange { index: 3, len: 3 })
//! );
//! ```
//!
//! # Ordering
//!
//! Arrays compare lexicographically: the first differing element decides,
//! and a proper prefix is smaller than the longer array.
//!
//! ```
//! # use dynarray::dynarray;
//! assert!(dynarray![1, 2] < dynarray![1, 2, 3]);
//! assert!(dynarray![2] > dynarray![1, 2, 3]);
//! assert_eq!(dynarray![1, 2, 3], dynarray![1, 2, 3]);
//! ```
//!
//! # Iterator Support
//!
//! ```
//! # use dynarray::dynarray;
//! let array = dynarray![1, 2, 3];
//!
//! let forward: Vec<_> = array.iter().copied().collect();
//! let backward: Vec<_> = array.iter_rev().copied().collect();
//! assert_eq!(forward, [1, 2, 3]);
//! assert_eq!(backward, [3, 2, 1]);
//! ```
//!
//! # Features
//!
//! - `std`: implements `std::error::Error` through `thiserror/std`
//! - `logging`: reports growth, shrink and allocation failures through `log`

extern crate alloc;

#[macro_use]
mod logging;

mod array;
mod error;
mod iter;
mod ordering;
mod storage;

// Re-export public types and traits
pub use array::DynArray;
pub use error::DynArrayError;
pub use iter::{IntoIter, Iter, IterMut, RevIter, RevIterMut};

/// Creates a [`DynArray`] from a list of elements.
///
/// Length and capacity both equal the number of elements.
///
/// ```
/// # use dynarray::dynarray;
/// let array = dynarray![1, 2, 3];
/// assert_eq!(array.len(), 3);
/// assert_eq!(array.capacity(), 3);
/// ```
#[macro_export]
macro_rules! dynarray {
    () => {
        $crate::DynArray::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::DynArray::from([$($item),+])
    };
}
