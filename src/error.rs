use thiserror::Error;

/// Error types for `DynArray` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DynArrayError {
    /// Index is not below the current logical length
    #[error("Index out of range: index {index} is beyond array length {len}")]
    OutOfRange {
        /// Index that was accessed
        index: usize,
        /// Current length of the array
        len: usize,
    },
    /// The backing buffer could not be allocated
    ///
    /// Also reported when the requested slot count overflows the address space.
    #[error("Allocation failed: could not obtain storage for {requested} slots")]
    AllocationFailed {
        /// Number of slots requested
        requested: usize,
    },
}
