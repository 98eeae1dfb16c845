// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for dynarray.

use thiserror::Error;

/// Error type for `DynamicArray` and `RawBuffer` operations.
///
/// Every failing operation leaves the array exactly as it was before the call.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum DynamicArrayError {
    /// The index lies outside the range accepted by the operation.
    ///
    /// `read`, `update` and `remove` accept `index < size`; `insert_at`
    /// accepts `index <= size`.
    #[error("index {index} out of range for size {size}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// The logical size at the time of the call.
        size: usize,
    },

    /// The allocator could not provide the requested block.
    #[error("allocation failed: could not obtain buffer")]
    AllocationFailure,

    /// A buffer must hold at least one slot.
    #[error("invalid capacity: initial capacity must be at least 1")]
    InvalidCapacity,

    /// The requested slot count does not fit in a valid allocation layout.
    #[error("capacity overflow: slot count exceeds addressable memory")]
    CapacityOverflow,
}
