// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RawBuffer - exclusively owned, zero-initialised block of `i32` slots.

use alloc::alloc::{Layout, alloc_zeroed, dealloc};
use core::ptr::NonNull;

use crate::error::DynamicArrayError;

/// A heap block of `slots` contiguous `i32` values.
///
/// Every slot is initialised (to zero) at allocation time, so the whole block
/// can be viewed as a slice. The block is released exactly once, on drop.
pub struct RawBuffer {
    ptr: NonNull<i32>,
    slots: usize,
}

impl RawBuffer {
    /// Allocates a zeroed block of `slots` elements.
    ///
    /// # Errors
    ///
    /// - [`DynamicArrayError::InvalidCapacity`] if `slots == 0`.
    /// - [`DynamicArrayError::CapacityOverflow`] if the byte size overflows `isize`.
    /// - [`DynamicArrayError::AllocationFailure`] if the allocator returns null.
    pub fn allocate(slots: usize) -> Result<Self, DynamicArrayError> {
        if slots == 0 {
            return Err(DynamicArrayError::InvalidCapacity);
        }

        let layout = Self::layout_for(slots)?;

        // SAFETY (PRECONDITIONS ARE MET): layout has non-zero size since slots >= 1
        let raw = unsafe { alloc_zeroed(layout) };
        let ptr = NonNull::new(raw.cast::<i32>()).ok_or(DynamicArrayError::AllocationFailure)?;

        Ok(Self { ptr, slots })
    }

    fn layout_for(slots: usize) -> Result<Layout, DynamicArrayError> {
        Layout::array::<i32>(slots).map_err(|_| DynamicArrayError::CapacityOverflow)
    }

    /// Returns the number of slots in the block.
    #[inline]
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Returns every slot of the block.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        // SAFETY: ptr points to `slots` initialised i32 values owned by self
        unsafe { core::slice::from_raw_parts(self.ptr.as_ptr(), self.slots) }
    }

    /// Returns every slot of the block, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        // SAFETY: ptr points to `slots` initialised i32 values exclusively owned by self
        unsafe { core::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.slots) }
    }
}

impl Drop for RawBuffer {
    fn drop(&mut self) {
        // Infallible: the same layout was computed successfully in allocate()
        if let Ok(layout) = Self::layout_for(self.slots) {
            // SAFETY (PRECONDITIONS ARE MET): ptr was returned by alloc_zeroed with this layout
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
    }
}

// Safety: RawBuffer owns its block and doesn't share references
unsafe impl Send for RawBuffer {}
unsafe impl Sync for RawBuffer {}

impl core::fmt::Debug for RawBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawBuffer")
            .field("slots", &self.slots)
            .finish_non_exhaustive()
    }
}
