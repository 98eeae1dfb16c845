// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::error::DynamicArrayError;
use crate::raw_buffer::RawBuffer;

/// Capacity used by [`DynamicArray::new`].
pub const DEFAULT_CAPACITY: usize = 2;

/// Factor applied to the capacity every time the buffer is full.
pub const GROWTH_FACTOR: usize = 2;

/// Test behaviour for injecting failures in `DynamicArray` operations.
///
/// This is only available with the `test_utils` feature and allows users
/// to exercise the allocation-failure path without exhausting memory.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust,ignore
/// // test_utils feature required in dev-dependencies
/// use dynarray::{DynamicArray, DynamicArrayBehaviour, DynamicArrayError};
///
/// #[cfg(test)]
/// mod tests {
///     use super::*;
///
///     #[test]
///     fn test_handles_allocation_failure() -> Result<(), DynamicArrayError> {
///         let mut array = DynamicArray::with_capacity(1)?;
///         array.insert(1)?;
///
///         array.change_behaviour(DynamicArrayBehaviour::FailAtGrow);
///         assert!(array.insert(2).is_err());
///
///         array.change_behaviour(DynamicArrayBehaviour::None);
///         array.insert(2)?;
///         Ok(())
///     }
/// }
/// ```
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicArrayBehaviour {
    /// Normal behaviour - no injected failures.
    None,
    /// Every growth fails with `AllocationFailure` before allocating.
    FailAtGrow,
}

#[cfg(any(test, feature = "test_utils"))]
impl Default for DynamicArrayBehaviour {
    fn default() -> Self {
        Self::None
    }
}

/// Growable sequence of `i32` over a single owned [`RawBuffer`].
///
/// Elements live in slots `[0, size)`. Slots `[size, capacity)` are allocated
/// and kept zeroed. The capacity doubles whenever an insertion finds the
/// buffer full and never shrinks.
///
/// # Example
///
/// ```rust
/// use dynarray::{DynamicArray, DynamicArrayError};
///
/// fn example() -> Result<(), DynamicArrayError> {
///     let mut array = DynamicArray::new()?;
///     array.insert(10)?;
///     array.insert(20)?;
///     array.insert(30)?;
///
///     assert_eq!(array.size(), 3);
///     assert_eq!(array.capacity(), 4);
///     assert_eq!(array.read(1)?, 20);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct DynamicArray {
    buffer: RawBuffer,
    size: usize,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: DynamicArrayBehaviour,
}

impl DynamicArray {
    /// Creates an empty array with [`DEFAULT_CAPACITY`] slots.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::AllocationFailure`] if the buffer cannot be allocated.
    pub fn new() -> Result<Self, DynamicArrayError> {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty array with `initial_capacity` slots.
    ///
    /// # Errors
    ///
    /// - [`DynamicArrayError::InvalidCapacity`] if `initial_capacity == 0`.
    /// - [`DynamicArrayError::CapacityOverflow`] if the slot count is too large to lay out.
    /// - [`DynamicArrayError::AllocationFailure`] if the allocator refuses.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarray::{DynamicArray, DynamicArrayError};
    ///
    /// let array = DynamicArray::with_capacity(8).unwrap();
    /// assert_eq!(array.capacity(), 8);
    /// assert!(array.is_empty());
    ///
    /// assert!(matches!(
    ///     DynamicArray::with_capacity(0),
    ///     Err(DynamicArrayError::InvalidCapacity)
    /// ));
    /// ```
    pub fn with_capacity(initial_capacity: usize) -> Result<Self, DynamicArrayError> {
        let buffer = RawBuffer::allocate(initial_capacity)?;

        Ok(Self {
            buffer,
            size: 0,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: DynamicArrayBehaviour::default(),
        })
    }

    /// Creates an array holding a copy of `values`, in order.
    ///
    /// The capacity is `max(values.len(), DEFAULT_CAPACITY)`.
    pub fn from_slice(values: &[i32]) -> Result<Self, DynamicArrayError> {
        let mut array = Self::with_capacity(values.len().max(DEFAULT_CAPACITY))?;

        array.buffer.as_mut_slice()[..values.len()].copy_from_slice(values);
        array.size = values.len();

        Ok(array)
    }

    /// Changes the failure-injection behaviour. Sticky until changed again.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: DynamicArrayBehaviour) {
        self.behaviour = behaviour;
    }

    /// Returns the number of elements in the array.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the array contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.slots()
    }

    /// Returns the element at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::IndexOutOfRange`] if `pos >= size`.
    pub fn read(&self, pos: usize) -> Result<i32, DynamicArrayError> {
        self.check_index(pos)?;

        Ok(self.buffer.as_slice()[pos])
    }

    /// Overwrites the element at `pos` with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::IndexOutOfRange`] if `pos >= size`.
    pub fn update(&mut self, value: i32, pos: usize) -> Result<(), DynamicArrayError> {
        self.check_index(pos)?;

        self.buffer.as_mut_slice()[pos] = value;
        Ok(())
    }

    /// Appends `value`, growing the buffer first if it is full.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::AllocationFailure`] or
    /// [`DynamicArrayError::CapacityOverflow`] if a required growth fails.
    /// The array is unchanged in that case.
    pub fn insert(&mut self, value: i32) -> Result<(), DynamicArrayError> {
        self.ensure_spare_slot()?;

        let size = self.size;
        self.buffer.as_mut_slice()[size] = value;
        self.size += 1;

        Ok(())
    }

    /// Inserts `value` at `pos`, shifting `[pos, size)` one slot to the right.
    ///
    /// `pos == size` appends.
    ///
    /// # Errors
    ///
    /// - [`DynamicArrayError::IndexOutOfRange`] if `pos > size`. Checked before any growth.
    /// - [`DynamicArrayError::AllocationFailure`] or [`DynamicArrayError::CapacityOverflow`]
    ///   if a required growth fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarray::{DynamicArray, DynamicArrayError};
    ///
    /// fn example() -> Result<(), DynamicArrayError> {
    ///     let mut array = DynamicArray::from_slice(&[10, 20, 30, 40])?;
    ///     array.insert_at(15, 1)?;
    ///
    ///     assert_eq!(array.as_slice(), &[10, 15, 20, 30, 40]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn insert_at(&mut self, value: i32, pos: usize) -> Result<(), DynamicArrayError> {
        if pos > self.size {
            return Err(DynamicArrayError::IndexOutOfRange {
                index: pos,
                size: self.size,
            });
        }

        self.ensure_spare_slot()?;

        let size = self.size;
        let slots = self.buffer.as_mut_slice();

        // Right to left, so no slot is overwritten before it has been copied.
        for i in (pos + 1..=size).rev() {
            slots[i] = slots[i - 1];
        }
        slots[pos] = value;
        self.size += 1;

        trace!(pos, shifted = size - pos, "inserted with right shift");
        Ok(())
    }

    /// Removes and returns the element at `pos`, shifting `(pos, size)` one slot
    /// to the left. The capacity is left untouched.
    ///
    /// The vacated trailing slot is zeroed.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::IndexOutOfRange`] if `pos >= size`.
    pub fn remove(&mut self, pos: usize) -> Result<i32, DynamicArrayError> {
        self.check_index(pos)?;

        let size = self.size;
        let slots = self.buffer.as_mut_slice();
        let removed = slots[pos];

        // Left to right, mirror of insert_at().
        for i in pos..size - 1 {
            slots[i] = slots[i + 1];
        }
        slots[size - 1] = 0;
        self.size -= 1;

        trace!(pos, shifted = size - 1 - pos, "removed with left shift");
        Ok(removed)
    }

    /// Returns the logical sequence `[0, size)`.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.buffer.as_slice()[..self.size]
    }

    /// Copies the logical sequence into a `Vec`.
    pub fn to_vec(&self) -> Vec<i32> {
        self.as_slice().to_vec()
    }

    #[cfg(test)]
    pub(crate) fn spare_slots(&self) -> &[i32] {
        &self.buffer.as_slice()[self.size..]
    }

    #[inline(always)]
    fn check_index(&self, pos: usize) -> Result<(), DynamicArrayError> {
        if pos >= self.size {
            return Err(DynamicArrayError::IndexOutOfRange {
                index: pos,
                size: self.size,
            });
        }

        Ok(())
    }

    #[inline(always)]
    fn ensure_spare_slot(&mut self) -> Result<(), DynamicArrayError> {
        if self.size < self.capacity() {
            return Ok(());
        }

        self.grow()
    }

    /// Replaces the buffer with one of `GROWTH_FACTOR` times the capacity.
    ///
    /// The replacement is fully built before it is adopted: on any error the
    /// old buffer, size and capacity are untouched. Assigning the replacement
    /// drops, and so releases, the old buffer.
    #[cold]
    #[inline(never)]
    fn grow(&mut self) -> Result<(), DynamicArrayError> {
        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, DynamicArrayBehaviour::FailAtGrow) {
            return Err(DynamicArrayError::AllocationFailure);
        }

        let old_capacity = self.capacity();
        let new_capacity = next_capacity(old_capacity)?;

        let mut replacement = RawBuffer::allocate(new_capacity)?;
        replacement.as_mut_slice()[..self.size].copy_from_slice(self.as_slice());

        self.buffer = replacement;

        debug!(
            old_capacity,
            new_capacity,
            size = self.size,
            "grew dynamic array buffer"
        );
        Ok(())
    }
}

/// Capacity after one growth step from `capacity`.
///
/// Zero grows to one, since doubling it would not grow at all.
pub(crate) fn next_capacity(capacity: usize) -> Result<usize, DynamicArrayError> {
    if capacity == 0 {
        return Ok(1);
    }

    capacity
        .checked_mul(GROWTH_FACTOR)
        .ok_or(DynamicArrayError::CapacityOverflow)
}

impl core::fmt::Debug for DynamicArray {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DynamicArray")
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

/// Elements separated by a single space, e.g. `10 15 30 40`.
impl core::fmt::Display for DynamicArray {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut elements = self.as_slice().iter();

        if let Some(first) = elements.next() {
            write!(f, "{first}")?;
        }
        for element in elements {
            write!(f, " {element}")?;
        }

        Ok(())
    }
}

impl PartialEq for DynamicArray {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for DynamicArray {}

impl PartialEq<[i32]> for DynamicArray {
    fn eq(&self, other: &[i32]) -> bool {
        self.as_slice() == other
    }
}

impl<const N: usize> PartialEq<[i32; N]> for DynamicArray {
    fn eq(&self, other: &[i32; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}
