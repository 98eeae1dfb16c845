// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable `i32` array over a manually managed, zero-initialised buffer.
//!
//! `DynamicArray` owns exactly one [`RawBuffer`] at a time and tracks its own
//! logical size inside it:
//!
//! - **Doubling growth**: when an insertion finds the buffer full, a buffer of
//!   twice the capacity is allocated, the elements are copied across in order,
//!   and the old buffer is released.
//! - **Atomic growth**: the replacement is fully built before it is adopted, so
//!   a failed allocation leaves the array exactly as it was.
//! - **No shrinking**: `remove()` shifts elements left and zeroes the vacated
//!   slot, but capacity never decreases.
//! - **Checked indices**: every positional operation returns
//!   [`DynamicArrayError::IndexOutOfRange`] instead of touching memory outside
//!   the logical sequence.
//!
//! # Example
//!
//! ```rust
//! use dynarray::{DynamicArray, DynamicArrayError};
//!
//! fn example() -> Result<(), DynamicArrayError> {
//!     let mut array = DynamicArray::new()?;
//!     for value in [10, 20, 30, 40] {
//!         array.insert(value)?;
//!     }
//!
//!     array.insert_at(15, 1)?;
//!     assert_eq!(array.remove(2)?, 20);
//!
//!     assert_eq!(array.to_string(), "10 15 30 40");
//!     assert_eq!(array.capacity(), 8);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! dynarray = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then use `DynamicArrayBehaviour` to drive the failure path of growth.
//!
//! # Logging
//!
//! Growth emits a `tracing` `DEBUG` event, shifts emit `TRACE` events. Nothing
//! is recorded unless the binary installs a subscriber.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod dynamic_array;
mod error;
mod raw_buffer;

#[cfg(test)]
mod tests;

pub use dynamic_array::{DEFAULT_CAPACITY, DynamicArray, GROWTH_FACTOR};
pub use error::DynamicArrayError;
pub use raw_buffer::RawBuffer;

#[cfg(any(test, feature = "test_utils"))]
pub use dynamic_array::DynamicArrayBehaviour;
