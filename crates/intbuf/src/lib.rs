// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Exclusively-owned fixed-length integer buffers with deep-copy semantics.
//!
//! This crate is a small pedagogical example: one value type, [`IntBuffer`],
//! that owns a contiguous block of `i32` storage for its entire lifetime.
//! Its length is fixed at construction, every duplicate is an independent
//! deep copy, and the storage is released on drop. There is no growth
//! strategy, no sharing, and no generic element type.
//!
//! # Core Guarantees
//!
//! - **Exclusive ownership**: each buffer owns its storage outright; no two
//!   buffers ever share a block.
//! - **Deep copy**: [`Clone`] and [`IntBuffer::try_clone`] both produce a
//!   fully independent buffer. Mutating either side never affects the other.
//! - **Zero initialization**: sized construction zero-fills every element.
//! - **Fallible allocation**: [`IntBuffer::zeroed`] reports resource
//!   exhaustion as [`IntBufferError::AllocationFailed`] instead of assuming
//!   the allocation succeeds.
//! - **Checked indexing**: element access goes through slice deref, so an
//!   out-of-range index panics rather than reading foreign memory;
//!   `get`/`get_mut` give the non-panicking path.
//!
//! # Example: Construction and indexing
//!
//! ```rust
//! use intbuf::{IntBuffer, IntBufferError};
//!
//! fn example() -> Result<(), IntBufferError> {
//!     let mut buf = IntBuffer::zeroed(10)?;
//!     assert_eq!(buf.len(), 10);
//!
//!     buf[5] = 10;
//!     assert_eq!(buf[5], 10);
//!     assert_eq!(buf[0], 0);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Elementwise addition
//!
//! Addition is defined on references and yields a `Result`, so a length
//! mismatch stays an ordinary error value:
//!
//! ```rust
//! use intbuf::{IntBuffer, IntBufferError};
//!
//! fn example() -> Result<(), IntBufferError> {
//!     let mut a = IntBuffer::zeroed(10)?;
//!     let mut b = IntBuffer::zeroed(10)?;
//!     a[5] = 10;
//!     b[8] = 12;
//!
//!     let sum = (&a + &b)?;
//!     assert_eq!(sum[5], 10);
//!     assert_eq!(sum[8], 12);
//!
//!     let short = IntBuffer::zeroed(9)?;
//!     assert!((&a + &short).is_err());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Lifecycle tracing
//!
//! The buffer type itself is silent. Demo drivers that want a diagnostic
//! line per lifecycle event wrap buffers in [`Traced`], which reports
//! construction, copies, assignments, and drops to an injected
//! [`EventSink`]. See the [`trace`] module.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod int_buffer;
pub mod trace;

pub use error::IntBufferError;
pub use int_buffer::{IntBuffer, SAMPLE_LEN};
pub use trace::{EventSink, LifecycleEvent, Traced};
