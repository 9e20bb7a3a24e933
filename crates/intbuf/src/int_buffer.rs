// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::ops::{Add, Deref, DerefMut};

use crate::error::IntBufferError;

/// Length of the buffer returned by [`IntBuffer::sample`].
pub const SAMPLE_LEN: usize = 10;

/// An exclusively-owned, fixed-length block of `i32` storage.
///
/// The length is fixed at construction and never changes afterwards. An
/// empty buffer holds no allocation at all. Duplication ([`Clone`] or
/// [`IntBuffer::try_clone`]) always produces an independent deep copy, and
/// the storage is released when the buffer is dropped.
///
/// Element access goes through `Deref<Target = [i32]>`, so the full slice
/// API is available: `buf[i]` (checked, panics out of range), `buf.get(i)`,
/// iteration, and so on.
///
/// # Example
///
/// ```rust
/// use intbuf::IntBuffer;
///
/// let mut buf = IntBuffer::zeroed(4).unwrap();
/// buf[2] = 7;
///
/// let copy = buf.clone();
/// buf[2] = 0;
///
/// // The copy owns its own storage
/// assert_eq!(copy[2], 7);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct IntBuffer {
    elems: Box<[i32]>,
}

impl IntBuffer {
    /// Creates an empty buffer of length 0 with no storage.
    pub fn new() -> Self {
        Self {
            elems: Vec::new().into_boxed_slice(),
        }
    }

    /// Creates a buffer of exactly `len` elements, all zero.
    ///
    /// Fails with [`IntBufferError::AllocationFailed`] when storage for
    /// `len` elements cannot be allocated. This is the only sized
    /// constructor; there is deliberately no `From<usize>` impl, so a
    /// buffer can never be conjured from a bare count by implicit
    /// conversion.
    pub fn zeroed(len: usize) -> Result<Self, IntBufferError> {
        let mut v: Vec<i32> = Vec::new();
        v.try_reserve_exact(len)
            .map_err(|_| IntBufferError::AllocationFailed { requested: len })?;
        v.resize(len, 0);

        Ok(Self {
            elems: v.into_boxed_slice(),
        })
    }

    /// Returns the number of elements in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Returns `true` if the buffer holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Creates an independent deep copy, reporting allocation failure.
    ///
    /// Behaves exactly like [`Clone::clone`] except that resource
    /// exhaustion surfaces as [`IntBufferError::AllocationFailed`] instead
    /// of aborting the process.
    pub fn try_clone(&self) -> Result<Self, IntBufferError> {
        let mut v: Vec<i32> = Vec::new();
        v.try_reserve_exact(self.len())
            .map_err(|_| IntBufferError::AllocationFailed {
                requested: self.len(),
            })?;
        v.extend_from_slice(&self.elems);

        Ok(Self {
            elems: v.into_boxed_slice(),
        })
    }

    /// Returns a fresh zero-filled buffer of [`SAMPLE_LEN`] elements.
    ///
    /// The result is independent of the receiver: it shares no storage
    /// with it and does not read it. Exists to demonstrate a factory
    /// method returning a buffer by value without exposing internals.
    pub fn sample(&self) -> Result<Self, IntBufferError> {
        Self::zeroed(SAMPLE_LEN)
    }

    /// Elementwise sum of `self` and `other` as a new buffer.
    ///
    /// Fails with [`IntBufferError::LengthMismatch`] when the operand
    /// lengths differ; nothing is allocated in that case. Neither operand
    /// is mutated.
    pub fn checked_add(&self, other: &Self) -> Result<Self, IntBufferError> {
        if self.len() != other.len() {
            return Err(IntBufferError::LengthMismatch {
                lhs: self.len(),
                rhs: other.len(),
            });
        }

        let mut out = Self::zeroed(self.len())?;
        for (dst, (a, b)) in out
            .elems
            .iter_mut()
            .zip(self.elems.iter().zip(other.elems.iter()))
        {
            *dst = a + b;
        }

        Ok(out)
    }

    /// Returns a slice containing the entire buffer.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.elems
    }

    /// Returns a mutable slice containing the entire buffer.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.elems
    }
}

impl core::fmt::Debug for IntBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IntBuffer")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl Default for IntBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for IntBuffer {
    type Target = [i32];

    fn deref(&self) -> &Self::Target {
        &self.elems
    }
}

impl DerefMut for IntBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.elems
    }
}

/// `&a + &b` delegates to [`IntBuffer::checked_add`].
///
/// The output is a `Result` so a length mismatch stays an ordinary error
/// value at the call site: `let sum = (&a + &b)?;`.
impl Add for &IntBuffer {
    type Output = Result<IntBuffer, IntBufferError>;

    fn add(self, rhs: &IntBuffer) -> Self::Output {
        self.checked_add(rhs)
    }
}
