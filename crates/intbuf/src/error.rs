// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for intbuf.
use thiserror::Error;

/// Errors that can occur when working with integer buffers.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum IntBufferError {
    /// Storage for the requested element count could not be allocated.
    #[error("failed to allocate storage for {requested} elements")]
    AllocationFailed {
        /// Element count the failed allocation was asked for.
        requested: usize,
    },

    /// Elementwise addition requires operands of equal length.
    #[error("length mismatch: left operand has {lhs} elements, right has {rhs}")]
    LengthMismatch {
        /// Length of the left operand.
        lhs: usize,
        /// Length of the right operand.
        rhs: usize,
    },
}
