// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Injectable lifecycle tracing for demo drivers.
//!
//! [`IntBuffer`] itself never prints or logs anything. Drivers that want a
//! diagnostic line per lifecycle event wrap their buffers in [`Traced`],
//! which reports each event to an injected [`EventSink`]. Any
//! `Fn(LifecycleEvent)` closure is a sink, so the usual driver setup is:
//!
//! ```rust
//! use intbuf::{IntBuffer, LifecycleEvent, Traced};
//!
//! let sink = |event: LifecycleEvent| { /* println!("{event:?}") */ };
//!
//! let buf = Traced::new(IntBuffer::zeroed(10).unwrap(), &sink);
//! let copy = buf.clone(); // sink sees Copied { len: 10 }
//! drop(copy);             // sink sees Dropped { len: 10 }
//! ```

use core::ops::{Deref, DerefMut};

use crate::error::IntBufferError;
use crate::int_buffer::IntBuffer;

/// A lifecycle event observed on a [`Traced`] buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// A buffer was constructed with `len` elements.
    Created {
        /// Length of the new buffer.
        len: usize,
    },

    /// A buffer was deep-copied via `Clone`.
    Copied {
        /// Length of the copy (equal to the source length).
        len: usize,
    },

    /// A buffer's contents were replaced via [`Traced::assign_from`].
    Assigned {
        /// Length of the buffer after assignment.
        len: usize,
    },

    /// A buffer was dropped and its storage released.
    Dropped {
        /// Length of the buffer at drop time.
        len: usize,
    },
}

/// Receives lifecycle events from [`Traced`] buffers.
///
/// Implemented for every `Fn(LifecycleEvent)` closure.
pub trait EventSink {
    /// Called once per lifecycle event.
    fn record(&self, event: LifecycleEvent);
}

impl<F> EventSink for F
where
    F: Fn(LifecycleEvent),
{
    fn record(&self, event: LifecycleEvent) {
        self(event)
    }
}

/// An [`IntBuffer`] that reports its lifecycle to an [`EventSink`].
///
/// Semantically the wrapper is transparent: it derefs to the inner buffer,
/// copies are still independent deep copies, and drop still releases the
/// storage. The only addition is one [`LifecycleEvent`] per construction,
/// copy, assignment, and drop.
pub struct Traced<'s, S: EventSink> {
    buffer: IntBuffer,
    sink: &'s S,
}

impl<'s, S: EventSink> Traced<'s, S> {
    /// Wraps `buffer`, reporting `Created` to `sink`.
    pub fn new(buffer: IntBuffer, sink: &'s S) -> Self {
        sink.record(LifecycleEvent::Created { len: buffer.len() });

        Self { buffer, sink }
    }

    /// Replaces the contents with a deep copy of `source`.
    ///
    /// The previous storage is released and a fresh block sized to
    /// `source` is allocated; afterwards the buffer reports `source`'s
    /// length. Reports `Assigned` on success. Allocation failure leaves
    /// the buffer unchanged.
    pub fn assign_from(&mut self, source: &IntBuffer) -> Result<(), IntBufferError> {
        self.buffer = source.try_clone()?;
        self.sink.record(LifecycleEvent::Assigned {
            len: self.buffer.len(),
        });

        Ok(())
    }

    /// Unwraps the inner buffer without reporting `Dropped`.
    pub fn into_inner(mut self) -> IntBuffer {
        let buffer = core::mem::take(&mut self.buffer);
        core::mem::forget(self);

        buffer
    }
}

impl<'s, S: EventSink> Clone for Traced<'s, S> {
    fn clone(&self) -> Self {
        self.sink.record(LifecycleEvent::Copied {
            len: self.buffer.len(),
        });

        Self {
            buffer: self.buffer.clone(),
            sink: self.sink,
        }
    }
}

impl<'s, S: EventSink> Drop for Traced<'s, S> {
    fn drop(&mut self) {
        self.sink.record(LifecycleEvent::Dropped {
            len: self.buffer.len(),
        });
    }
}

impl<'s, S: EventSink> core::fmt::Debug for Traced<'s, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Traced")
            .field("len", &self.buffer.len())
            .finish_non_exhaustive()
    }
}

impl<'s, S: EventSink> Deref for Traced<'s, S> {
    type Target = IntBuffer;

    fn deref(&self) -> &Self::Target {
        &self.buffer
    }
}

impl<'s, S: EventSink> DerefMut for Traced<'s, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buffer
    }
}
