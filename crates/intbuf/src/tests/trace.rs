// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::RefCell;

use crate::{IntBuffer, LifecycleEvent, Traced};

fn recording_sink(events: &RefCell<Vec<LifecycleEvent>>) -> impl Fn(LifecycleEvent) + '_ {
    move |event| events.borrow_mut().push(event)
}

// =============================================================================
// new() / Drop
// =============================================================================

#[test]
fn test_created_and_dropped_in_order() {
    let events = RefCell::new(Vec::new());
    let sink = recording_sink(&events);

    {
        let _buf = Traced::new(IntBuffer::zeroed(10).unwrap(), &sink);
    }

    assert_eq!(
        *events.borrow(),
        [
            LifecycleEvent::Created { len: 10 },
            LifecycleEvent::Dropped { len: 10 },
        ]
    );
}

// =============================================================================
// Clone
// =============================================================================

#[test]
fn test_clone_reports_copy_and_is_deep() {
    let events = RefCell::new(Vec::new());
    let sink = recording_sink(&events);

    let mut buf = Traced::new(IntBuffer::zeroed(10).unwrap(), &sink);
    buf[5] = 10;

    let mut copy = buf.clone();
    copy[5] = 0;

    assert_eq!(buf[5], 10);
    assert!(
        events
            .borrow()
            .contains(&LifecycleEvent::Copied { len: 10 })
    );
}

// =============================================================================
// assign_from()
// =============================================================================

#[test]
fn test_assign_from_adopts_source_len() {
    let events = RefCell::new(Vec::new());
    let sink = recording_sink(&events);

    let source = IntBuffer::zeroed(20).unwrap();
    let mut target = Traced::new(IntBuffer::zeroed(10).unwrap(), &sink);

    target.assign_from(&source).unwrap();

    assert_eq!(target.len(), 20);
    assert!(
        events
            .borrow()
            .contains(&LifecycleEvent::Assigned { len: 20 })
    );
}

#[test]
fn test_assign_from_copies_values() {
    let events = RefCell::new(Vec::new());
    let sink = recording_sink(&events);

    let mut source = IntBuffer::zeroed(4).unwrap();
    source[2] = 5;

    let mut target = Traced::new(IntBuffer::new(), &sink);
    target.assign_from(&source).unwrap();

    assert_eq!(target[2], 5);

    // Copy is deep, not shared
    source[2] = 0;
    assert_eq!(target[2], 5);
}

// =============================================================================
// into_inner()
// =============================================================================

#[test]
fn test_into_inner_skips_dropped() {
    let events = RefCell::new(Vec::new());
    let sink = recording_sink(&events);

    let inner = {
        let buf = Traced::new(IntBuffer::zeroed(3).unwrap(), &sink);
        buf.into_inner()
    };

    assert_eq!(inner.len(), 3);
    assert_eq!(*events.borrow(), [LifecycleEvent::Created { len: 3 }]);
}

// =============================================================================
// Deref transparency
// =============================================================================

#[test]
fn test_traced_behaves_like_plain_buffer() {
    let events = RefCell::new(Vec::new());
    let sink = recording_sink(&events);

    let mut traced = Traced::new(IntBuffer::zeroed(10).unwrap(), &sink);
    let mut plain = IntBuffer::zeroed(10).unwrap();

    traced[5] = 10;
    plain[5] = 10;

    assert_eq!(traced.as_slice(), plain.as_slice());
    assert_eq!((&*traced + &plain).unwrap()[5], 20);
}
