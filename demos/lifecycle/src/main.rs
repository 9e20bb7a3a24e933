// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Demo: buffer lifecycle walkthrough
//
// Exercises the IntBuffer value type the way a lecture would: scoped vs
// heap lifetimes, deep copies vs assignment, pass-by-value vs borrowing,
// and indexed reads/writes. Every lifecycle event is printed through an
// injected sink; the buffer type itself stays silent.

use intbuf::{IntBuffer, IntBufferError, LifecycleEvent, Traced};

fn print_event(event: LifecycleEvent) {
    match event {
        LifecycleEvent::Created { len } => println!("  [event] created, len {len}"),
        LifecycleEvent::Copied { len } => println!("  [event] deep-copied, len {len}"),
        LifecycleEvent::Assigned { len } => println!("  [event] assigned, len {len}"),
        LifecycleEvent::Dropped { len } => println!("  [event] dropped, len {len}"),
    }
}

// Takes ownership: the caller hands over its buffer (or an explicit clone).
fn len_of_owned<S: intbuf::EventSink>(buf: Traced<'_, S>) -> usize {
    buf.len()
}

// Borrows: no copy, no transfer, the caller keeps its buffer.
fn len_of_borrowed(buf: &IntBuffer) -> usize {
    buf.len()
}

// Returns by value without exposing internal storage.
fn pass_through<S: intbuf::EventSink>(buf: Traced<'_, S>) -> Traced<'_, S> {
    buf
}

fn main() -> Result<(), IntBufferError> {
    let sink = print_event;

    println!("Example 1: scoped vs heap lifetimes");
    {
        let heap_buf = Box::new(Traced::new(IntBuffer::zeroed(10)?, &sink));
        {
            let _scoped = Traced::new(IntBuffer::zeroed(10)?, &sink);
            // _scoped is dropped here, at end of the inner scope
        }
        drop(heap_buf);
    }

    println!("\nExample 2: deep copy via clone");
    {
        let original = Traced::new(IntBuffer::zeroed(20)?, &sink);
        let copy = original.clone();
        println!("  lengths equal: {}", copy.len() == original.len());
    }

    println!("\nExample 3: pass by value consumes (clone to keep yours)");
    {
        let buf = Traced::new(IntBuffer::zeroed(20)?, &sink);
        let len = len_of_owned(buf.clone());
        println!("  len observed by callee: {len}");
    }

    println!("\nExample 4: pass by reference copies nothing");
    {
        let buf = Traced::new(IntBuffer::zeroed(20)?, &sink);
        let len = len_of_borrowed(&buf);
        println!("  len observed by callee: {len}");
    }

    println!("\nExample 5: returning by value");
    {
        let buf = Traced::new(IntBuffer::zeroed(20)?, &sink);
        let same = pass_through(buf);
        println!("  returned len: {}", same.len());
    }

    println!("\nExample 6: assignment adopts the source length");
    {
        let source = Traced::new(IntBuffer::zeroed(10)?, &sink);
        let mut target = Traced::new(IntBuffer::zeroed(20)?, &sink);
        target.assign_from(&source)?;
        println!("  target len after assignment: {}", target.len());
    }

    println!("\nExample 7: indexed writes and reads");
    {
        let mut buf = Traced::new(IntBuffer::zeroed(10)?, &sink);
        buf[5] = 10;
        print!("  contents:");
        for element in buf.iter() {
            print!(" {element}");
        }
        println!();
    }

    println!("\nExample 8: read-only view");
    {
        let mut buf = Traced::new(IntBuffer::zeroed(10)?, &sink);
        buf[3] = 4;

        let view: &IntBuffer = &buf;
        // view[0] = 1; // does not compile: no mutation through a shared view
        print!("  contents:");
        for element in view.iter() {
            print!(" {element}");
        }
        println!();
    }

    println!("\nExample 9: elementwise addition");
    {
        let mut a = IntBuffer::zeroed(10)?;
        let mut b = IntBuffer::zeroed(10)?;
        a[5] = 10;
        b[8] = 12;

        let sum = (&a + &b)?;
        println!("  sum[5] = {}, sum[8] = {}", sum[5], sum[8]);

        let short = IntBuffer::zeroed(11)?;
        match &a + &short {
            Err(err) => println!("  mismatched lengths rejected: {err}"),
            Ok(_) => unreachable!("lengths differ"),
        }
    }

    Ok(())
}
