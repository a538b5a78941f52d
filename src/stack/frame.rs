// SPDX-License-Identifier: MIT OR Apache-2.0

use super::thread_context::with_context;
use crate::location::Location;
use crate::sink::Sink;
use crate::stack_trace::StackTrace;
use std::cell::Cell;
use std::marker::PhantomPinned;
use std::pin::Pin;
use std::ptr::NonNull;

/**
One traced call.

A `Frame` is inert until [entered](Frame::enter); from then until it is dropped it is the
innermost frame of its thread (or below frames entered later).  Dropping it unlinks it, and if
the thread is panicking, writes `Exception thrown: <location>` to the
[diagnostic sink](crate::diagnostic).

Use [`trace!`](crate::trace) rather than constructing frames by hand:

```
fn traced() -> usize {
    framewise::trace!();
    framewise::stack::depth()
}
assert_eq!(traced(), 1);
```

By hand, pin the frame to the current function first:

```
use framewise::{Frame, Location};
use std::pin::pin;

let frame = pin!(Frame::new(Location::new("demo.x", "f", 10)));
frame.as_ref().enter();
assert_eq!(framewise::stack::current_location(), Some(Location::new("demo.x", "f", 10)));
```
*/
pub struct Frame {
    location: Location,
    pub(super) caller: Cell<Option<NonNull<Frame>>>,
    pub(super) linked: Cell<bool>,
    _pinned: PhantomPinned,
}

impl Frame {
    /**
    Creates a frame that is not yet on any stack.
    */
    #[inline]
    pub const fn new(location: Location) -> Self {
        Self {
            location,
            caller: Cell::new(None),
            linked: Cell::new(false),
            _pinned: PhantomPinned,
        }
    }

    /**
    Pushes the frame onto the calling thread's stack.

    Entering a frame that is already entered does nothing.
    */
    #[inline]
    pub fn enter(self: Pin<&Self>) {
        if self.linked.get() {
            return;
        }
        let this = NonNull::from(self.get_ref());
        //safety: pinned, and !Send so this is the owning thread.  Drop pops.
        with_context(|ctx| unsafe { ctx.push(this) });
    }

    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }

    /// Whether the frame is currently on its thread's stack.
    #[inline]
    pub fn is_entered(&self) -> bool {
        self.linked.get()
    }

    /**
    Captures the chain starting at this frame: this frame, its caller, and so on to the root.

    Frames entered after this one are not included.
    */
    pub fn stack_trace(self: Pin<&Self>) -> StackTrace {
        StackTrace::from_frame(self.get_ref())
    }

    /// Writes [Self::stack_trace] to `sink`, one line per frame.
    pub fn print_stack_trace(self: Pin<&Self>, sink: &dyn Sink) {
        self.stack_trace().write_to(sink);
    }
}

impl Drop for Frame {
    fn drop(&mut self) {
        if !self.linked.get() {
            return;
        }
        if std::thread::panicking() {
            crate::dispatch::unwind(&self.location);
        }
        let this = NonNull::from(&*self);
        //safety: linked implies pushed on this thread and still live
        let in_order = with_context(|ctx| unsafe { ctx.pop(this) }).unwrap_or(true);
        if !in_order {
            crate::dispatch::released_out_of_order(&self.location);
        }
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("location", &self.location)
            .field("entered", &self.linked.get())
            .finish()
    }
}

/*
Boilerplate notes.

1.  Copy, Clone: no.  A frame is identified by its address; a copy would be a different frame.
2.  PartialEq, Hash: no.  Data equality would make two calls of the same function equal, address
    equality is meaningless for a pinned guard.  Compare locations instead.
3.  Default: no, a frame needs a location.
4.  Display: the location already displays as a trace line.
5.  Send/Sync: no, by virtue of the raw caller link.  Frames belong to one thread.
*/
