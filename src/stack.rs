// SPDX-License-Identifier: MIT OR Apache-2.0

//! The per-thread call stack of traced frames.
//!
//! Every thread owns an independent, singly linked stack of [`Frame`]s.  The thread keeps a
//! pointer to the innermost live frame; each frame keeps a pointer to the frame that was
//! innermost when it was entered (its caller).  Entering a frame pushes it, dropping it pops
//! it.  Nothing is allocated and nothing is locked: the state is partitioned by thread.
//!
//! # Frames live on the stack
//!
//! A frame is linked by address, so it must not move once entered.  [`Frame`] is `!Unpin` and
//! is entered through `Pin<&Frame>`; the call-site macros pin it to the enclosing function
//! with [`core::pin::pin!`]:
//!
//! ```rust
//! use framewise::{Frame, Location, StackTrace};
//! use std::pin::pin;
//!
//! fn hitchhiker() -> usize {
//!     let frame = pin!(Frame::new(Location::new("main.rs", "hitchhiker", 5)));
//!     frame.as_ref().enter();
//!     StackTrace::capture().frames().len()
//! }
//!
//! fn f() -> usize {
//!     framewise::trace!();
//!     hitchhiker()
//! }
//!
//! assert_eq!(f(), 2);
//! assert_eq!(framewise::stack::depth(), 0);
//! ```
//!
//! Frames also hold raw links, which makes them `!Send` and `!Sync`: a frame can only ever be
//! observed and dropped by the thread that entered it.
//!
//! # Unwinding
//!
//! When a frame is dropped while the thread is panicking, it writes
//! `Exception thrown: <file>:<line> - <function>` to the [diagnostic sink](crate::diagnostic).
//! Each frame does this independently, so a panic that crosses several traced functions leaves
//! one line per frame, innermost first.
//!
//! # Logged frames
//!
//! [`LoggedFrame`] additionally writes an `==>` line when entered and a `<==` line when dropped
//! to the thread's [sink](set_sink).

mod frame;
mod logged_frame;
mod thread_context;


pub use frame::Frame;
pub use logged_frame::{Argument, LoggedFrame};
pub use thread_context::{
    ThreadID, current_location, current_sink, depth, reset_sink, set_sink,
};

pub(crate) use thread_context::{FrameChain, with_context};
