// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pseudo stack traces built from the live frames of a thread.
//!
//! [`StackTrace::capture`] copies the location of every live frame on the calling thread,
//! innermost first, into a plain `Vec`.  The snapshot owns no references into the stack, so it
//! can be kept, compared and printed after the frames are gone, and printing it never runs
//! sink code while the chain is being walked.
//!
//! ```
//! use framewise::{InMemorySink, StackTrace};
//!
//! fn hitchhiker() -> StackTrace {
//!     framewise::trace!();
//!     StackTrace::capture()
//! }
//!
//! fn f() -> StackTrace {
//!     framewise::trace!();
//!     hitchhiker()
//! }
//!
//! let trace = f();
//! let functions: Vec<_> = trace.frames().iter().map(|l| l.function()).collect();
//! assert!(functions[0].ends_with("::hitchhiker"));
//! assert!(functions[1].ends_with("::f"));
//!
//! let sink = InMemorySink::new();
//! trace.write_to(&sink);
//! assert_eq!(sink.drain_lines().len(), 2);
//! ```

use crate::RecordKind;
use crate::location::Location;
use crate::record::TraceRecord;
use crate::sink::Sink;
use crate::stack::{Frame, FrameChain, ThreadID, with_context};
use std::fmt::Display;
use std::ptr::NonNull;

/// A snapshot of a thread's live frames, innermost first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StackTrace {
    thread: ThreadID,
    frames: Vec<Location>,
    thread_prefix: bool,
}

impl StackTrace {
    /// Captures every live frame of the calling thread.
    pub fn capture() -> StackTrace {
        with_context(|ctx| StackTrace {
            thread: ctx.id,
            //safety: the chain is consumed right here, nothing else runs meanwhile
            frames: unsafe { FrameChain::new(ctx.top()) }.collect(),
            thread_prefix: false,
        })
        .unwrap_or_else(|| StackTrace {
            thread: ThreadID::current(),
            frames: Vec::new(),
            thread_prefix: false,
        })
    }

    /// Captures `frame` and its callers.
    pub(crate) fn from_frame(frame: &Frame) -> StackTrace {
        //safety: `frame` is borrowed, hence live; its callers outlive it
        let frames = unsafe { FrameChain::new(Some(NonNull::from(frame))) }.collect();
        StackTrace {
            thread: ThreadID::current(),
            frames,
            thread_prefix: false,
        }
    }

    /// Selects the `Thread(<id>) <file>:<line> - <function>` line format.
    pub fn with_thread_prefix(mut self, thread_prefix: bool) -> Self {
        self.thread_prefix = thread_prefix;
        self
    }

    /// Locations from the innermost frame to the root.
    pub fn frames(&self) -> &[Location] {
        &self.frames
    }

    pub fn thread(&self) -> ThreadID {
        self.thread
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    fn record(&self, location: &Location) -> TraceRecord {
        let mut record = TraceRecord::new(RecordKind::StackTrace);
        if self.thread_prefix {
            record.log_thread(self.thread);
            record.log(" ");
        }
        location.log_to(&mut record);
        record
    }

    /// Writes one record per frame to `sink`.
    pub fn write_to(&self, sink: &dyn Sink) {
        for location in &self.frames {
            sink.write_record(self.record(location));
        }
    }

    /// Writes one `\n`-terminated line per frame to `writer`.
    pub fn write_io<W: std::io::Write>(&self, mut writer: W) -> std::io::Result<()> {
        write!(writer, "{}", self)
    }
}

impl Display for StackTrace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for location in &self.frames {
            writeln!(f, "{}", self.record(location))?;
        }
        Ok(())
    }
}

/// Prints the calling thread's live frames to its current sink.
pub fn print_stack_trace() {
    print_stack_trace_to(&*crate::stack::current_sink());
}

/// Prints the calling thread's live frames to `sink`.
pub fn print_stack_trace_to(sink: &dyn Sink) {
    StackTrace::capture().write_to(sink);
}

/*
Boilerplate notes for StackTrace:

- Clone/PartialEq/Eq/Hash: a snapshot is plain data, two captures of the same frames are equal.
- Default: no, a trace belongs to a thread.
- Display: the printed form, one line per frame, each terminated by a newline.
*/
