//SPDX-License-Identifier: MIT OR Apache-2.0
use crate::record::TraceRecord;
use std::fmt::Debug;

/**
A destination for trace lines.

Each thread writes its logged frame lines to its own sink (see [crate::set_sink]), and the whole
process shares one diagnostic sink for unwind lines (see [crate::diagnostic]).

Sinks are called from `Drop` implementations, possibly while a panic is unwinding.  A sink
must not panic: a panic during unwinding aborts the process.  I/O errors should be swallowed.
*/
pub trait Sink: Debug + Send + Sync {
    /**
    Writes the record as one line.
    */
    fn write_record(&self, record: TraceRecord);

    /**
    The application may imminently exit.  Ensure all buffers are flushed and up to date.
    */
    fn flush(&self);
}

/*
Boilerplate notes.

# Sink

Clone on a trait object makes no sense; share with Arc instead.
PartialEq/Hash: unclear whether we mean data equality or "the same destination".  Avoid.
Default is not sensible, who knows how a sink is constructed.
Send/Sync are required, a sink installed for diagnostics is reached from every thread.
*/
