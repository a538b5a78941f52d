// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trace record type.
//!
//! A [`TraceRecord`] is one output line under construction.  Parts are appended with
//! [`log`](TraceRecord::log) and [`log_owned`](TraceRecord::log_owned) and only joined when a
//! sink renders the record, so building a line never concatenates intermediate strings.
//!
//! ```rust
//! use framewise::{RecordKind, TraceRecord};
//!
//! let mut record = TraceRecord::new(RecordKind::Output);
//! record.log("x => ");
//! record.log_owned(format!("{}", 5));
//! assert_eq!(record.to_string(), "x => 5");
//! ```

use crate::RecordKind;
use crate::stack::ThreadID;
use crate::value::ValueBuilder;
use std::fmt::Display;

/**
A single trace line.

1.  Create a new [TraceRecord].
2.  Progressively write to the [TraceRecord].
3.  Submit it to a [crate::Sink].

The record does not contain a trailing newline; sinks add their own line terminator.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TraceRecord {
    pub(crate) parts: Vec<String>,
    kind: RecordKind,
}

impl TraceRecord {
    pub fn new(kind: RecordKind) -> Self {
        Self {
            parts: Vec::new(),
            kind,
        }
    }

    /**
    Append the message to the record.
    */
    pub fn log(&mut self, message: &str) {
        self.parts.push(message.to_string());
    }

    /**
    Append the message to the record, taking ownership of the message.
    */
    pub fn log_owned(&mut self, message: String) {
        self.parts.push(message);
    }

    /**
    Log `Thread(<id>)` to the record.
    */
    pub fn log_thread(&mut self, thread: ThreadID) {
        self.log_owned(format!("Thread({})", thread));
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }
}

impl ValueBuilder for TraceRecord {
    fn write(&mut self, message: &str) {
        self.log(message);
    }
}

impl Display for TraceRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for part in &self.parts {
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

/*
Boilerplate notes for TraceRecord:

- Clone: sinks that fan out need their own copy.
- PartialEq/Eq/Hash: derived, records are plain data.
- Default: no.  Every record is produced by a specific event, so there is no sensible default kind.
- Copy: no, owns strings.
- Send is automatic, which lets sinks hand records to other threads.
*/
