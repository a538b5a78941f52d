// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sink
//!
//! A [`Sink`] that keeps every line in memory instead of writing it out.  Useful for:
//!
//! - Unit testing code that is traced with framewise
//! - Capturing trace output where stdout is redirected or unavailable
//! - Programmatically examining stack traces and unwind paths
//!
//! The buffer sits behind a mutex, so a single `Arc<InMemorySink>` can be installed as the
//! sink of several threads at once.  Lines from different threads are kept in arrival order.

use crate::record::TraceRecord;
use crate::sink::Sink;
use std::sync::{Mutex, MutexGuard};

/// A sink that stores trace lines in a `Vec<String>`.
///
/// # Example
///
/// ```rust
/// use framewise::{InMemorySink, Location, LoggedFrame, set_sink};
/// use std::pin::pin;
/// use std::sync::Arc;
///
/// let sink = Arc::new(InMemorySink::new());
/// set_sink(sink.clone());
/// {
///     let frame = pin!(LoggedFrame::new(Location::new("demo.x", "f", 10), &[]));
///     frame.as_ref().enter();
/// }
/// let lines = sink.drain_lines();
/// assert_eq!(lines.len(), 2);
/// assert!(lines[0].ends_with("==> demo.x:10 - f"));
/// assert!(lines[1].ends_with("<== demo.x:10 - f"));
/// ```
#[derive(Debug)]
pub struct InMemorySink {
    lines: Mutex<Vec<String>>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: Derived, required by the Sink trait
// - Default: empty buffer
// - Clone: NOT implemented - two sinks sharing nothing would surprise callers; share an Arc
// - PartialEq/Eq/Hash: NOT implemented - equality of a mutex-guarded buffer is unclear
// - Send/Sync: automatic via Mutex

impl Default for InMemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySink {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    //a panicking writer must not take the buffer down with it
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Returns a copy of every line written so far, leaving the buffer intact.
    pub fn lines(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Takes every line written so far, clearing the buffer.
    pub fn drain_lines(&self) -> Vec<String> {
        std::mem::take(&mut *self.lock())
    }

    /// Drains all lines into a single string joined with newlines, clearing the buffer.
    ///
    /// ```rust
    /// use framewise::{InMemorySink, set_sink};
    /// use std::sync::Arc;
    ///
    /// let sink = Arc::new(InMemorySink::new());
    /// set_sink(sink.clone());
    /// let (x, y) = (5, 7);
    /// framewise::output!(x, y);
    /// assert!(sink.drain_logs().ends_with("x => 5, y => 7"));
    /// assert_eq!(sink.drain_logs(), "");
    /// ```
    pub fn drain_logs(&self) -> String {
        self.drain_lines().join("\n")
    }

    /// Writes all lines to the console, clearing the buffer.
    ///
    /// On native platforms lines go to stderr, on wasm to `console.log`.
    pub fn drain_to_console(&self) {
        for line in self.drain_lines() {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::log_1(&line.into());
            #[cfg(not(target_arch = "wasm32"))]
            eprintln!("{}", line);
        }
    }
}

impl Sink for InMemorySink {
    fn write_record(&self, record: TraceRecord) {
        let line = record.to_string();
        self.lock().push(line);
    }

    fn flush(&self) {
        //nothing is buffered anywhere but here
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordKind;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::*;

    fn record(text: &str) -> TraceRecord {
        let mut record = TraceRecord::new(RecordKind::Output);
        record.log(text);
        record
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn lines_snapshot_then_drain() {
        let sink = InMemorySink::new();
        sink.write_record(record("one"));
        sink.write_record(record("two"));
        assert_eq!(sink.lines(), ["one", "two"]);
        assert_eq!(sink.drain_logs(), "one\ntwo");
        assert!(sink.lines().is_empty());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn survives_poisoned_lock() {
        use std::sync::Arc;
        let sink = Arc::new(InMemorySink::new());
        let poison = sink.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poison.lines.lock().unwrap();
            panic!("poison the buffer");
        })
        .join();
        sink.write_record(record("after"));
        assert_eq!(sink.drain_lines(), ["after"]);
    }
}
