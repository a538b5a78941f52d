// SPDX-License-Identifier: MIT OR Apache-2.0

/// What produced a [`TraceRecord`](crate::TraceRecord).
///
/// Sinks may use this to route records, e.g. [`ConsoleSink`](crate::ConsoleSink) on wasm
/// sends unwind lines to `console.error`.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordKind {
    /// `==>` line written when a logged frame is entered
    Enter,
    /// `<==` line written when a logged frame is released
    Exit,
    /// Standalone value dump
    Output,
    /// One line of a printed stack trace
    StackTrace,
    /// `Exception thrown:` line written while unwinding
    Unwind,
    /// Misuse detected by the tracer itself
    Warning,
}
