//SPDX-License-Identifier: MIT OR Apache-2.0

//! # Framewise Procedural Macros
//!
//! Call-site macros for the framewise call-stack recorder.  They turn a call such as
//! `trace_logged!(x, y)` into a frame carrying the call site's file, enclosing function and
//! line, plus the named values `x => ..` and `y => ..`.
//!
//! ## Architecture
//!
//! Each frame macro expands to two statements in the caller's block:
//! 1. **Pin**: the frame is constructed and pinned to the enclosing function with
//!    `core::pin::pin!`, bound to a hidden local that lives until the block ends
//! 2. **Enter**: the pinned frame is pushed onto the thread's stack
//!
//! The frame is popped when the hidden local goes out of scope, on return or on unwind.
//!
//! ## Usage Example
//!
//! ```rust
//! fn add(a: i32, b: i32) -> i32 {
//!     framewise::trace_logged!(a, b);
//!     a + b
//! }
//!
//! // The macro call expands to approximately:
//! // let __framewise_frame = ::core::pin::pin!({
//! //     use framewise::hidden::{RenderDebug as _, RenderDisplay as _, RenderTraceValue as _};
//! //     framewise::LoggedFrame::new(
//! //         framewise::location!(),
//! //         &[
//! //             framewise::Argument::new("a", &(&&&framewise::hidden::Autoref(&(a))).framewise_render() as &dyn framewise::TraceValue),
//! //             framewise::Argument::new("b", &(&&&framewise::hidden::Autoref(&(b))).framewise_render() as &dyn framewise::TraceValue),
//! //         ],
//! //     )
//! // });
//! // __framewise_frame.as_ref().enter();
//! # assert_eq!(add(1, 2), 3);
//! ```
//!
//! ## Argument Parsing
//!
//! Arguments are separated by top-level commas.  Each is either:
//! - a bare expression, named after its own source text (`a`, `items.len()`)
//! - `name = expression`, named explicitly
//!
//! Arguments are borrowed, not moved.  A value is rendered with its `framewise::TraceValue` impl
//! when it has one, otherwise with `Display`, otherwise with `Debug`.  A value with none of the
//! three is a compile error.

use proc_macro::TokenStream;

mod parser;
mod trace;

/// Declares a frame for the rest of the enclosing block.
///
/// The frame is pushed immediately and popped when the block ends.  If it is popped because a
/// panic is unwinding, `Exception thrown: <file>:<line> - <function>` is written to the
/// diagnostic sink.
///
/// # Syntax
/// ```ignore
/// framewise::trace!();
/// ```
///
/// # Generated Code Pattern
/// ```ignore
/// let __framewise_frame = ::core::pin::pin!(framewise::Frame::new(framewise::location!()));
/// __framewise_frame.as_ref().enter();
/// ```
///
/// # Examples
/// ```
/// fn hitchhiker() -> u32 {
///     framewise::trace!();
///     framewise::print_stack_trace();
///     42
/// }
///
/// fn f() -> u32 {
///     framewise::trace!();
///     hitchhiker()
/// }
/// assert_eq!(f(), 42);
/// ```
///
/// # Error Cases
///
/// Arguments are rejected:
/// ```compile_fail
/// fn f(x: u8) {
///     framewise::trace!(x);
/// }
/// ```
#[proc_macro]
pub fn trace(input: TokenStream) -> TokenStream {
    trace::trace_impl(input)
}

/// Declares a logged frame for the rest of the enclosing block.
///
/// On entry writes `Thread(<id>) ==> <file>:<line> - <function> name => value, ...` to the
/// calling thread's sink; the `name => value` part is present only when arguments are given.
/// When the block ends, writes `Thread(<id>) <== <file>:<line> - <function>`.
///
/// # Syntax
/// ```ignore
/// framewise::trace_logged!(expr, name = expr, ...);
/// ```
///
/// # Examples
/// ```
/// use framewise::{InMemorySink, set_sink};
/// use std::sync::Arc;
///
/// fn greet(name: &str, times: usize) {
///     framewise::trace_logged!(name, times, shout = times > 2);
/// }
///
/// let sink = Arc::new(InMemorySink::new());
/// set_sink(sink.clone());
/// greet("a name longer than ten", 3);
/// let lines = sink.drain_lines();
/// assert!(lines[0].ends_with("greet name => a name lon..., times => 3, shout => true"));
/// ```
///
/// # Error Cases
///
/// A named argument needs a value:
/// ```compile_fail
/// fn f() {
///     framewise::trace_logged!(x =);
/// }
/// ```
#[proc_macro]
pub fn trace_logged(input: TokenStream) -> TokenStream {
    trace::trace_logged_impl(input)
}

/// Writes a standalone `Thread(<id>) name => value, ...` line to the calling thread's sink.
///
/// Not tied to a frame.
///
/// # Syntax
/// ```ignore
/// framewise::output!(expr, name = expr, ...);
/// ```
///
/// # Examples
/// ```
/// use framewise::{InMemorySink, set_sink};
/// use std::sync::Arc;
///
/// let sink = Arc::new(InMemorySink::new());
/// set_sink(sink.clone());
/// let x = 5;
/// framewise::output!(x, y = 7);
/// assert!(sink.drain_logs().ends_with("x => 5, y => 7"));
/// ```
#[proc_macro]
pub fn output(input: TokenStream) -> TokenStream {
    trace::output_impl(input)
}
