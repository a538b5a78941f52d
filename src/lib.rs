//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# framewise

framewise records which traced functions are currently running on each thread, without
allocating and without locks.

# The problem

A native backtrace answers "where am I?", but only with symbols, only when unwinding info is
available, and only at the cost of a walk over the real machine stack.  Often I want something
much smaller: a list of *the functions I care about* that are currently live, which I can print
from anywhere, plus an account of which of them a panic passed through.

# The model

A traced function declares a frame as its first statement:

```rust
fn hitchhiker() -> u32 {
    framewise::trace!();
    framewise::print_stack_trace();
    42
}

fn f() -> u32 {
    framewise::trace!();
    hitchhiker()
}

fn main() {
    framewise::trace!();
    f();
}
```

Each frame links to the frame that was innermost when it was created, and unlinks itself when
its scope ends.  The chain therefore always equals the thread's live traced calls, and
[`print_stack_trace`] walks it:

```text
src/main.rs:2 - demo::hitchhiker
src/main.rs:8 - demo::f
src/main.rs:13 - demo::main
```

If a frame is dropped because a panic is unwinding through it, it writes
`Exception thrown: <file>:<line> - <function>` to the [diagnostic] destination, once per frame,
innermost first.

| Macro                                 | Frame                | Writes                                                   |
|---------------------------------------|----------------------|----------------------------------------------------------|
| [`trace!()`](trace)                   | [`Frame`]            | unwind lines only                                        |
| [`trace_logged!(a, b)`](trace_logged) | [`LoggedFrame`]      | `==>` on entry (with `a => .., b => ..`), `<==` on exit  |
| [`output!(a, b)`](output!)            | none                 | one `name => value` line                                 |

# Values

Arguments are rendered through [`TraceValue`].  Numbers, booleans and the like use their usual
text.  String-like values longer than ten characters are cut to ten and followed by `...`, which
keeps lines short no matter what is traced.  The macros take any other value too, through its
`Display` text or else its `Debug` text.

# Sinks

Logged output goes to the calling thread's [`Sink`], standard output unless [`set_sink`] chose
another.  Unwind lines go to the process-wide diagnostic sink, which is fixed for the life of the
process.  [`InMemorySink`] collects lines for tests; [`StreamSink`] wraps any `io::Write`.

# Multithreading

Every thread has its own stack and its own sink.  Frames are `!Send`: a thread can never see,
let alone drop, another thread's frames.
*/

mod kind;
mod location;
pub mod value;
mod record;
mod sink;
mod console_sink;
mod inmemory_sink;
mod stream_sink;
pub mod diagnostic;
pub mod stack;
mod stack_trace;
mod dispatch;
mod macros;

pub use kind::RecordKind;
pub use location::Location;
pub use record::TraceRecord;
pub use sink::Sink;
pub use console_sink::{ConsoleSink, ConsoleStream};
pub use inmemory_sink::InMemorySink;
pub use stream_sink::StreamSink;
pub use value::{TraceValue, format_value};
pub use stack::{Argument, Frame, LoggedFrame, ThreadID, current_sink, reset_sink, set_sink};
pub use stack_trace::{StackTrace, print_stack_trace, print_stack_trace_to};
pub use dispatch::output;

pub use framewise_proc::{output, trace, trace_logged};

#[doc(hidden)]
pub mod hidden {
    pub use crate::macros::enclosing_function;
    pub use crate::value::{Autoref, RenderDebug, RenderDisplay, RenderTraceValue};
}
extern crate self as framewise;
