// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record construction and dispatch.
//!
//! Frames and the `output` entry point describe *what* happened; the functions here turn that
//! into a [`TraceRecord`] and hand it to the right sink:
//!
//! | Event           | Sink                         | Line                                              |
//! |-----------------|------------------------------|---------------------------------------------------|
//! | logged enter    | thread sink                  | `Thread(<id>) ==> <location>[ name => value, ...]`|
//! | logged exit     | thread sink                  | `Thread(<id>) <== <location>`                     |
//! | output          | thread sink                  | `Thread(<id>) name => value, ...`                 |
//! | unwind          | diagnostic sink              | `[Thread(<id>) ]Exception thrown: <location>`     |
//! | misuse warning  | diagnostic sink              | `framewise: ...`                                  |
//!
//! The sink handle is cloned out of the thread context before writing, so a sink is free to
//! call back into framewise.

use crate::RecordKind;
use crate::location::Location;
use crate::record::TraceRecord;
use crate::sink::Sink;
use crate::stack::{Argument, ThreadID, with_context};
use std::sync::Arc;

fn thread_and_sink() -> Option<(ThreadID, Arc<dyn Sink>)> {
    with_context(|ctx| (ctx.id, ctx.sink()))
}

pub(crate) fn enter(location: &Location, arguments: &[(String, String)]) {
    let Some((thread, sink)) = thread_and_sink() else {
        return;
    };
    let mut record = TraceRecord::new(RecordKind::Enter);
    record.log_thread(thread);
    record.log(" ==> ");
    location.log_to(&mut record);
    for (i, (name, value)) in arguments.iter().enumerate() {
        record.log(if i == 0 { " " } else { ", " });
        record.log(name);
        record.log(" => ");
        record.log(value);
    }
    sink.write_record(record);
}

pub(crate) fn exit(location: &Location) {
    let Some((thread, sink)) = thread_and_sink() else {
        return;
    };
    let mut record = TraceRecord::new(RecordKind::Exit);
    record.log_thread(thread);
    record.log(" <== ");
    location.log_to(&mut record);
    sink.write_record(record);
}

/**
Writes a standalone `Thread(<id>) name1 => value1, ...` line to the calling thread's sink.

Not tied to any frame.  Usually called through [`output!`](crate::output!), which takes the
names from the argument expressions:

```
use framewise::{Argument, InMemorySink, set_sink};
use std::sync::Arc;

let sink = Arc::new(InMemorySink::new());
set_sink(sink.clone());
framewise::output(&[Argument::new("x", &5), Argument::new("y", &7)]);
let line = sink.drain_logs();
assert!(line.starts_with("Thread("));
assert!(line.ends_with(") x => 5, y => 7"));
```
*/
pub fn output(arguments: &[Argument<'_>]) {
    let Some((thread, sink)) = thread_and_sink() else {
        return;
    };
    let mut record = TraceRecord::new(RecordKind::Output);
    record.log_thread(thread);
    for (i, argument) in arguments.iter().enumerate() {
        record.log(if i == 0 { " " } else { ", " });
        record.log(argument.name());
        record.log(" => ");
        argument.value().trace_value(&mut record);
    }
    sink.write_record(record);
}

pub(crate) fn unwind(location: &Location) {
    let mut record = TraceRecord::new(RecordKind::Unwind);
    if crate::diagnostic::thread_prefix() {
        record.log_thread(ThreadID::current());
        record.log(" ");
    }
    record.log("Exception thrown: ");
    location.log_to(&mut record);
    crate::diagnostic::diagnostic_sink().write_record(record);
}

pub(crate) fn released_out_of_order(location: &Location) {
    let mut record = TraceRecord::new(RecordKind::Warning);
    record.log("framewise: frame ");
    location.log_to(&mut record);
    record.log(" was released while frames entered after it were still live; it was unlinked from the middle of the stack");
    crate::diagnostic::diagnostic_sink().write_record(record);
}
