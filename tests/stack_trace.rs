//! Printing the live frames.

use framewise::{InMemorySink, StackTrace, ThreadID, set_sink};
use std::sync::Arc;

fn hitchhiker() -> u32 {
    framewise::trace!();
    framewise::print_stack_trace();
    42
}

fn f() -> u32 {
    framewise::trace!();
    hitchhiker()
}

#[test]
fn hitchhiker_demo() {
    let sink = Arc::new(InMemorySink::new());
    set_sink(sink.clone());
    framewise::trace!();
    assert_eq!(f(), 42);
    let lines = sink.drain_lines();
    assert_eq!(lines.len(), 3, "{lines:?}");
    let prefix = format!("{}:", file!());
    assert!(lines.iter().all(|l| l.starts_with(&prefix)));
    assert!(lines[0].ends_with(" - stack_trace::hitchhiker"));
    assert!(lines[1].ends_with(" - stack_trace::f"));
    assert!(lines[2].ends_with(" - stack_trace::hitchhiker_demo"));
}

#[test]
fn empty_trace_prints_nothing() {
    let sink = InMemorySink::new();
    framewise::print_stack_trace_to(&sink);
    assert!(sink.lines().is_empty());
}

#[test]
fn thread_prefixed_lines() {
    framewise::trace!();
    let trace = StackTrace::capture().with_thread_prefix(true);
    let id = ThreadID::current();
    assert_eq!(trace.thread(), id);
    let text = trace.to_string();
    assert!(text.starts_with(&format!("Thread({id}) {}:", file!())), "{text}");
    assert!(text.ends_with(" - stack_trace::thread_prefixed_lines\n"));
}

#[test]
fn write_to_io() {
    fn inner() -> Vec<u8> {
        framewise::trace!();
        let mut out = Vec::new();
        StackTrace::capture().write_io(&mut out).unwrap();
        out
    }
    framewise::trace!();
    let out = String::from_utf8(inner()).unwrap();
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("::inner"));
    assert!(lines[1].ends_with("::write_to_io"));
}

#[test]
fn snapshot_outlives_frames() {
    fn take() -> StackTrace {
        framewise::trace!();
        StackTrace::capture()
    }
    let trace = take();
    assert_eq!(trace.len(), 1);
    assert_eq!(framewise::stack::depth(), 0);
    assert!(trace.frames()[0].function().ends_with("::take"));
}
