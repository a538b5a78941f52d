//! Unwind lines with the `Thread(<id>)` prefix switched on.
//!
//! Kept apart from `unwind.rs` because the switch is process wide.

use framewise::InMemorySink;
use framewise::diagnostic::{install_diagnostic_sink, set_thread_prefix, thread_prefix};
use framewise::ThreadID;
use std::sync::Arc;

fn fails() {
    framewise::trace!();
    panic!("prefixed");
}

#[test]
fn unwind_lines_carry_thread_id() {
    let sink = Arc::new(InMemorySink::new());
    install_diagnostic_sink(sink.clone()).unwrap();
    set_thread_prefix(true);
    assert!(thread_prefix());

    assert!(std::panic::catch_unwind(fails).is_err());
    let id = ThreadID::current();
    let lines = sink.drain_lines();
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(
        lines[0].starts_with(&format!("Thread({id}) Exception thrown: {}:", file!())),
        "{}",
        lines[0]
    );
    assert!(lines[0].ends_with(" - unwind_thread_prefix::fails"));
}
