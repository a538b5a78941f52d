//! Lines written by logged frames and `output!`.

use framewise::{Argument, InMemorySink, Location, LoggedFrame, ThreadID, set_sink};
use std::pin::pin;
use std::sync::Arc;

fn capture() -> Arc<InMemorySink> {
    let sink = Arc::new(InMemorySink::new());
    set_sink(sink.clone());
    sink
}

#[test]
fn exactly_two_lines_without_arguments() {
    let sink = capture();
    {
        let frame = pin!(LoggedFrame::new(Location::new("demo.x", "f", 10), &[]));
        frame.as_ref().enter();
    }
    let id = ThreadID::current();
    assert_eq!(
        sink.drain_logs(),
        format!("Thread({id}) ==> demo.x:10 - f\nThread({id}) <== demo.x:10 - f")
    );
}

#[test]
fn output_function() {
    let sink = capture();
    framewise::output(&[Argument::new("x", &5), Argument::new("y", &7)]);
    let id = ThreadID::current();
    assert_eq!(sink.drain_logs(), format!("Thread({id}) x => 5, y => 7"));
}

#[test]
fn output_macro_names_arguments() {
    let sink = capture();
    let x = 5;
    let items = vec!["aa", "bbbbbbbbbbbbbbbb"];
    framewise::output!(x, items.len(), items, doubled = x * 2);
    let line = sink.drain_logs();
    assert!(
        line.ends_with(" x => 5, items.len() => 2, items => [aa, bbbbbbbbbb...], doubled => 10"),
        "{line}"
    );
}

fn compute(left: i64, label: &str) -> i64 {
    framewise::trace_logged!(left, label, twice = left * 2);
    left * 2
}

#[test]
fn trace_logged_macro() {
    let sink = capture();
    let line = line!() + 1;
    assert_eq!(compute(-4, "twelve chars"), -8);
    let lines = sink.drain_lines();
    assert_eq!(lines.len(), 2);
    let enter = &lines[0];
    assert!(enter.contains(&format!(" ==> {}:", file!())), "{enter}");
    assert!(
        enter.ends_with("::compute left => -4, label => twelve cha..., twice => -8"),
        "{enter}"
    );
    assert!(lines[1].contains(" <== ") && lines[1].ends_with("::compute"));
    //the frame is declared in `compute`, not at the call site
    assert!(!enter.contains(&format!(":{line} ")));
}

fn nested_inner() {
    framewise::trace_logged!();
}

fn nested_outer() {
    framewise::trace_logged!();
    nested_inner();
}

#[test]
fn nesting_order() {
    let sink = capture();
    nested_outer();
    let lines = sink.drain_lines();
    let arrows: Vec<_> = lines
        .iter()
        .map(|l| {
            let arrow = if l.contains(" ==> ") { "==>" } else { "<==" };
            let function = l.rsplit("::").next().unwrap_or_default();
            format!("{arrow} {function}")
        })
        .collect();
    assert_eq!(
        arrows,
        [
            "==> nested_outer",
            "==> nested_inner",
            "<== nested_inner",
            "<== nested_outer",
        ]
    );
}

#[test]
fn paths_and_comparisons_as_values() {
    let sink = capture();
    let x = 5;
    framewise::output!(max = u8::MAX, same = x == 5, at_least = x >= 6, other = x != 5);
    framewise::output!(std::cmp::max(x, 9), core::primitive::u16::MIN);
    let lines = sink.drain_lines();
    assert_eq!(lines.len(), 2);
    assert!(
        lines[0].ends_with(" max => 255, same => true, at_least => false, other => false"),
        "{}",
        lines[0]
    );
    assert!(
        lines[1].ends_with(" => 9, core::primitive::u16::MIN => 0"),
        "{}",
        lines[1]
    );
}

struct Celsius(i32);

impl std::fmt::Display for Celsius {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} degrees celsius", self.0)
    }
}

fn thermostat(reading: Celsius, range: std::ops::Range<i32>, unit: ()) {
    framewise::trace_logged!(reading, range, unit, pair = (1, 'c'));
}

#[test]
fn values_without_trace_value_impl() {
    let sink = capture();
    thermostat(Celsius(21), 18..24, ());
    let lines = sink.drain_lines();
    assert_eq!(lines.len(), 2);
    assert!(
        lines[0].ends_with(
            "::thermostat reading => 21 degrees celsius, range => 18..24, unit => (), pair => (1, 'c')"
        ),
        "{}",
        lines[0]
    );
}
