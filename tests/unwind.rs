//! Unwind lines go to the diagnostic sink, one per frame the panic crosses.
//!
//! Tests in this binary share one diagnostic sink, so each test only looks at lines naming its
//! own functions.

use framewise::diagnostic::{diagnostic_sink, install_diagnostic_sink};
use framewise::{InMemorySink, Sink};
use std::sync::{Arc, OnceLock};

fn diagnostics() -> &'static Arc<InMemorySink> {
    static SINK: OnceLock<Arc<InMemorySink>> = OnceLock::new();
    SINK.get_or_init(|| {
        let sink = Arc::new(InMemorySink::new());
        install_diagnostic_sink(sink.clone()).unwrap();
        sink
    })
}

fn lines_mentioning(needle: &str) -> Vec<String> {
    diagnostics()
        .lines()
        .into_iter()
        .filter(|l| l.contains(needle))
        .collect()
}

mod crossing {
    pub fn a() {
        framewise::trace!();
        b();
    }
    fn b() {
        framewise::trace!();
        c();
    }
    fn c() {
        framewise::trace!();
        panic!("thrown in c");
    }
}

#[test]
fn panic_through_three_frames() {
    diagnostics();
    assert!(std::panic::catch_unwind(crossing::a).is_err());
    let lines = lines_mentioning("::crossing::");
    assert_eq!(lines.len(), 3, "{lines:?}");
    assert!(lines[0].starts_with("Exception thrown: "));
    assert!(lines[0].ends_with("::crossing::c"));
    assert!(lines[1].ends_with("::crossing::b"));
    assert!(lines[2].ends_with("::crossing::a"));
    assert_eq!(framewise::stack::depth(), 0);
}

mod returning {
    pub fn a() -> u32 {
        framewise::trace!();
        b() + 1
    }
    fn b() -> u32 {
        framewise::trace!();
        41
    }
}

#[test]
fn normal_return_is_silent() {
    diagnostics();
    assert_eq!(returning::a(), 42);
    assert!(lines_mentioning("::returning::").is_empty());
}

mod caught_inside {
    pub fn outer() -> bool {
        framewise::trace!();
        std::panic::catch_unwind(inner).is_err()
    }
    fn inner() {
        framewise::trace!();
        panic!("caught by outer");
    }
}

#[test]
fn only_crossed_frames_report() {
    diagnostics();
    assert!(caught_inside::outer());
    let lines = lines_mentioning("::caught_inside::");
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].ends_with("::caught_inside::inner"));
}

mod logged {
    pub fn doomed(x: u32) {
        framewise::trace_logged!(x);
        panic!("logged frames unwind too");
    }
}

#[test]
fn logged_frame_writes_exit_and_unwind_lines() {
    diagnostics();
    let own = Arc::new(InMemorySink::new());
    framewise::set_sink(own.clone());
    assert!(std::panic::catch_unwind(|| logged::doomed(9)).is_err());

    let logged = own.drain_lines();
    assert_eq!(logged.len(), 2, "{logged:?}");
    assert!(logged[0].ends_with("::logged::doomed x => 9"));
    assert!(logged[1].contains(" <== "));

    let unwind = lines_mentioning("::logged::doomed");
    assert_eq!(unwind.len(), 1, "{unwind:?}");
    assert!(unwind[0].starts_with("Exception thrown: "));
}

#[test]
fn diagnostic_sink_is_the_installed_one() {
    let installed: Arc<dyn Sink> = diagnostics().clone();
    assert!(Arc::ptr_eq(&installed, &diagnostic_sink()));
    assert!(install_diagnostic_sink(Arc::new(InMemorySink::new())).is_err());
}
