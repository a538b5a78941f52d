// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide diagnostic destination.
//!
//! Unwind lines (`Exception thrown: <location>`) and framewise's own warnings do not go to the
//! per-thread sink.  They go to a single destination shared by every thread, chosen once per
//! process:
//!
//! * by default, standard output;
//! * or whatever [`install_diagnostic_sink`] was given, provided it was called before anything
//!   was written there.
//!
//! Once chosen, the destination never changes.  Threads do not serialize on it beyond what the
//! sink itself does, so lines from concurrent unwinds on different threads may interleave.
//!
//! Unwind lines may additionally carry a `Thread(<id>) ` prefix, see [`set_thread_prefix`].
//!
//! ```
//! use framewise::InMemorySink;
//! use framewise::diagnostic::{diagnostic_sink, install_diagnostic_sink};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(InMemorySink::new());
//! install_diagnostic_sink(sink.clone()).expect("first thing the process does");
//!
//! fn fails() {
//!     framewise::trace!();
//!     panic!("boom");
//! }
//! let _ = std::panic::catch_unwind(fails);
//!
//! let lines = sink.drain_lines();
//! assert_eq!(lines.len(), 1);
//! assert!(lines[0].starts_with("Exception thrown: "));
//! assert!(lines[0].ends_with("::fails"));
//!
//! // too late to change it now
//! assert!(install_diagnostic_sink(Arc::new(InMemorySink::new())).is_err());
//! ```

use crate::console_sink::ConsoleSink;
use crate::sink::Sink;
use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

static DIAGNOSTIC_SINK: OnceLock<Arc<dyn Sink>> = OnceLock::new();

static THREAD_PREFIX: AtomicBool = AtomicBool::new(false);

/// Returned by [`install_diagnostic_sink`] when the destination was already chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticSinkError {
    _private: (),
}

impl Display for DiagnosticSinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "the diagnostic sink was already chosen; install it before the first frame unwinds"
        )
    }
}

impl std::error::Error for DiagnosticSinkError {}

/// The fixed diagnostic destination, choosing the default if none was installed.
pub fn diagnostic_sink() -> Arc<dyn Sink> {
    DIAGNOSTIC_SINK
        .get_or_init(|| Arc::new(ConsoleSink::stdout()))
        .clone()
}

/// Chooses the diagnostic destination for the rest of the process.
///
/// Fails if a destination was already installed, or if the default was already put in use.
pub fn install_diagnostic_sink(sink: Arc<dyn Sink>) -> Result<(), DiagnosticSinkError> {
    DIAGNOSTIC_SINK
        .set(sink)
        .map_err(|_| DiagnosticSinkError { _private: () })
}

/**
Selects `Thread(<id>) Exception thrown: <location>` instead of `Exception thrown: <location>`
for unwind lines written from now on, on every thread.

```
use framewise::diagnostic::{set_thread_prefix, thread_prefix};

assert!(!thread_prefix());
set_thread_prefix(true);
assert!(thread_prefix());
```
*/
pub fn set_thread_prefix(enabled: bool) {
    THREAD_PREFIX.store(enabled, Ordering::Relaxed);
}

/// Whether unwind lines carry the `Thread(<id>) ` prefix.  Off by default.
pub fn thread_prefix() -> bool {
    THREAD_PREFIX.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemorySink;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::*;

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn destination_is_fixed_after_first_use() {
        let first = diagnostic_sink();
        let err = install_diagnostic_sink(Arc::new(InMemorySink::new())).unwrap_err();
        assert!(err.to_string().contains("already chosen"));
        assert!(Arc::ptr_eq(&first, &diagnostic_sink()));
    }
}
