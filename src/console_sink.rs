// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::record::TraceRecord;
use crate::sink::Sink;

/// Which standard stream a [ConsoleSink] writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleStream {
    Stdout,
    Stderr,
}

/**
A reference sink that writes to a standard stream.

This is the default sink for every thread and the default diagnostic destination.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConsoleSink {
    stream: ConsoleStream,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug/Clone/Copy: one enum field, no resources held
// - PartialEq/Eq/Hash: two sinks are equal when they target the same stream
// - Default: stdout, matching where trace lines go when nothing is configured
// - Display: NOT implemented - no meaningful string representation

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl ConsoleSink {
    pub const fn new(stream: ConsoleStream) -> Self {
        Self { stream }
    }

    pub const fn stdout() -> Self {
        Self::new(ConsoleStream::Stdout)
    }

    pub const fn stderr() -> Self {
        Self::new(ConsoleStream::Stderr)
    }

    pub fn stream(&self) -> ConsoleStream {
        self.stream
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_parts<W: std::io::Write>(mut lock: W, record: TraceRecord) {
    //errors are dropped, we may be unwinding
    for part in record.parts {
        if lock.write_all(part.as_bytes()).is_err() {
            return;
        }
    }
    let _ = lock.write_all(b"\n");
}

impl Sink for ConsoleSink {
    fn write_record(&self, record: TraceRecord) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            match self.stream {
                ConsoleStream::Stdout => write_parts(std::io::stdout().lock(), record),
                ConsoleStream::Stderr => write_parts(std::io::stderr().lock(), record),
            }
        }
        #[cfg(target_arch = "wasm32")]
        {
            use crate::RecordKind;
            let kind = record.kind();
            let msg = record.to_string();
            match kind {
                RecordKind::Unwind => web_sys::console::error_1(&msg.into()),
                RecordKind::Warning => web_sys::console::warn_1(&msg.into()),
                _ => web_sys::console::log_1(&msg.into()),
            }
        }
    }

    fn flush(&self) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write;
            let _ = match self.stream {
                ConsoleStream::Stdout => std::io::stdout().flush(),
                ConsoleStream::Stderr => std::io::stderr().flush(),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordKind;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::*;

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn default_is_stdout() {
        assert_eq!(ConsoleSink::default().stream(), ConsoleStream::Stdout);
        assert_ne!(ConsoleSink::stdout(), ConsoleSink::stderr());
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn writes_without_panicking() {
        let mut record = TraceRecord::new(RecordKind::Output);
        record.log("console sink smoke test");
        ConsoleSink::stderr().write_record(record);
        ConsoleSink::stderr().flush();
    }
}
