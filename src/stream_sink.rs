// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::record::TraceRecord;
use crate::sink::Sink;
use std::io::Write;
use std::sync::Mutex;

/**
A sink over any writable stream: a file, a socket, a `Vec<u8>`.

Each record is written followed by `\n`.  Write errors are dropped.

```
use framewise::{Sink, StreamSink, RecordKind, TraceRecord};

let sink = StreamSink::new(Vec::new());
let mut record = TraceRecord::new(RecordKind::Output);
record.log("Thread(0) x => 5");
sink.write_record(record);
assert_eq!(sink.into_inner(), b"Thread(0) x => 5\n");
```
*/
pub struct StreamSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> StreamSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Returns the underlying stream.
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W> std::fmt::Debug for StreamSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamSink")
            .field("writer", &std::any::type_name::<W>())
            .finish()
    }
}

impl<W: Write + Send> Sink for StreamSink<W> {
    fn write_record(&self, record: TraceRecord) {
        let mut writer = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        for part in record.parts {
            if writer.write_all(part.as_bytes()).is_err() {
                return;
            }
        }
        let _ = writer.write_all(b"\n");
    }

    fn flush(&self) {
        let _ = self
            .writer
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .flush();
    }
}

/*
Boilerplate notes for StreamSink:

- Debug: manual, W is rarely Debug.  Prints the stream type instead.
- Clone: no, the stream is owned.
- Default: only if W: Default, and an empty Vec<u8> sink is better spelled out.  Not implemented.
*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordKind;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::*;

    #[derive(Debug)]
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("broken stream"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::other("broken stream"))
        }
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn appends_lines() {
        let sink = StreamSink::new(Vec::new());
        for text in ["first", "second"] {
            let mut record = TraceRecord::new(RecordKind::StackTrace);
            record.log(text);
            sink.write_record(record);
        }
        sink.flush();
        assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "first\nsecond\n");
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn io_errors_are_swallowed() {
        let sink = StreamSink::new(Broken);
        let mut record = TraceRecord::new(RecordKind::Unwind);
        record.log("Exception thrown: demo.x:1 - f");
        sink.write_record(record);
        sink.flush();
    }
}
