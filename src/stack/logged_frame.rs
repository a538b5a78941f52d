// SPDX-License-Identifier: MIT OR Apache-2.0

use super::frame::Frame;
use crate::location::Location;
use crate::value::{TraceValue, format_value};
use std::pin::Pin;

/**
A named value passed to a logged frame or to [crate::output].

```
use framewise::Argument;

let count = 3;
let argument = Argument::new("count", &count);
assert_eq!(argument.name(), "count");
assert_eq!(argument.formatted(), "3");
```
*/
#[derive(Clone, Copy)]
pub struct Argument<'a> {
    name: &'a str,
    value: &'a dyn TraceValue,
}

impl<'a> Argument<'a> {
    #[inline]
    pub const fn new(name: &'a str, value: &'a dyn TraceValue) -> Self {
        Self { name, value }
    }

    #[inline]
    pub fn name(&self) -> &'a str {
        self.name
    }

    #[inline]
    pub fn value(&self) -> &'a dyn TraceValue {
        self.value
    }

    /// The value as it appears in trace lines.
    pub fn formatted(&self) -> String {
        format_value(self.value)
    }
}

impl std::fmt::Debug for Argument<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Argument")
            .field("name", &self.name)
            .field("value", &self.formatted())
            .finish()
    }
}

/**
A [Frame] that also reports itself to the thread's sink.

Entering writes

```text
Thread(<id>) ==> <file>:<line> - <function> name1 => value1, name2 => value2
```

where the ` name => value` suffix is present only if arguments were given.  Dropping writes

```text
Thread(<id>) <== <file>:<line> - <function>
```

whether or not the thread is panicking.  The wrapped frame still writes its own
`Exception thrown:` line to the diagnostic sink when dropped during a panic.

Argument values are formatted when the frame is created, so later mutation of the originals
does not change what the frame reports.

```
use framewise::{InMemorySink, set_sink};
use std::sync::Arc;

fn add(a: i32, b: i32) -> i32 {
    framewise::trace_logged!(a, b);
    a + b
}

let sink = Arc::new(InMemorySink::new());
set_sink(sink.clone());
add(2, 3);
let lines = sink.drain_lines();
assert!(lines[0].contains("==> ") && lines[0].ends_with("::add a => 2, b => 3"));
assert!(lines[1].contains("<== ") && lines[1].ends_with("::add"));
```
*/
#[derive(Debug)]
pub struct LoggedFrame {
    frame: Frame,
    arguments: Vec<(String, String)>,
}

impl LoggedFrame {
    pub fn new(location: Location, arguments: &[Argument<'_>]) -> Self {
        Self {
            frame: Frame::new(location),
            arguments: arguments
                .iter()
                .map(|a| (a.name.to_string(), a.formatted()))
                .collect(),
        }
    }

    /// The underlying frame.
    #[inline]
    pub fn as_frame(self: Pin<&Self>) -> Pin<&Frame> {
        //safety: structural pinning, `frame` is never moved out
        unsafe { self.map_unchecked(|s| &s.frame) }
    }

    /**
    Pushes the frame and writes the `==>` line.

    Entering a frame that is already entered does nothing.
    */
    pub fn enter(self: Pin<&Self>) {
        if self.frame.is_entered() {
            return;
        }
        self.as_frame().enter();
        if self.frame.is_entered() {
            crate::dispatch::enter(&self.frame.location(), &self.arguments);
        }
    }

    #[inline]
    pub fn location(&self) -> Location {
        self.frame.location()
    }

    /// `(name, formatted value)` pairs captured at creation.
    #[inline]
    pub fn arguments(&self) -> &[(String, String)] {
        &self.arguments
    }

    #[inline]
    pub fn is_entered(&self) -> bool {
        self.frame.is_entered()
    }
}

impl Drop for LoggedFrame {
    fn drop(&mut self) {
        //runs before `frame` is dropped, so the exit line is written while still on top
        if self.frame.is_entered() {
            crate::dispatch::exit(&self.frame.location());
        }
    }
}
