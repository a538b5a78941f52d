// SPDX-License-Identifier: MIT OR Apache-2.0

//! Source locations attached to frames.
//!
//! A [`Location`] is the `(file, function, line)` triple a frame was created at.  It is
//! `Copy` and holds only `'static` data, so it can be lifted out of a frame without
//! borrowing the frame itself.  This is what lets [`StackTrace`](crate::StackTrace) take a
//! snapshot of the chain and release it before any sink code runs.

use std::fmt::Display;

/**
An immutable source location.

Usually created with [`location!`](crate::location), which fills in the current file, the
enclosing function and the current line.

```
use framewise::Location;

let location = Location::new("demo.x", "f", 10);
assert_eq!(location.to_string(), "demo.x:10 - f");
```
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    file: &'static str,
    function: &'static str,
    line: u32,
}

impl Location {
    #[inline]
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }

    #[inline]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    #[inline]
    pub const fn function(&self) -> &'static str {
        self.function
    }

    #[inline]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /**
    Writes `<file>:<line> - <function>` to the record.
    */
    pub(crate) fn log_to(&self, record: &mut crate::record::TraceRecord) {
        record.log(self.file);
        record.log_owned(format!(":{} - ", self.line));
        record.log(self.function);
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} - {}", self.file, self.line, self.function)
    }
}

/*
Boilerplate notes for Location:

- Copy/Clone: all fields are 'static references or integers.
- PartialEq/Eq/Hash: data equality.  Two frames created at the same source point compare equal.
- Ord: no meaningful ordering across files.
- Default: no.  A location without a source point is meaningless.
- Display: the canonical `<file>:<line> - <function>` form used by every output line.
*/
