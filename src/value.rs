// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rendering of traced argument values.
//!
//! Every value that appears after a `name =>` in a trace line goes through [`TraceValue`].
//! The trait is object safe, so argument lists are type-erased as `&dyn TraceValue`.
//!
//! Two rules apply:
//!
//! * string-like values (`str`, `String`, `Cow<str>`, paths) longer than
//!   [`MAX_STRING_CHARS`] characters are cut to that many characters followed by
//!   [`TRUNCATION_MARKER`];
//! * everything else uses its canonical text form, untruncated.
//!
//! ```
//! use framewise::format_value;
//!
//! assert_eq!(format_value("hello"), "hello");
//! assert_eq!(format_value("a string longer than ten chars"), "a string l...");
//! assert_eq!(format_value(&42), "42");
//! ```
//!
//! The call-site macros accept any value.  A value with a [`TraceValue`] impl uses it;
//! otherwise the macros fall back to its `Display` text, and failing that to its `Debug` text.
//! Neither fallback is truncated.  Code calling [`output`](crate::output()) directly can
//! wrap such values in [`Shown`] or [`Debugged`], or implement [`TraceValue`] for them.

use std::borrow::Cow;
use std::fmt::{Debug, Display};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;

/// Longest string-like value written verbatim, in characters.
pub const MAX_STRING_CHARS: usize = 10;

/// Appended to string-like values that were cut.
pub const TRUNCATION_MARKER: &str = "...";

/// An in-progress line.
pub trait ValueBuilder {
    fn write(&mut self, message: &str);
}

impl ValueBuilder for String {
    fn write(&mut self, message: &str) {
        self.push_str(message);
    }
}

pub trait TraceValue {
    /**
    Writes the text form of the value to the builder.

    When implementing this, use of `#[inline]` is recommended.
    */
    fn trace_value(&self, builder: &mut dyn ValueBuilder);
}

/// Renders a value the way it appears in trace lines.
pub fn format_value<T: TraceValue + ?Sized>(value: &T) -> String {
    let mut out = String::new();
    value.trace_value(&mut out);
    out
}

fn write_truncated(text: &str, builder: &mut dyn ValueBuilder) {
    match text.char_indices().nth(MAX_STRING_CHARS) {
        Some((end, _)) => {
            builder.write(&text[..end]);
            builder.write(TRUNCATION_MARKER);
        }
        None => builder.write(text),
    }
}

macro_rules! display_value {
    ($($t:ty),*) => {
        $(
            impl TraceValue for $t {
                #[inline]
                fn trace_value(&self, builder: &mut dyn ValueBuilder) {
                    builder.write(&self.to_string());
                }
            }
        )*
    };
}

display_value!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char
);

/**
str is the string-like case.
*/
impl TraceValue for str {
    #[inline]
    fn trace_value(&self, builder: &mut dyn ValueBuilder) {
        write_truncated(self, builder);
    }
}

impl TraceValue for String {
    #[inline]
    fn trace_value(&self, builder: &mut dyn ValueBuilder) {
        write_truncated(self, builder);
    }
}

impl TraceValue for Cow<'_, str> {
    #[inline]
    fn trace_value(&self, builder: &mut dyn ValueBuilder) {
        write_truncated(self, builder);
    }
}

/**
Paths are strings as far as line length goes.
*/
impl TraceValue for Path {
    #[inline]
    fn trace_value(&self, builder: &mut dyn ValueBuilder) {
        write_truncated(&self.to_string_lossy(), builder);
    }
}

impl TraceValue for PathBuf {
    #[inline]
    fn trace_value(&self, builder: &mut dyn ValueBuilder) {
        self.as_path().trace_value(builder);
    }
}

/**
References and smart pointers render their target.
*/
impl<T: TraceValue + ?Sized> TraceValue for &T {
    #[inline]
    fn trace_value(&self, builder: &mut dyn ValueBuilder) {
        (**self).trace_value(builder);
    }
}

impl<T: TraceValue + ?Sized> TraceValue for &mut T {
    #[inline]
    fn trace_value(&self, builder: &mut dyn ValueBuilder) {
        (**self).trace_value(builder);
    }
}

impl<T: TraceValue + ?Sized> TraceValue for Box<T> {
    #[inline]
    fn trace_value(&self, builder: &mut dyn ValueBuilder) {
        (**self).trace_value(builder);
    }
}

impl<T: TraceValue + ?Sized> TraceValue for Rc<T> {
    #[inline]
    fn trace_value(&self, builder: &mut dyn ValueBuilder) {
        (**self).trace_value(builder);
    }
}

impl<T: TraceValue + ?Sized> TraceValue for Arc<T> {
    #[inline]
    fn trace_value(&self, builder: &mut dyn ValueBuilder) {
        (**self).trace_value(builder);
    }
}

/**
Option depends on the underlying type.
*/
impl<T: TraceValue> TraceValue for Option<T> {
    #[inline]
    fn trace_value(&self, builder: &mut dyn ValueBuilder) {
        match self {
            Some(t) => {
                builder.write("Some(");
                t.trace_value(builder);
                builder.write(")");
            }
            None => builder.write("None"),
        }
    }
}

/**
Sequences render each element with its own rules, so strings inside are still cut.
*/
impl<T: TraceValue> TraceValue for [T] {
    #[inline]
    fn trace_value(&self, builder: &mut dyn ValueBuilder) {
        builder.write("[");
        for (i, item) in self.iter().enumerate() {
            if i != 0 {
                builder.write(", ");
            }
            item.trace_value(builder);
        }
        builder.write("]");
    }
}

impl<T: TraceValue, const N: usize> TraceValue for [T; N] {
    #[inline]
    fn trace_value(&self, builder: &mut dyn ValueBuilder) {
        self.as_slice().trace_value(builder);
    }
}

impl<T: TraceValue> TraceValue for Vec<T> {
    #[inline]
    fn trace_value(&self, builder: &mut dyn ValueBuilder) {
        self.as_slice().trace_value(builder);
    }
}

/**
Escape hatch for types with a `Display` impl.  Never truncated.
*/
pub struct Shown<T>(pub T);

impl<T: Display> TraceValue for Shown<T> {
    #[inline]
    fn trace_value(&self, builder: &mut dyn ValueBuilder) {
        builder.write(&self.0.to_string());
    }
}

/**
Escape hatch for types with only a `Debug` impl.  Never truncated.
*/
pub struct Debugged<T>(pub T);

impl<T: Debug> TraceValue for Debugged<T> {
    #[inline]
    fn trace_value(&self, builder: &mut dyn ValueBuilder) {
        builder.write(&format!("{:?}", self.0));
    }
}

/*
Macro argument rendering.

The macros expand each argument `v` to `(&&&Autoref(&v)).framewise_render()`.  Method lookup
tries the receiver with the most references first, so the impls below are tried in order:
TraceValue, Display, Debug.  Each returns something that implements TraceValue.
*/

#[doc(hidden)]
pub struct Autoref<'a, T>(pub &'a T);

#[doc(hidden)]
pub trait RenderTraceValue {
    type Value;
    fn framewise_render(&self) -> Self::Value;
}

impl<'a, T: TraceValue> RenderTraceValue for &&Autoref<'a, T> {
    type Value = &'a T;
    #[inline]
    fn framewise_render(&self) -> &'a T {
        self.0
    }
}

#[doc(hidden)]
pub trait RenderDisplay {
    type Value;
    fn framewise_render(&self) -> Self::Value;
}

impl<'a, T: Display> RenderDisplay for &Autoref<'a, T> {
    type Value = Shown<&'a T>;
    #[inline]
    fn framewise_render(&self) -> Shown<&'a T> {
        Shown(self.0)
    }
}

#[doc(hidden)]
pub trait RenderDebug {
    type Value;
    fn framewise_render(&self) -> Self::Value;
}

impl<'a, T: Debug> RenderDebug for Autoref<'a, T> {
    type Value = Debugged<&'a T>;
    #[inline]
    fn framewise_render(&self) -> Debugged<&'a T> {
        Debugged(self.0)
    }
}
