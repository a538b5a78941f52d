// SPDX-License-Identifier: MIT OR Apache-2.0

//! Location capture macros.
//!
//! The frame macros ([`trace!`](crate::trace), [`trace_logged!`](crate::trace_logged),
//! [`output!`](crate::output!)) live in `framewise_proc`.  The declarative macros here supply
//! the `(file, function, line)` triple they attach to frames.

/// Name of the enclosing function, with its module path.
///
/// ```
/// fn hitchhiker() -> &'static str {
///     framewise::function_name!()
/// }
/// assert!(hitchhiker().ends_with("::hitchhiker"));
/// ```
///
/// Inside closures the name ends in `{{closure}}`, as `std::any::type_name` reports it.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __framewise_probe() {}
        $crate::hidden::enclosing_function(__framewise_probe)
    }};
}

/// The current [`Location`](crate::Location).
///
/// ```
/// let location = framewise::location!();
/// assert_eq!(location.line(), line!() - 1);
/// assert_eq!(location.file(), file!());
/// ```
#[macro_export]
macro_rules! location {
    () => {
        $crate::Location::new(file!(), $crate::function_name!(), line!())
    };
}

/// Strips the probe's own name from its type name, leaving the function it was declared in.
#[doc(hidden)]
pub fn enclosing_function<F: Fn()>(_probe: F) -> &'static str {
    let name = std::any::type_name::<F>();
    name.strip_suffix("::__framewise_probe").unwrap_or(name)
}
