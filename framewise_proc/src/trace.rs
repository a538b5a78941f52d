// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::parser::{RENDER_IMPORTS, arguments_source, parse_arguments};
use proc_macro::TokenStream;

/// Binding that keeps the frame alive until the end of the enclosing block.
const FRAME_BINDING: &str = "__framewise_frame";

pub fn trace_impl(input: TokenStream) -> TokenStream {
    if !input.is_empty() {
        return r#"compile_error!("trace!() takes no arguments; use trace_logged!() to record values")"#
            .parse()
            .unwrap();
    }
    let src = format!(
        r#"
        let {FRAME_BINDING} = ::core::pin::pin!(framewise::Frame::new(framewise::location!()));
        {FRAME_BINDING}.as_ref().enter();
    "#,
        FRAME_BINDING = FRAME_BINDING
    );

    src.parse().unwrap()
}

pub fn trace_logged_impl(input: TokenStream) -> TokenStream {
    let arguments = match parse_arguments(input) {
        Ok(arguments) => arguments,
        Err(e) => return e,
    };
    let src = format!(
        r#"
        let {FRAME_BINDING} = ::core::pin::pin!({{
            {RENDER_IMPORTS}
            framewise::LoggedFrame::new(framewise::location!(), {ARGUMENTS})
        }});
        {FRAME_BINDING}.as_ref().enter();
    "#,
        FRAME_BINDING = FRAME_BINDING,
        RENDER_IMPORTS = RENDER_IMPORTS,
        ARGUMENTS = arguments_source(&arguments)
    );

    src.parse().unwrap()
}

pub fn output_impl(input: TokenStream) -> TokenStream {
    let arguments = match parse_arguments(input) {
        Ok(arguments) => arguments,
        Err(e) => return e,
    };
    let src = format!(
        r#"
        {{
            {RENDER_IMPORTS}
            framewise::output({ARGUMENTS})
        }}
    "#,
        RENDER_IMPORTS = RENDER_IMPORTS,
        ARGUMENTS = arguments_source(&arguments)
    );

    src.parse().unwrap()
}
