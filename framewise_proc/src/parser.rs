//SPDX-License-Identifier: MIT OR Apache-2.0

use proc_macro::{Spacing, TokenStream, TokenTree};
use std::collections::VecDeque;

/// One argument of `trace_logged!` or `output!`.
///
/// `name` is shown in the trace line; `value` is source text re-parsed into the expansion.
pub struct NamedArgument {
    pub name: String,
    pub value: String,
}

/// Splits the token stream into comma-separated arguments.
///
/// Commas inside groups (parentheses, brackets, braces) belong to the group's token, so
/// `f(a, b)` stays one argument.  A trailing comma is allowed.
///
/// # Examples
/// ```ignore
/// # // ignore because: This shows pseudo-code for token stream parsing, not actual runnable code
/// // For input: `a, b.len(), c = f(x, y)`
/// // Returns: [[a], [b . len ()], [c = f (x, y)]]
/// ```
fn split_arguments(input: TokenStream) -> Vec<VecDeque<TokenTree>> {
    let mut arguments = Vec::new();
    let mut current = VecDeque::new();
    for token in input {
        match token {
            TokenTree::Punct(ref p) if p.as_char() == ',' => {
                arguments.push(std::mem::take(&mut current));
            }
            other => current.push_back(other),
        }
    }
    if !current.is_empty() {
        arguments.push(current);
    }
    arguments
}

/// Renders tokens back to source text.
///
/// Going through a `TokenStream` keeps joint punctuation together, so `a::b` and `x == y`
/// survive, and separates words, so `a as u8` does not turn into `aasu8`.
fn source_text(tokens: &VecDeque<TokenTree>) -> String {
    tokens.iter().cloned().collect::<TokenStream>().to_string()
}

/// Renders tokens the way a person would write them, for use as a display name.
///
/// Only words (identifiers and literals) that follow each other get a space, so
/// `self.items.len()` stays `self.items.len()` and `x as u8` stays `x as u8`.
fn display_text(tokens: &VecDeque<TokenTree>) -> String {
    let mut text = String::new();
    let mut previous_was_word = false;
    for token in tokens {
        let is_word = matches!(token, TokenTree::Ident(_) | TokenTree::Literal(_));
        if is_word && previous_was_word {
            text.push(' ');
        }
        text.push_str(&token.to_string());
        previous_was_word = is_word;
    }
    text
}

/// Parses a single argument: either `name = expr` or a bare `expr`.
///
/// For a bare expression the name is the expression's own text, so `trace_logged!(x)` reports
/// `x => ...`.  A lone `=` (not `==`, `<=` etc.) after a single identifier marks the named form.
fn parse_argument(mut tokens: VecDeque<TokenTree>) -> Result<NamedArgument, TokenStream> {
    if tokens.is_empty() {
        return Err(r#"compile_error!("Expected an argument")"#.parse().unwrap());
    }
    let is_named = matches!(
        (tokens.front(), tokens.get(1)),
        (Some(TokenTree::Ident(_)), Some(TokenTree::Punct(p)))
            if p.as_char() == '=' && p.spacing() == Spacing::Alone
    );
    if is_named {
        let name = tokens.pop_front().expect("checked above").to_string();
        //eat =
        tokens.pop_front();
        if tokens.is_empty() {
            return Err(
                format!(r#"compile_error!("Expected a value after `{} =`")"#, name)
                    .parse()
                    .unwrap(),
            );
        }
        return Ok(NamedArgument {
            name,
            value: source_text(&tokens),
        });
    }
    Ok(NamedArgument {
        name: display_text(&tokens),
        value: source_text(&tokens),
    })
}

/// Parses the full argument list of a frame macro.
///
/// # Returns
/// * `Ok(Vec<NamedArgument>)` - Arguments in call order, possibly empty
/// * `Err(TokenStream)` - A `compile_error!` invocation describing the problem
pub fn parse_arguments(input: TokenStream) -> Result<Vec<NamedArgument>, TokenStream> {
    split_arguments(input)
        .into_iter()
        .map(parse_argument)
        .collect()
}

/// Generates an `&[framewise::Argument]` slice expression for the arguments.
///
/// Each value is routed through `framewise::hidden::Autoref`, which picks its `TraceValue`
/// impl if there is one and otherwise falls back to `Display`, then `Debug`.  The expansion
/// must be placed where [`RENDER_IMPORTS`] is in scope.
///
/// # Examples
/// ```ignore
/// # // ignore because: This illustrates generated code output, not actual runnable code
/// // Input: a, total = b + 1
/// // Generates:
/// // &[
/// //     framewise::Argument::new("a", &(&&&framewise::hidden::Autoref(&(a))).framewise_render() as &dyn framewise::TraceValue),
/// //     framewise::Argument::new("total", &(&&&framewise::hidden::Autoref(&(b + 1))).framewise_render() as &dyn framewise::TraceValue),
/// // ]
/// ```
pub fn arguments_source(arguments: &[NamedArgument]) -> String {
    let mut source = String::from("&[");
    for argument in arguments {
        source.push_str(&format!(
            "framewise::Argument::new({:?}, &(&&&framewise::hidden::Autoref(&({}))).framewise_render() as &dyn framewise::TraceValue),",
            argument.name, argument.value
        ));
    }
    source.push(']');
    source
}

/// Brings the rendering traits used by [`arguments_source`] into scope.
pub const RENDER_IMPORTS: &str =
    "use framewise::hidden::{RenderDebug as _, RenderDisplay as _, RenderTraceValue as _};";

