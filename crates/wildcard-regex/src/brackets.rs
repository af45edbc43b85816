//! Balanced `{...}` extraction and conversion to regex alternations.

use crate::capture::Capture;

/// A balanced brace span located inside a string.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Span<'a> {
    /// Text before the opening `{`, emitted by the caller.
    pub prefix: &'a str,
    /// Text between the braces, delimiters stripped.
    pub content: &'a str,
    /// Text after the closing `}`, fed to the next extraction.
    pub rest: &'a str,
}

/// Find the first outermost balanced `{...}` span in `s`.
///
/// The opening brace is the first unescaped `{`; the close is found by a
/// depth-counting scan over unescaped braces. Returns `None` when there is
/// no unescaped `{`, or when the scan reaches the end of the string before
/// depth returns to zero (unbalanced input; the caller falls back to
/// literal-escaping).
pub(crate) fn next_span(s: &str) -> Option<Span<'_>> {
    let b = s.as_bytes();
    let mut i = 0;
    let open = loop {
        if i >= b.len() {
            return None;
        }
        match b[i] {
            b'\\' => i += 2,
            b'{' => break i,
            _ => i += 1,
        }
    };

    let mut depth = 1_u32;
    i = open + 1;
    while i < b.len() {
        match b[i] {
            b'\\' => i += 2,
            b'{' => {
                depth += 1;
                i += 1;
            }
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(Span {
                        prefix: &s[..open],
                        content: &s[open + 1..i],
                        rest: &s[i + 1..],
                    });
                }
                i += 1;
            }
            _ => i += 1,
        }
    }
    None
}

/// Convert brace span content into one regex alternation group.
///
/// Interior unescaped commas become `|`; nested spans become nested
/// groups. The traversal keeps pending remainders on an explicit stack
/// instead of recursing, so arbitrarily deep nesting costs O(depth) heap
/// and bounded call stack.
///
/// The content of a balanced span is itself brace-balanced (a closer that
/// would unbalance it would have ended the span earlier), so every nested
/// extraction here succeeds until the braces are used up.
pub(crate) fn convert_bracket(content: &str, capture: Capture) -> String {
    let mut out = String::with_capacity(content.len() + 8);
    let mut pending = Vec::new();
    out.push_str(capture.open_group());
    let mut cur = content;
    loop {
        match next_span(cur) {
            Some(span) => {
                out.push_str(&convert_commas(span.prefix));
                out.push_str(capture.open_group());
                pending.push(span.rest);
                cur = span.content;
            }
            None => {
                out.push_str(&convert_commas(cur));
                out.push(')');
                match pending.pop() {
                    Some(rest) => cur = rest,
                    None => break,
                }
            }
        }
    }
    out
}

/// Convert every top-level balanced span in `s`, escaping what remains.
///
/// Literal prefixes between spans are emitted unchanged; after the last
/// span, a final parity-aware pass escapes every `{`, `}`, and `,` that no
/// balanced match consumed. Unbalanced nesting therefore degrades to
/// literal-escaped text instead of failing.
pub(crate) fn convert_bracketed(s: &str, capture: Capture) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    let mut cur = s;
    while let Some(span) = next_span(cur) {
        out.push_str(span.prefix);
        out.push_str(&convert_bracket(span.content, capture));
        cur = span.rest;
    }
    out.push_str(cur);
    escape_strays(&out)
}

/// Rewrite unescaped commas to regex alternation bars.
#[allow(clippy::missing_panics_doc)] // from_utf8 cannot panic on our output
pub(crate) fn convert_commas(s: &str) -> String {
    let b = s.as_bytes();
    let mut out = Vec::with_capacity(b.len());
    let mut i = 0;
    while i < b.len() {
        match b[i] {
            b'\\' => {
                out.push(b'\\');
                if let Some(&next) = b.get(i + 1) {
                    out.push(next);
                }
                i += 2;
            }
            b',' => {
                out.push(b'|');
                i += 1;
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
    String::from_utf8(out).expect("comma conversion preserves UTF-8")
}

/// Escape the unescaped `{`, `}`, and `,` left over after span matching.
#[allow(clippy::missing_panics_doc)] // from_utf8 cannot panic on our output
fn escape_strays(s: &str) -> String {
    let b = s.as_bytes();
    let mut out = Vec::with_capacity(b.len() + 4);
    let mut i = 0;
    while i < b.len() {
        match b[i] {
            b'\\' => {
                out.push(b'\\');
                if let Some(&next) = b.get(i + 1) {
                    out.push(next);
                }
                i += 2;
            }
            c @ (b'{' | b'}' | b',') => {
                out.push(b'\\');
                out.push(c);
                i += 1;
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
    String::from_utf8(out).expect("stray escaping preserves UTF-8")
}
