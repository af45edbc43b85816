//! Pre-pass that escapes regex metacharacters carrying no wildcard meaning.

use crate::scan::{ByteSet, is_special};

/// Escape every unescaped regex metacharacter in `input` that is not in
/// `exempt`.
///
/// Exempt bytes are the literals the active feature set gives meaning to
/// (wildcard tokens, brace/comma delimiters, group parentheses); they pass
/// through for the later passes to consume. A backslash that protects a
/// metacharacter or an exempt byte keeps its role; one that precedes a
/// word character, whitespace, or the end of the string protects nothing
/// in the wildcard grammar and is itself escaped, so the output never
/// carries a dangling backslash.
#[allow(clippy::missing_panics_doc)] // from_utf8 cannot panic on our output
pub(crate) fn escape_metachars(input: &str, exempt: ByteSet) -> String {
    let b = input.as_bytes();
    let mut out = Vec::with_capacity(b.len() + 8);
    let mut i = 0;

    while i < b.len() {
        let c = b[i];
        if c == b'\\' {
            match b.get(i + 1) {
                // Keep the protective backslash; the pair passes through.
                // `\\` lands here too, consuming even runs pairwise.
                Some(&next) if exempt.contains(next) || is_special(next) => {
                    out.push(b'\\');
                    out.push(next);
                    i += 2;
                }
                // Backslash before a word character, whitespace, or end of
                // string; escape it and reprocess what follows.
                _ => {
                    out.extend_from_slice(b"\\\\");
                    i += 1;
                }
            }
        } else if exempt.contains(c) || !is_special(c) {
            out.push(c);
            i += 1;
        } else {
            out.push(b'\\');
            out.push(c);
            i += 1;
        }
    }

    // Safety: only ASCII bytes are inserted, and non-ASCII bytes (>= 128)
    // never match our ASCII comparisons, so multi-byte UTF-8 sequences pass
    // through unchanged.
    String::from_utf8(out).expect("escaping preserves UTF-8")
}
