//! Joker and SQL wildcard token substitution.

use crate::capture::Capture;

/// Which wildcard token pair is active.
///
/// The two grammars are never applied to the same text: the orchestrator
/// picks one (jokers win when both features are enabled).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Grammar {
    /// Shell-style: `?` matches exactly one character, `*` any run.
    Jokers,
    /// SQL `LIKE`-style: `_` matches exactly one character, `%` any run.
    Sql,
}

impl Grammar {
    const fn tokens(self) -> (u8, u8) {
        match self {
            Self::Jokers => (b'?', b'*'),
            Self::Sql => (b'_', b'%'),
        }
    }
}

/// Replace unescaped wildcard tokens with the capture policy's atoms.
///
/// Runs after the metachar escaper, so every remaining unescaped token is
/// live. A maximal run of unescaped "any" tokens collapses to exactly one
/// atom; escaped pairs pass through untouched. Single pass, no re-scan of
/// produced text.
#[allow(clippy::missing_panics_doc)] // from_utf8 cannot panic on our output
pub(crate) fn substitute(input: &str, grammar: Grammar, capture: Capture) -> String {
    let (one, any) = grammar.tokens();
    let b = input.as_bytes();
    let mut out = Vec::with_capacity(b.len() + 8);
    let mut i = 0;

    while i < b.len() {
        let c = b[i];
        if c == b'\\' && i + 1 < b.len() {
            out.push(b'\\');
            out.push(b[i + 1]);
            i += 2;
        } else if c == one {
            out.extend_from_slice(capture.single_atom().as_bytes());
            i += 1;
        } else if c == any {
            while i < b.len() && b[i] == any {
                i += 1;
            }
            out.extend_from_slice(capture.any_atom().as_bytes());
        } else {
            out.push(c);
            i += 1;
        }
    }

    String::from_utf8(out).expect("substitution preserves UTF-8")
}
