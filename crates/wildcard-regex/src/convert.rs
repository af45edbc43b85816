//! The conversion entry point, sequencing the passes.

use crate::brackets;
use crate::config::Config;
use crate::escape;
use crate::scan;
use crate::tokens::{self, Grammar};

impl Config {
    /// Convert a wildcard expression into a regex source string.
    ///
    /// Absence propagates: `None` in, `None` out. See [`Config::convert_str`].
    pub fn convert(&self, wildcard: Option<&str>) -> Option<String> {
        wildcard.map(|wc| self.convert_str(wc))
    }

    /// Convert a wildcard expression into a regex source string.
    ///
    /// This is a total function: any input, however malformed, yields a
    /// valid regex source string. Metacharacters without wildcard meaning
    /// are escaped, active wildcard tokens become the capture policy's
    /// atoms, and balanced `{...}` blocks (or top-level comma lists)
    /// become alternation groups. Unbalanced brace structure degrades to
    /// literal-escaped text.
    pub fn convert_str(&self, wildcard: &str) -> String {
        let mut s = escape::escape_metachars(wildcard, self.exempt);
        if self.jokers {
            s = tokens::substitute(&s, Grammar::Jokers, self.capture);
        } else if self.sql {
            s = tokens::substitute(&s, Grammar::Sql, self.capture);
        }
        if self.brackets {
            s = brackets::convert_bracketed(&s, self.capture);
        } else if self.commas && scan::has_unescaped(&s, b',') {
            let mut wrapped = String::with_capacity(s.len() + 4);
            wrapped.push_str(self.capture.open_group());
            wrapped.push_str(&brackets::convert_commas(&s));
            wrapped.push(')');
            s = wrapped;
        }
        tracing::debug!(wildcard, regex = %s, "converted wildcard");
        s
    }
}

/// Convert an optional wildcard under `config`.
///
/// Free-function form of [`Config::convert`].
pub fn convert(wildcard: Option<&str>, config: &Config) -> Option<String> {
    config.convert(wildcard)
}
