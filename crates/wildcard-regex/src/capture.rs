//! Capture policy: which constructs produce capturing groups.

use core::str::FromStr;

use crate::error::Error;

/// How an "any" wildcard token (`*` or `%`) translates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Any {
    /// Plain `.*`, no capture.
    #[default]
    Off,
    /// Capturing and greedy: `(.*)`.
    Greedy,
    /// Capturing and non-greedy: `(.*?)`.
    Lazy,
}

/// Per-conversion capture policy.
///
/// Each setting independently resolves to a fixed replacement fragment
/// before any scanning happens; the passes only ever splice these
/// pre-resolved literals.
///
/// The default policy captures nothing: `?`/`_` become `.`, `*`/`%` become
/// `.*`, and alternations use `(?:...)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capture {
    /// Capture an "exactly one" token: `(.)` instead of `.`.
    pub single: bool,
    /// Capture an "any" token, greedily or lazily.
    pub any: Any,
    /// Capture alternation groups: `(...)` instead of `(?:...)`.
    pub brackets: bool,
}

impl Capture {
    /// Replacement for an unescaped `?` or `_`.
    pub(crate) const fn single_atom(self) -> &'static str {
        if self.single { "(.)" } else { "." }
    }

    /// Replacement for a run of unescaped `*` or `%`.
    pub(crate) const fn any_atom(self) -> &'static str {
        match self.any {
            Any::Off => ".*",
            Any::Greedy => "(.*)",
            Any::Lazy => "(.*?)",
        }
    }

    /// Opening delimiter for an alternation group.
    pub(crate) const fn open_group(self) -> &'static str {
        if self.brackets { "(" } else { "(?:" }
    }
}

impl FromStr for Capture {
    type Err = Error;

    /// Parse a comma-separated list of capture settings, e.g.
    /// `"single,any,brackets"` or `"lazy"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut capture = Self::default();
        for name in s.split(',').filter(|name| !name.is_empty()) {
            match name {
                "single" => capture.single = true,
                "any" => capture.any = Any::Greedy,
                "lazy" => capture.any = Any::Lazy,
                "brackets" => capture.brackets = true,
                _ => return Err(Error::UnknownCapture(name.into())),
            }
        }
        Ok(capture)
    }
}
