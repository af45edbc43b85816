//! Errors for the name-parsing configuration surface.
//!
//! The conversion engine itself is total and never fails; the only thing
//! that can go wrong is naming an unknown feature, preset, or capture
//! setting when building a configuration from strings.

use thiserror::Error as ThisError;

/// An error from parsing a configuration name.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[non_exhaustive]
pub enum Error {
    /// A feature name outside the closed feature set.
    #[error("unknown feature '{0}', expected: jokers, sql, commas, brackets, groups")]
    UnknownFeature(String),

    /// A preset name outside the closed preset set.
    #[error("unknown preset '{0}', expected: unix, win32, jokers, sql")]
    UnknownPreset(String),

    /// A capture setting outside the closed capture set.
    #[error("unknown capture setting '{0}', expected: single, any, lazy, brackets")]
    UnknownCapture(String),
}
