//! Conversion configuration: features, presets, and the builder.

use core::str::FromStr;

use crate::capture::Capture;
use crate::error::Error;
use crate::scan::ByteSet;

/// A wildcard grammar feature.
///
/// Features select which literal characters carry wildcard meaning; every
/// other regex metacharacter is escaped. The set is closed: unknown names
/// fail in [`FromStr`] and never reach the conversion engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Feature {
    /// Shell-style `?` and `*` tokens.
    Jokers,
    /// SQL `LIKE`-style `_` and `%` tokens.
    Sql,
    /// Top-level comma lists, wrapped into one alternation.
    Commas,
    /// Balanced `{...}` alternation blocks (supersedes `Commas`).
    Brackets,
    /// Pass `(` and `)` through so wildcard-level grouping survives.
    Groups,
}

impl Feature {
    /// The literal characters this feature gives meaning to.
    const fn literals(self) -> &'static [u8] {
        match self {
            Self::Jokers => b"?*",
            Self::Sql => b"_%",
            Self::Commas => b",",
            Self::Brackets => b"{},",
            Self::Groups => b"()",
        }
    }
}

impl FromStr for Feature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jokers" => Ok(Self::Jokers),
            "sql" => Ok(Self::Sql),
            "commas" => Ok(Self::Commas),
            "brackets" => Ok(Self::Brackets),
            "groups" => Ok(Self::Groups),
            _ => Err(Error::UnknownFeature(s.into())),
        }
    }
}

/// A named feature bundle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Preset {
    /// Shell wildcards with brace alternation: jokers + brackets.
    Unix,
    /// Shell wildcards with comma lists: jokers + commas.
    Win32,
    /// Jokers only.
    Jokers,
    /// SQL tokens only.
    Sql,
}

impl Preset {
    /// The features this preset enables.
    pub fn features(self) -> &'static [Feature] {
        match self {
            Self::Unix => &[Feature::Jokers, Feature::Brackets],
            Self::Win32 => &[Feature::Jokers, Feature::Commas],
            Self::Jokers => &[Feature::Jokers],
            Self::Sql => &[Feature::Sql],
        }
    }

    /// The preset conventionally used on the given operating system.
    ///
    /// The win32 family (`windows`, `dos`, `os2`, `cygwin`) gets comma
    /// lists; everything else gets brace alternation.
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" | "dos" | "os2" | "cygwin" => Self::Win32,
            _ => Self::Unix,
        }
    }

    /// The preset for the operating system this program runs on.
    pub fn host() -> Self {
        Self::from_os(std::env::consts::OS)
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unix" => Ok(Self::Unix),
            "win32" => Ok(Self::Win32),
            "jokers" => Ok(Self::Jokers),
            "sql" => Ok(Self::Sql),
            _ => Err(Error::UnknownPreset(s.into())),
        }
    }
}

/// An immutable conversion configuration.
///
/// Built once via [`ConfigBuilder`] (or the [`Config::preset`] shorthand)
/// and then only read: [`Config::convert`] never mutates it, so one value
/// can serve any number of conversions, concurrently included.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub(crate) jokers: bool,
    pub(crate) sql: bool,
    pub(crate) commas: bool,
    pub(crate) brackets: bool,
    pub(crate) groups: bool,
    pub(crate) capture: Capture,
    /// Union of the enabled features' literals, exempt from escaping.
    pub(crate) exempt: ByteSet,
}

impl Config {
    /// Start building a configuration.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// A configuration with the preset's features and no captures.
    pub fn preset(preset: Preset) -> Self {
        let mut builder = Self::builder();
        builder.preset(preset);
        builder.build()
    }

    /// The capture policy in effect.
    pub fn capture(&self) -> Capture {
        self.capture
    }
}

impl Default for Config {
    /// No features: every metacharacter is escaped, nothing substituted.
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for [`Config`].
#[derive(Clone, Debug, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ConfigBuilder {
    jokers: bool,
    sql: bool,
    commas: bool,
    brackets: bool,
    groups: bool,
    capture: Capture,
}

impl ConfigBuilder {
    /// Enable a single feature.
    pub fn feature(&mut self, feature: Feature) -> &mut Self {
        match feature {
            Feature::Jokers => self.jokers = true,
            Feature::Sql => self.sql = true,
            Feature::Commas => self.commas = true,
            Feature::Brackets => self.brackets = true,
            Feature::Groups => self.groups = true,
        }
        self
    }

    /// Enable every feature in `features`.
    pub fn features<I>(&mut self, features: I) -> &mut Self
    where
        I: IntoIterator<Item = Feature>,
    {
        for feature in features {
            self.feature(feature);
        }
        self
    }

    /// Replace the enabled features with a preset's bundle.
    pub fn preset(&mut self, preset: Preset) -> &mut Self {
        self.jokers = false;
        self.sql = false;
        self.commas = false;
        self.brackets = false;
        self.groups = false;
        self.features(preset.features().iter().copied())
    }

    /// Set the capture policy.
    pub fn capture(&mut self, capture: Capture) -> &mut Self {
        self.capture = capture;
        self
    }

    /// Build the configuration, deriving the escape-exemption set.
    pub fn build(&self) -> Config {
        let mut exempt = ByteSet::EMPTY;
        let enabled = [
            (self.jokers, Feature::Jokers),
            (self.sql, Feature::Sql),
            (self.commas, Feature::Commas),
            (self.brackets, Feature::Brackets),
            (self.groups, Feature::Groups),
        ];
        for (_, feature) in enabled.iter().filter(|(on, _)| *on) {
            for &byte in feature.literals() {
                exempt = exempt.with(byte);
            }
        }
        Config {
            jokers: self.jokers,
            sql: self.sql,
            commas: self.commas,
            brackets: self.brackets,
            groups: self.groups,
            capture: self.capture,
            exempt,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn feature_from_str() {
        assert_eq!("jokers".parse::<Feature>().unwrap(), Feature::Jokers);
        assert_eq!("brackets".parse::<Feature>().unwrap(), Feature::Brackets);
        assert_eq!(
            "Jokers".parse::<Feature>().unwrap_err(),
            Error::UnknownFeature("Jokers".into())
        );
    }

    #[test]
    fn feature_display_round_trips() {
        for feature in [
            Feature::Jokers,
            Feature::Sql,
            Feature::Commas,
            Feature::Brackets,
            Feature::Groups,
        ] {
            assert_eq!(feature.to_string().parse::<Feature>().unwrap(), feature);
        }
    }

    #[test]
    fn preset_bundles() {
        assert_eq!(
            Preset::Unix.features(),
            &[Feature::Jokers, Feature::Brackets]
        );
        assert_eq!(Preset::Win32.features(), &[Feature::Jokers, Feature::Commas]);
        assert_eq!(Preset::Sql.features(), &[Feature::Sql]);
    }

    #[test]
    fn preset_from_os() {
        assert_eq!(Preset::from_os("windows"), Preset::Win32);
        assert_eq!(Preset::from_os("dos"), Preset::Win32);
        assert_eq!(Preset::from_os("linux"), Preset::Unix);
        assert_eq!(Preset::from_os("macos"), Preset::Unix);
        assert_eq!(Preset::from_os(""), Preset::Unix);
    }

    #[test]
    fn builder_derives_exemptions() {
        let config = Config::preset(Preset::Unix);
        assert!(config.exempt.contains(b'?'));
        assert!(config.exempt.contains(b'*'));
        assert!(config.exempt.contains(b'{'));
        assert!(config.exempt.contains(b','));
        assert!(!config.exempt.contains(b'%'));
        assert!(!config.exempt.contains(b'('));
    }

    #[test]
    fn preset_replaces_features() {
        let mut builder = Config::builder();
        builder.feature(Feature::Sql).preset(Preset::Unix);
        let config = builder.build();
        assert!(config.jokers);
        assert!(!config.sql);
        assert!(!config.exempt.contains(b'%'));
    }

    #[test]
    fn default_config_exempts_nothing() {
        let config = Config::default();
        assert_eq!(config.exempt, ByteSet::EMPTY);
        assert!(!config.jokers);
    }

    #[test]
    fn groups_feature_exempts_parens() {
        let mut builder = Config::builder();
        builder.feature(Feature::Groups);
        let config = builder.build();
        assert!(config.exempt.contains(b'('));
        assert!(config.exempt.contains(b')'));
    }
}
