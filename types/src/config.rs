//! Scouting session configuration.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default "look back N hours into the current log" window.
pub const DEFAULT_LOOKBACK: Duration = Duration::from_secs(4 * 3600);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid duration {0:?} (expected Go syntax such as 4h, 90m or 1h30m)")]
    InvalidDuration(String),

    #[error("unknown expansion code {0:?} (expected one of HW, ShB, EW, DT)")]
    UnknownExpansion(String),

    #[error("share URL {0:?} does not end in /<session>/<password>")]
    InvalidShareUrl(String),
}

/// Content expansion that groups hunt marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Expansion {
    #[serde(rename = "HW")]
    Heavensward,
    #[serde(rename = "ShB")]
    Shadowbringers,
    #[serde(rename = "EW")]
    Endwalker,
    #[serde(rename = "DT")]
    Dawntrail,
}

impl Expansion {
    pub const ALL: [Expansion; 4] = [
        Expansion::Heavensward,
        Expansion::Shadowbringers,
        Expansion::Endwalker,
        Expansion::Dawntrail,
    ];

    /// Short code used on the command line and in config files.
    pub fn code(self) -> &'static str {
        match self {
            Expansion::Heavensward => "HW",
            Expansion::Shadowbringers => "ShB",
            Expansion::Endwalker => "EW",
            Expansion::Dawntrail => "DT",
        }
    }
}

impl fmt::Display for Expansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Expansion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Expansion::ALL
            .into_iter()
            .find(|e| e.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| ConfigError::UnknownExpansion(code.to_string()))
    }
}

/// Parse a comma separated expansion list such as `"DT,EW"`.
///
/// Blank entries are skipped, so `""` yields an empty list, which the
/// pipeline reads as "every known expansion".
pub fn parse_expansion_list(s: &str) -> Result<Vec<Expansion>, ConfigError> {
    let mut expansions = Vec::new();
    for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let expansion: Expansion = part.parse()?;
        if !expansions.contains(&expansion) {
            expansions.push(expansion);
        }
    }
    Ok(expansions)
}

/// Session credentials taken from a Turtle share link,
/// e.g. `https://scout.wobbuffet.net/scout/<session>/<password>`.
#[derive(Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub session: String,
    pub password: String,
}

impl ShareLink {
    pub fn parse(url: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidShareUrl(url.to_string());
        let mut segments = url.trim().trim_end_matches('/').rsplit('/');
        let password = segments.next().filter(|s| !s.is_empty()).ok_or_else(invalid)?;
        let session = segments.next().filter(|s| !s.is_empty()).ok_or_else(invalid)?;
        Ok(Self {
            session: session.to_string(),
            password: password.to_string(),
        })
    }
}

impl fmt::Debug for ShareLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShareLink")
            .field("session", &self.session)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Fully resolved settings for one scouting run.
#[derive(Clone, Serialize, Deserialize)]
pub struct ScoutConfig {
    pub session: String,
    pub password: String,
    /// Enabled expansions; empty means all of them
    #[serde(default)]
    pub expansions: Vec<Expansion>,
    #[serde(with = "crate::duration::serde_go", default = "default_lookback")]
    pub lookback: Duration,
}

fn default_lookback() -> Duration {
    DEFAULT_LOOKBACK
}

impl ScoutConfig {
    pub fn new(session: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            session: session.into(),
            password: password.into(),
            expansions: Vec::new(),
            lookback: DEFAULT_LOOKBACK,
        }
    }

    pub fn with_expansions(mut self, expansions: Vec<Expansion>) -> Self {
        self.expansions = expansions;
        self
    }

    pub fn with_lookback(mut self, lookback: Duration) -> Self {
        self.lookback = lookback;
        self
    }

    /// Expansions to report, with the empty filter expanded to all of them.
    pub fn enabled_expansions(&self) -> Vec<Expansion> {
        if self.expansions.is_empty() {
            Expansion::ALL.to_vec()
        } else {
            self.expansions.clone()
        }
    }
}

impl fmt::Debug for ScoutConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoutConfig")
            .field("session", &self.session)
            .field("password", &"<redacted>")
            .field("expansions", &self.expansions)
            .field("lookback", &crate::format_go_duration(self.lookback))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expansion_codes_are_case_insensitive() {
        assert_eq!("dt".parse::<Expansion>().unwrap(), Expansion::Dawntrail);
        assert_eq!(" EW ".parse::<Expansion>().unwrap(), Expansion::Endwalker);
        assert_eq!("shb".parse::<Expansion>().unwrap(), Expansion::Shadowbringers);
        assert_eq!("HW".parse::<Expansion>().unwrap(), Expansion::Heavensward);
        assert_eq!(
            "ARR".parse::<Expansion>(),
            Err(ConfigError::UnknownExpansion("ARR".to_string()))
        );
    }

    #[test]
    fn test_parse_expansion_list() {
        assert!(parse_expansion_list("").unwrap().is_empty());
        assert_eq!(
            parse_expansion_list("DT,EW,DT").unwrap(),
            vec![Expansion::Dawntrail, Expansion::Endwalker]
        );
        assert!(parse_expansion_list("DT,XX").is_err());
    }

    #[test]
    fn test_share_link_takes_last_two_segments() {
        let link = ShareLink::parse("https://scout.wobbuffet.net/scout/foo/bar").unwrap();
        assert_eq!(link.session, "foo");
        assert_eq!(link.password, "bar");

        let trailing = ShareLink::parse("https://scout.wobbuffet.net/scout/foo/bar/").unwrap();
        assert_eq!(trailing, link);

        assert!(ShareLink::parse("bar").is_err());
        assert!(ShareLink::parse("").is_err());
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = ScoutConfig::new("session", "hunter2");
        let printed = format!("{config:?}");
        assert!(printed.contains("session"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn test_empty_filter_enables_everything() {
        let config = ScoutConfig::new("s", "p");
        assert_eq!(config.enabled_expansions(), Expansion::ALL.to_vec());

        let config = config.with_expansions(vec![Expansion::Dawntrail]);
        assert_eq!(config.enabled_expansions(), vec![Expansion::Dawntrail]);
    }

    #[test]
    fn test_config_toml_roundtrip_uses_go_durations() {
        let config = ScoutConfig::new("s", "p")
            .with_expansions(vec![Expansion::Dawntrail])
            .with_lookback(Duration::from_secs(90 * 60));
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("lookback = \"1h30m0s\""));
        assert!(text.contains("\"DT\""));

        let parsed: ScoutConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.lookback, config.lookback);
        assert_eq!(parsed.expansions, config.expansions);
    }
}
