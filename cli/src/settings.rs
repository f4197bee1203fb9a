//! Resolving a run's settings from flags, environment and the config file.
//!
//! Precedence is flag, then environment (both through clap), then the
//! persisted config file, then built-in defaults.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use scouter_core::submit::DEFAULT_API_BASE;
use scouter_types::config::DEFAULT_LOOKBACK;
use scouter_types::{
    ConfigError, Expansion, ScoutConfig, ShareLink, parse_expansion_list, parse_go_duration,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const APP_NAME: &str = "scouter";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(
        "Turtle session password was not provided. Please provide the share URL as an argument or set TURTLE_PASSWORD"
    )]
    MissingPassword,

    #[error(
        "Turtle session was not provided. Please provide the share URL as an argument or set TURTLE_SESSION"
    )]
    MissingSession,

    #[error("Could not detect default log directory. Please set IINACTPATH or pass --logdir")]
    NoLogDirectory,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to load config file: {0}")]
    ConfigFile(#[from] confy::ConfyError),
}

#[derive(Debug, Parser)]
#[command(version, about = "Scout hunt marks from the game log and share them with Turtle")]
pub struct Cli {
    /// Which expansions to scout, e.g. DT,EW (default: all)
    #[arg(long)]
    pub expansions: Option<String>,

    /// Share URL from Turtle, e.g. https://scout.wobbuffet.net/scout/foo/bar
    #[arg(long = "turtle", env = "TURTLE_URL", hide_env_values = true)]
    pub share_url: Option<String>,

    /// How long to look back in the latest log file, e.g. 4h or 1h30m
    #[arg(long, value_parser = parse_go_duration)]
    pub lookback: Option<Duration>,

    /// Directory where the log files are located
    #[arg(long, env = "IINACTPATH")]
    pub logdir: Option<PathBuf>,

    /// Turtle session id, ignored when a share URL is given
    #[arg(long, env = "TURTLE_SESSION")]
    pub session: Option<String>,

    /// Turtle collaborator password, ignored when a share URL is given
    #[arg(long, env = "TURTLE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Turtle API base URL
    #[arg(long, env = "TURTLE_API")]
    pub api_base: Option<String>,

    /// Config file to use instead of the per-user default
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Persisted defaults, stored by confy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub log_directory: Option<PathBuf>,
    pub share_url: Option<String>,
    #[serde(default)]
    pub expansions: Vec<Expansion>,
    /// Go duration string
    pub lookback: Option<String>,
    pub api_base: Option<String>,
}

impl FileConfig {
    pub fn load(path: Option<&PathBuf>) -> Result<Self, SettingsError> {
        let config = match path {
            Some(path) => confy::load_path(path)?,
            None => confy::load(APP_NAME, None)?,
        };
        Ok(config)
    }
}

/// Everything a run needs.
#[derive(Debug, Clone)]
pub struct Settings {
    pub scout: ScoutConfig,
    pub log_directory: PathBuf,
    pub api_base: String,
}

impl Settings {
    /// Merge flags and file config. `detect_log_dir` is only consulted when
    /// neither names a log directory.
    pub fn resolve(
        cli: Cli,
        file: FileConfig,
        detect_log_dir: impl FnOnce() -> Option<PathBuf>,
    ) -> Result<Self, SettingsError> {
        let link = match cli.share_url.as_deref().or(file.share_url.as_deref()) {
            Some(url) if !url.trim().is_empty() => Some(ShareLink::parse(url)?),
            _ => None,
        };
        let (session, password) = match link {
            Some(link) => (Some(link.session), Some(link.password)),
            None => (cli.session, cli.password),
        };
        let password = password
            .filter(|p| !p.is_empty())
            .ok_or(SettingsError::MissingPassword)?;
        let session = session
            .filter(|s| !s.is_empty())
            .ok_or(SettingsError::MissingSession)?;

        let expansions = match cli.expansions {
            Some(list) => parse_expansion_list(&list)?,
            None => file.expansions,
        };

        let lookback = match (cli.lookback, file.lookback) {
            (Some(lookback), _) => lookback,
            (None, Some(text)) => parse_go_duration(&text)?,
            (None, None) => DEFAULT_LOOKBACK,
        };

        let log_directory = cli
            .logdir
            .or(file.log_directory)
            .or_else(detect_log_dir)
            .ok_or(SettingsError::NoLogDirectory)?;

        let api_base = cli
            .api_base
            .or(file.api_base)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(Self {
            scout: ScoutConfig::new(session, password)
                .with_expansions(expansions)
                .with_lookback(lookback),
            log_directory,
            api_base,
        })
    }
}
