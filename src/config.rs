//! Config file loading and settings resolution.
//!
//! Settings are layered: built-in defaults, then `config.toml`, then
//! environment variables and CLI flags (both delivered through [`Args`]).

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use serde::Deserialize;

use crate::cli::args::Args;
use crate::constants;

/// Contents of `config.toml`.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub server: ServerSection,
}

/// `[server]` table.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: constants::DEFAULT_HOST.to_string(),
            port: constants::DEFAULT_PORT,
            verbose: false,
        }
    }
}

impl Settings {
    /// Resolves settings from parsed arguments, reading the config file they point to.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly requested config file is missing, or
    /// if any config file present cannot be read or parsed.
    pub fn resolve(args: &Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => load_file(path)?,
            None => match default_config_path() {
                Some(path) if path.is_file() => load_file(&path)?,
                _ => FileConfig::default(),
            },
        };
        Ok(Self::merge(args, file))
    }

    /// Applies `args` over `file` over the defaults.
    #[must_use]
    pub fn merge(args: &Args, file: FileConfig) -> Self {
        let defaults = Self::default();
        Self {
            host: args
                .url
                .clone()
                .or(file.server.host)
                .unwrap_or(defaults.host),
            port: args.port.or(file.server.port).unwrap_or(defaults.port),
            verbose: args.verbose,
        }
    }
}

/// Default config location: `<config_dir>/dbclean/config.toml`.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| {
        dir.join(constants::CONFIG_DIR_NAME)
            .join(constants::CONFIG_FILE_NAME)
    })
}

/// Reads and parses a config file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid config TOML.
pub fn load_file(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path).wrap_err_with(|| {
        format!("{}: {}", constants::ERR_CONFIG_READ_FAILED, path.display())
    })?;
    parse(&content).wrap_err_with(|| {
        format!("{}: {}", constants::ERR_CONFIG_PARSE_FAILED, path.display())
    })
}

fn parse(content: &str) -> Result<FileConfig> {
    Ok(toml::from_str(content)?)
}
