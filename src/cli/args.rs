//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

use crate::constants;

/// dbclean - Empty a task-manager API of all users and tasks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Host of the API server (default: localhost)
    #[arg(short = 'u', long = "url", env = constants::ENV_URL, value_name = "HOST")]
    pub url: Option<String>,

    /// Port of the API server (default: 4000)
    #[arg(short, long, env = constants::ENV_PORT)]
    pub port: Option<u16>,

    /// Path to a config.toml overriding the default location
    #[arg(short, long, env = constants::ENV_CONFIG, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log every request (applied on top of RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}
