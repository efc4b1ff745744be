//! Application-wide constants and configuration values.
//!
//! This module defines the static values used throughout dbclean,
//! including connection defaults, API paths, file names, and CLI messages.

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Connection Defaults ===

/// Host the API is reached on when none is configured.
pub const DEFAULT_HOST: &str = "localhost";
/// Port the API listens on when none is configured.
pub const DEFAULT_PORT: u16 = 4000;
/// Idle connections kept per host. The whole run shares one.
pub const MAX_IDLE_PER_HOST: usize = 1;

// === Environment Variables ===

pub const ENV_URL: &str = "DBCLEAN_URL";
pub const ENV_PORT: &str = "DBCLEAN_PORT";
pub const ENV_CONFIG: &str = "DBCLEAN_CONFIG";

// === Path Configuration ===

/// Name of the config subdirectory under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "dbclean";
/// Name of the config file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// === API ===

/// Collection path for user records.
pub const USERS_PATH: &str = "/api/users";
/// Collection path for task records.
pub const TASKS_PATH: &str = "/api/tasks";
/// Query parameter carrying the JSON projection.
pub const FILTER_PARAM: &str = "filter";
pub const MIME_JSON: &str = "application/json";

// === Logging ===

/// Default filter directive when `RUST_LOG` is unset.
pub const LOG_FILTER_DEFAULT: &str = "dbclean=info";
/// Filter directive used with `--verbose`.
pub const LOG_FILTER_VERBOSE: &str = "dbclean=debug";

// === Messages: CLI Output ===

pub const CLI_MSG_DONE: &str = "All users and tasks removed at ";

// === Error Messages ===

pub const ERR_HTTP_CLIENT_BUILD_FAILED: &str = "Failed to build HTTP client";
pub const ERR_INVALID_BASE_URL: &str = "Invalid API address";
pub const ERR_LIST_REQUEST_FAILED: &str = "List request failed";
pub const ERR_LIST_BODY_INVALID: &str = "List response is not a valid collection body";
pub const ERR_DELETE_REQUEST_FAILED: &str = "Delete request failed";
pub const ERR_CONFIG_READ_FAILED: &str = "Failed to read config file";
pub const ERR_CONFIG_PARSE_FAILED: &str = "Failed to parse config file";
pub const ERR_LOGGING_INIT_FAILED: &str = "Failed to initialize logging";
