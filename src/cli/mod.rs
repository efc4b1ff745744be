//! Command-line interface module.
//!
//! Provides argument parsing and the top-level run.

pub mod args;

use color_eyre::Result;

use crate::api::client::RestClient;
use crate::cleaner::{Cleaner, Summary};
use crate::config::Settings;
use crate::constants;
use crate::logging;

use self::args::Args;

/// Resolves settings, empties the API, and prints the completion message.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded, logging cannot be set
/// up, or any API request fails.
pub fn run(args: &Args) -> Result<()> {
    let settings = Settings::resolve(args)?;
    logging::init(settings.verbose)?;

    let summary = clean(&settings)?;
    tracing::info!(
        users = summary.users.deleted,
        tasks = summary.tasks.deleted,
        "done"
    );
    println!("{}", completion_message(&settings));
    Ok(())
}

/// Opens one connection to the API, purges users then tasks, and closes it.
///
/// # Errors
///
/// Returns an error on the first request that fails.
pub fn clean(settings: &Settings) -> Result<Summary> {
    let client = RestClient::new(&settings.host, settings.port)?;
    tracing::info!(base = %client.base(), "connected");

    let mut cleaner = Cleaner::new(client);
    let summary = cleaner.run()?;
    cleaner.into_inner().close();

    Ok(summary)
}

#[must_use]
pub fn completion_message(settings: &Settings) -> String {
    format!(
        "{}{}:{}",
        constants::CLI_MSG_DONE,
        settings.host,
        settings.port
    )
}
