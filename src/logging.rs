//! Logging setup.
//!
//! Logs go to stderr so stdout only carries the completion message.
//! `RUST_LOG` replaces the default filter; `--verbose` raises dbclean to debug
//! on top of whichever is in effect.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::constants;

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if `RUST_LOG` is malformed or a subscriber is already set.
pub fn init(verbose: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter(verbose)?)
        .try_init()
        .wrap_err(constants::ERR_LOGGING_INIT_FAILED)
}

fn filter(verbose: bool) -> Result<EnvFilter> {
    build_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(), verbose)
}

/// `RUST_LOG` directives if given, else the default; `--verbose` is added on top of either.
fn build_filter(env: Option<&str>, verbose: bool) -> Result<EnvFilter> {
    let filter = match env {
        Some(directives) => EnvFilter::try_new(directives),
        None => EnvFilter::try_new(constants::LOG_FILTER_DEFAULT),
    }
    .wrap_err(constants::ERR_LOGGING_INIT_FAILED)?;

    if !verbose {
        return Ok(filter);
    }
    let directive = constants::LOG_FILTER_VERBOSE
        .parse::<Directive>()
        .wrap_err(constants::ERR_LOGGING_INIT_FAILED)?;
    Ok(filter.add_directive(directive))
}
