use clap::Parser;
use color_eyre::Result;

use dbclean::cli::{self, args::Args};

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    cli::run(&args)
}
