//! Rowfmt CLI Application
//!
//! Command-line interface for the rowfmt fixed-width row formatter.

mod args;
mod cli;

use anyhow::Result;
use args::Args;
use clap::Parser;
use cli::Cli;
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    info!("Rowfmt started");

    Cli::new(args).run()
}
