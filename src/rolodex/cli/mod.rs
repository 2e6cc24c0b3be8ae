//! # CLI Layer
//!
//! The console client for rolodex, and the only place that knows about the
//! terminal: it parses process arguments, sets up logging, reads the prompt
//! input, and prints results.
//!
//! ## Structure
//!
//! - `setup`: clap definition of the process arguments
//! - `input`: parsing of prompt lines into [`input::Command`] and
//!   [`input::RecordCommand`]
//! - `repl`: the prompt loop and one handler per command
//! - `print`: colored rendering of `CmdResult` data

mod input;
mod print;
mod repl;
mod setup;

use clap::Parser;
use directories::ProjectDirs;
use rolodex::api::RolodexApi;
use rolodex::config::RolodexConfig;
use rolodex::error::{Result, RolodexError};
use rolodex::store::fs::FileStore;
use setup::Cli;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = resolve_data_dir(&cli)?;
    let mut config = RolodexConfig::load(&data_dir)?;
    if let Some(size) = cli.page_size {
        config.set_page_size(size);
    }

    let store = FileStore::new(config.data_path(&data_dir));
    debug!(path = %store.path().display(), "using backup file");
    let api = RolodexApi::new(store);

    let stdin = io::stdin();
    repl::Repl::new(api, config.page_size()).run(stdin.lock())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    ProjectDirs::from("com", "rolodex", "rolodex")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RolodexError::Store("Could not determine data directory".to_string()))
}
