//! bikestats library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use cli::session::Session;
use config::Config;
use errors::AppResult;

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // parse CLI
    let cli = Cli::parse();

    // load config once per process
    let mut cfg = Config::load();

    // apply data directory override from the command line
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    Session::new(&cfg).run()
}
