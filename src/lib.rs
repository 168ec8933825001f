//! rBuoniPasto library root.
//! Exposes the CLI parser, the high-level run() function, and the internal
//! modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod pdf;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use config::Config;
use errors::AppResult;

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config UNA sola volta, con eventuale override da riga di comando
    let cfg = match &cli.config {
        Some(path) => Config::load_from(&utils::path::expand_tilde(path))?,
        None => Config::load(),
    };

    // 3️⃣ esegui la pipeline del report
    core::report::handle(&cli.file, &cfg)
}
