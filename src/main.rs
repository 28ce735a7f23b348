//! # cosmos-readings - connectivity check for a MongoDB-compatible store
//!
//! Inserts one sensor reading into `iotdb.readings` and prints the first
//! documents of the collection.
//!
//! ## Environment Variables
//!
//! - `COSMOS_MONGO_URI`: MongoDB connection string
//! - `COSMOS_MONGO_USERNAME`: account name
//! - `COSMOS_MONGO_PASSWORD`: account key
//! - `RUST_LOG`: log filter (defaults to `info`)
//!
//! A `.env` file in the working directory is loaded before any of these are
//! read.

use std::process::ExitCode;

use crate::config::Config;

pub mod app;
pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;

fn init_logging() {
    if std::env::var_os("RUST_LOG").is_some() {
        pretty_env_logger::init();
    } else {
        pretty_env_logger::formatted_builder()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_logging();

    let matches = cli::cli().get_matches();
    let settings = cli::settings_from(&matches, Config::from_env());
    settings.config.warn_if_placeholder();
    log::debug!("Settings: {settings:?}");

    let mut stdout = std::io::stdout().lock();
    match app::run(&settings, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
