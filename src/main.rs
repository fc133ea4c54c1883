#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::prelude::*;

use crate::cli::Cli;
use crate::cli::Command;
use crate::commands::Context;
use crate::commands::dispatch;
use crate::config::Config;
use crate::error::Error;
use crate::error::Result;
use crate::input::Console;
use crate::service::NoteService;

mod cli;
mod commands;
mod config;
mod error;
mod input;
mod notes;
mod presenter;
mod service;
mod storage;
#[cfg(test)]
mod tests;
mod utils;

const DEFAULT_RUST_LOG: &str = "pgnotes=warn";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    setup_environment();
    setup_tracing();

    let cli = Cli::parse();

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("Command failed: {err:?}");
            eprintln!("Error: {err}");
            err.exit_code()
        }
    }
}

/// Setup the dependencies and run a single command
///
/// # Errors
///
/// Will return `Err` if any of its dependencies fail to load:
/// - Presenter configuration
/// - Database connection
/// - Database schema
///
/// Or when the command itself fails
async fn run(command: Option<Command>) -> Result<()> {
    let config = Config::from_env();
    let presenter = config.presenter()?;

    let storage = storage::setup(&config.database_url)
        .await
        .map_err(Error::from_setup)?;

    let service = NoteService::new(storage);

    dispatch(
        command,
        Context {
            service: &service,
            presenter: &presenter,
            input: &mut Console::stdio(),
            out: &mut io::stdout(),
        },
    )
    .await
}

fn setup_environment() {
    dotenvy::dotenv().ok();
}

fn setup_tracing() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::registry;

    registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_RUST_LOG.into()),
        ))
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}
