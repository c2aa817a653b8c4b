// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::Parser;
use numtext::{app, cli::Args, config::Config};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_logging(verbose: bool) {
    let default = if verbose { "numtext=debug" } else { "numtext=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).without_time())
        .with(filter)
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::try_from(args)?;
    init_logging(config.verbose);
    app::run(&config)
}

fn main() -> ExitCode {
    let result = run(Args::parse());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
