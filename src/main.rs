use anyhow::Context;
use clap::Parser;
use std::io::{self, BufWriter};
use std::process::ExitCode;
use tsort::cli::Cli;
use tsort::cli_handlers;

fn main() -> ExitCode {
    // Logs go to stderr, stdout carries the ordering and diagnostics
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut err = io::stderr();

    cli_handlers::run(cli, &mut out, &mut err).context("failed to write output")
}
