#![allow(clippy::unused_async)]

use anyhow::Context;
use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod progress;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(commands::Outcome::Clean) => {}
        Ok(commands::Outcome::Failures) => std::process::exit(1),
        Err(error) => {
            eprintln!("quizlint error: {error:#}");
            std::process::exit(1);
        }
    }
}

async fn run() -> anyhow::Result<commands::Outcome> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    let surroundings = output::terminal::Surroundings::capture();
    output::terminal::Terminal::decide(&flags, &surroundings).install();

    let config = bootstrap::load_config()?;
    let ctx = context::AppContext::init(config).context("failed to initialize quizlint")?;

    let outcome = commands::dispatch::dispatch(&cli.command, &ctx, &flags).await?;
    Ok(if flags.strict {
        outcome
    } else {
        commands::Outcome::Clean
    })
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("QUIZLINT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
