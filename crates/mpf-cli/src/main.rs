// crates/mpf-cli/src/main.rs

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "mpf-cli")]
#[command(about = "Decode an MPF handwriting feature file to text", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub filter: cmd::filter::FilterArgs,

    /// Log header layout and decode summary to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

fn setup_logging(verbose: bool, quiet: bool) -> anyhow::Result<()> {
    let level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    // stdout carries the decoded file; diagnostics stay on stderr
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("install tracing subscriber")
}

fn run(cli: Cli) -> anyhow::Result<()> {
    setup_logging(cli.verbose, cli.quiet)?;
    cmd::filter::run(cli.filter)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
