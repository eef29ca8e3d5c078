//! tooltime - tool rental checkout CLI

use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;
use tracing_subscriber::EnvFilter;

use tooltime_cli::cmd;
use tooltime_cli::cmd::checkout::CheckoutArgs;
use tooltime_cli::ui::Output;
use tooltime_cli::{Cli, Commands};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_from(strip_comment(std::env::args_os()));

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

/// Drop a trailing `#` comment so commands can be pasted from notes.
fn strip_comment(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    args.into_iter()
        .take_while(|arg| !arg.to_string_lossy().starts_with('#'))
        .collect()
}

fn run(cli: Cli) -> Result<()> {
    let output = Output::new(cli.quiet);
    let catalog = cli.catalog.as_deref();

    match cli.command {
        Commands::Checkout {
            tool,
            days,
            discount,
            date,
            json,
        } => {
            let args = CheckoutArgs {
                tool: &tool,
                days,
                discount,
                date: date.as_deref(),
                json,
            };
            cmd::checkout::checkout(&args, catalog, &output)
        }
        Commands::Tools => cmd::tools::tools(catalog, &output),
        Commands::Holidays { year, next } => cmd::holidays::holidays(year, next, &output),
        Commands::Demo => cmd::demo::demo(),
        Commands::Completions { shell } => {
            cmd::completions::completions(shell);
            Ok(())
        }
    }
}
