// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! probation - probation confirmation review CLI

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use commands::{batch, dashboard, list, review, show, App};
use error::CliError;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "probation",
    version,
    about = "Probation confirmation reviews: reporting manager, department head, HR head"
)]
struct Cli {
    /// Config file (default: ./probation.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Roster file, JSON array or JSON lines (overrides [roster] path)
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all records
    List(list::ListArgs),
    /// Show a record and its review history
    Show(show::ShowArgs),
    /// Show a role's dashboard
    Dashboard(dashboard::DashboardArgs),
    /// Submit a review
    Review(review::ReviewArgs),
    /// Run JSON-lines requests from a file or stdin
    Batch(batch::BatchArgs),
}

fn main() -> ExitCode {
    setup_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<CliError>() {
                Some(cli_error) => eprint!("{}", cli_error),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut app = App::load(cli.config.as_deref(), cli.roster)?;

    match cli.command {
        Commands::List(args) => list::handle(args, &app),
        Commands::Show(args) => show::handle(args, &app),
        Commands::Dashboard(args) => dashboard::handle(args, &app),
        Commands::Review(args) => review::handle(args, &mut app),
        Commands::Batch(args) => batch::handle(args, &mut app),
    }
}

/// Log to stderr so stdout stays machine-readable
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_env("PROBATION_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
