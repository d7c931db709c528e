mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use duocal_core::config::DuocalConfig;
use duocal_core::{ParticipantFilter, ViewMode};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "duocal")]
#[command(about = "A calendar shared by two people")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an invite code for a new account
    Invite { name: String },
    /// Print the month or week around a date
    View {
        /// "month" or "week"
        #[arg(short, long, default_value = "month")]
        mode: ViewMode,

        /// Day to show (e.g. "2025-03-20", "tomorrow", "next fri")
        #[arg(short, long)]
        date: Option<String>,

        /// Whose events to show: all, self, partner or both
        #[arg(short, long, default_value = "all")]
        filter: ParticipantFilter,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
    /// Interactive calendar session (nothing is saved on exit)
    Shell,
    /// Show configuration, or create a default config file
    Config {
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = DuocalConfig::load()?;

    match cli.command {
        Commands::Invite { name } => commands::invite::run(&config, &name),
        Commands::View {
            mode,
            date,
            filter,
            json,
        } => commands::view::run(&config, mode, date.as_deref(), filter, json),
        Commands::Shell => commands::shell::run(&config),
        Commands::Config { init } => commands::config::run(&config, init),
    }
}
