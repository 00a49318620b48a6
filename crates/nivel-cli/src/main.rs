//! Nivel CLI - offline driver and inspection tools for the nivel gain stage.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nivel")]
#[command(author, version, about = "Side-chain gain stage CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a WAV file through the gain stage
    Process(commands::process::ProcessArgs),

    /// List the automatable parameters
    Params(commands::params::ParamsArgs),

    /// Show component capabilities and bus layout
    Info(commands::info::InfoArgs),

    /// Inspect or create persisted state files
    State(commands::state::StateArgs),
}

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Process(args) => commands::process::run(args),
        Commands::Params(args) => commands::params::run(args),
        Commands::Info(args) => commands::info::run(args),
        Commands::State(args) => commands::state::run(args),
    }
}
