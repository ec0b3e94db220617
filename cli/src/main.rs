use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod error;
mod output;
mod terminal;

use crate::commands::{listen, replay, show_copy};

#[derive(Parser)]
#[command(name = "roomcallctl")]
#[command(about = "Answer room invites from the command line")]
#[command(version)]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (human, json)
    #[arg(short, long, global = true, default_value = "human")]
    format: output::OutputFormat,

    /// Directory holding config.toml
    #[arg(long, global = true)]
    config_dir: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to the chat server and answer invites as they arrive
    Listen(listen::ListenArgs),
    /// Run a scripted sequence of invites, confirms and cancels
    Replay(replay::ReplayArgs),
    /// Print the dialog copy for an invite kind
    ShowCopy(show_copy::ShowCopyArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays clean
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("roomcallctl starting...");

    let config = config::Config::load(cli.config_dir.as_deref())?;

    match cli.command {
        Commands::Listen(args) => listen::execute(args, &config, cli.format).await?,
        Commands::Replay(args) => replay::execute(args, &config, cli.format)?,
        Commands::ShowCopy(args) => show_copy::execute(args, &config, cli.format)?,
    }

    Ok(())
}
