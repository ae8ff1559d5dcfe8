//! Trestle CLI entrypoint.

use clap::Parser;

mod commands;
mod handlers;

use commands::Commands;

#[derive(Parser)]
#[command(name = "trestle")]
#[command(author, version, about = "Trestle CI configuration planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Plan { settings, format } => handlers::plan(settings.as_deref(), format)?,
        Commands::Validate { settings } => handlers::validate(settings.as_deref())?,
        Commands::Workers { settings } => handlers::workers(settings.as_deref())?,
    }

    Ok(())
}
