//! MessFix CLI
//!
//! Command-line interface for replaying daily snapshots through the
//! reconciler

use clap::{Parser, Subcommand};

mod commands;
mod days_file;

#[derive(Debug, Parser)]
#[command(name = "messfix")]
#[command(about = "MessFix - Box/folder/paper snapshot reconciliation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Apply every day of a days file in order and print the results
    Run(commands::run::RunArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(args) => commands::run::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
