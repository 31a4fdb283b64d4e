//! cfseed CLI - seed a Confluence space with a standard page hierarchy.
//!
//! Provides commands for:
//! - `provision`: Create the page hierarchy in a space
//! - `serve`: Start the provisioning form server
//! - `tree`: Print the page hierarchy

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ProvisionArgs, ServeArgs};
use error::CliError;
use output::Output;

/// cfseed - Confluence space seeding.
#[derive(Parser)]
#[command(name = "cfseed", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the page hierarchy in a space.
    Provision(ProvisionArgs),
    /// Start the provisioning form server.
    Serve(ServeArgs),
    /// Print the page hierarchy.
    Tree,
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Provision(args) => args.verbose,
            Self::Serve(args) => args.verbose,
            Self::Tree => false,
        }
    }
}

fn main() {
    // Credentials may live in a .env file next to the project
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let output = Output::new();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.command.verbose()))
        .init();

    let result = match cli.command {
        Commands::Provision(args) => args.execute(),
        Commands::Serve(args) => tokio::runtime::Runtime::new()
            .map_err(CliError::from)
            .and_then(|rt| rt.block_on(args.execute())),
        Commands::Tree => {
            commands::tree::execute();
            Ok(())
        }
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// `--verbose` enables INFO level, otherwise use `RUST_LOG` or default to WARN
/// so per-page failures are always visible.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}
