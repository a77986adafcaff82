//! Netcards CLI
//!
//! Command-line interface for Netcards - vCard business cards shared over QR codes.

mod commands;
mod config;
mod display;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing_subscriber::EnvFilter;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "netcards")]
#[command(version, about = "vCard business cards for QR code exchange")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory for exported .vcf files (default: current directory)
    #[arg(long, global = true, env = "NETCARDS_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode contacts (JSON object or array) as vCard text
    Encode {
        /// Contacts JSON file
        input: PathBuf,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fold lines longer than 75 octets
        #[arg(long)]
        fold: bool,
    },

    /// Decode a .vcf file into a JSON array of contacts
    Decode {
        /// vCard file
        input: PathBuf,

        /// Only contacts met at this event
        #[arg(long)]
        event: Option<String>,

        /// Only contacts whose name, email, company or title match
        #[arg(long)]
        search: Option<String>,
    },

    /// Export contacts to a .vcf file in the output directory
    Export {
        /// Contacts JSON file
        input: PathBuf,

        /// Only export contacts met at this event
        #[arg(long)]
        event: Option<String>,

        /// Fold lines longer than 75 octets
        #[arg(long)]
        fold: bool,
    },

    /// List the events contacts were met at
    Events {
        /// Contacts JSON file
        input: PathBuf,
    },

    /// Check that a profile fits in a single QR code
    Qr {
        /// Profile JSON file (a single contact)
        input: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = CliConfig {
        output_dir: cli.output_dir.unwrap_or_else(|| PathBuf::from(".")),
    };

    match cli.command {
        Commands::Encode {
            input,
            output,
            fold,
        } => commands::encode::run(&input, output.as_deref(), fold)?,
        Commands::Decode {
            input,
            event,
            search,
        } => commands::decode::run(&input, event.as_deref(), search.as_deref())?,
        Commands::Export { input, event, fold } => {
            commands::export::run(&config, &input, event.as_deref(), fold)?;
        }
        Commands::Events { input } => commands::events::run(&input)?,
        Commands::Qr { input } => commands::qr::run(&input)?,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "netcards", &mut io::stdout());
        }
    }

    Ok(())
}
