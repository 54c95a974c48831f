//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use crate::commands;
use larder::output::OutputMode;

/// larder - Food inventory tracking with expiration urgency and donation matching
#[derive(Parser, Debug)]
#[command(
    name = "larder",
    version,
    about = "Food inventory tracking with expiration urgency and donation matching",
    long_about = "Track a small food inventory from the command line.\n\n\
                  Records are validated against a fixed schema, measured against\n\
                  their expiration dates, ordered by urgency, and paired with\n\
                  donation recipients that accept their category."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the full pipeline against an illustrative inventory
    Demo {
        /// Days-until-expiration threshold for the expiring-items report
        #[arg(short, long)]
        days: Option<i64>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Demo { days }) => commands::demo(days, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("larder v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("larder v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'larder --help' for usage");
                println!("Run 'larder demo' to see the pipeline on sample data");
            }
            Ok(())
        },
    }
}
