//! subpack CLI
//!
//! Inspects the assets compiled into this build: which payloads are
//! embedded for the current target, their sizes and digests, and whether
//! each one looks like the format the manifest declares.

mod commands;
mod output;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "subpack")]
#[command(about = "Inspect the runtime assets embedded in this build", long_about = None)]
#[command(version)]
struct Cli {
    /// Colorize output: auto, always or never (NO_COLOR always wins)
    #[arg(long, global = true, value_name = "WHEN", value_parser = ["auto", "always", "never"])]
    color: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every known asset and whether this build embeds it
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show size and SHA-256 of one embedded asset
    Info {
        /// Asset name (e.g. "sub-store")
        name: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Verify every embedded payload is non-empty and correctly framed
    Check,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("SUBPACK_LOG", "warn")).init();

    let cli = Cli::parse();
    let color = output::resolve_color_choice(cli.color.as_deref());

    match cli.command {
        Commands::List { json } => commands::list::execute(json, color),
        Commands::Info { name, json } => commands::info::execute(&name, json),
        Commands::Check => commands::check::execute(color),
    }
}
