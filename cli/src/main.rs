//! # vedanco CLI
//!
//! Terminal front end for the Vedanco Group site.
//!
//! ## Usage
//!
//! - `vedanco` - Browse the site in the terminal
//! - `vedanco resolve "Vedanco Air"` - Show where a menu label navigates
//! - `vedanco menu` - Print the menu taxonomy
//! - `vedanco contact` - Send the contact form
//! - `vedanco genai ...` - Generative content tools

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod interactive;

use commands::{
    browse_command, contact_command, genai_command, menu_command, resolve_command, ContactArgs,
    GenAiCommand,
};
use config::CliConfigLoader;

/// vedanco - the Vedanco Group site in your terminal
#[derive(Parser)]
#[command(name = "vedanco")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse the Vedanco Group site, send the contact form, and run generative tools")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Contact form endpoint override
    #[arg(long)]
    contact_endpoint: Option<String>,

    /// API key override for the generative service
    #[arg(long)]
    api_key: Option<String>,

    /// Base URL override for the generative service
    #[arg(long)]
    base_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output mode
    #[arg(short = 'd', long = "debug")]
    debug_output: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the site in a full-screen terminal UI
    Browse,

    /// Print the navigation target a label resolves to
    Resolve {
        /// Menu label, e.g. "Vedanco Air"
        label: String,

        /// Print JSON instead of VIEW#section
        #[arg(long)]
        json: bool,
    },

    /// Print the menu taxonomy with slugs and targets
    Menu {
        /// Use the mobile menu order
        #[arg(long)]
        mobile: bool,
    },

    /// Submit the contact form
    Contact(ContactArgs),

    /// Generative content tools
    Genai {
        #[command(subcommand)]
        command: GenAiCommand,
    },
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(endpoint) = &cli.contact_endpoint {
        loader = loader.with_contact_endpoint_override(endpoint.clone());
    }

    if let Some(api_key) = &cli.api_key {
        loader = loader.with_api_key_override(api_key.clone());
    }

    if let Some(base_url) = &cli.base_url {
        loader = loader.with_base_url_override(base_url.clone());
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    vedanco_core::init_tracing_with_debug(cli.verbose || cli.debug_output);

    let config_loader = build_config_loader(&cli);

    match cli.command {
        None | Some(Commands::Browse) => browse_command(config_loader, cli.debug_output).await,
        Some(Commands::Resolve { label, json }) => resolve_command(&label, json),
        Some(Commands::Menu { mobile }) => menu_command(mobile),
        Some(Commands::Contact(args)) => contact_command(config_loader, args).await,
        Some(Commands::Genai { command }) => genai_command(config_loader, command).await,
    }
}
