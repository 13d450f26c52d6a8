//! CLI Adapter.

mod build;
mod check;
mod config;
mod init;

use clap::{Parser, Subcommand};

use crate::app::commands::build::DEFAULT_OUT_DIR;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "masthead")]
#[command(version)]
#[command(
    about = "Site identity toolkit: configuration, brand mark, and web-app artifacts",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a fresh site in the current directory
    #[clap(visible_alias = "i")]
    Init {
        /// Site title; prompted for when omitted
        #[arg(long)]
        title: Option<String>,
        /// Author name shown in the masthead
        #[arg(long)]
        name: Option<String>,
        /// Published site URL
        #[arg(long)]
        url: Option<String>,
        /// One-line site description
        #[arg(long)]
        description: Option<String>,
    },
    /// Render every artifact the configuration calls for
    #[clap(visible_alias = "b")]
    Build {
        /// Output directory, relative to the site root
        #[arg(long, default_value = DEFAULT_OUT_DIR)]
        out: String,
        /// CSS color for the brand mark
        #[arg(long)]
        logo_fill: Option<String>,
    },
    /// Validate the site configuration and the assets it points at
    Check {
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
        /// Probe the published URLs over the network
        #[arg(long)]
        links: bool,
    },
    /// Inspect the site configuration
    Config {
        #[command(subcommand)]
        command: config::ConfigCommands,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Init { title, name, url, description } => {
            init::run_init(title, name, url, description).map(|_| 0)
        }
        Commands::Build { out, logo_fill } => build::run_build(out, logo_fill).map(|_| 0),
        Commands::Check { strict, links } => check::run_check(strict, links),
        Commands::Config { command } => config::run_config(command).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
