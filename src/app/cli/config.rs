//! Config inspection commands.

use clap::Subcommand;

use crate::app::api::{self, ExportOptions};
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the configuration in its published JSON shape
    Export {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

pub fn run_config(command: ConfigCommands) -> Result<(), AppError> {
    match command {
        ConfigCommands::Export { pretty } => {
            let json = api::export_config(ExportOptions { pretty })?;
            println!("{}", json);
            Ok(())
        }
    }
}
