pub mod commands;
pub mod preview;
pub mod status;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "folder-creator")]
#[command(about = "Create nested folders from the rows of a CSV or XLSX table", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./folder-creator.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a table and print it
    Preview {
        /// Path to a .csv or .xlsx file
        table: PathBuf,
    },

    /// Load a table and create its folders under the destination
    Generate {
        /// Path to a .csv or .xlsx file
        table: PathBuf,

        /// Destination root (falls back to `default_destination` from config)
        dest: Option<PathBuf>,
    },
}
