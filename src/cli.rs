use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::LookupPolicy;

#[derive(Parser, Debug)]
#[command(name = "marine-indicators")]
#[command(version, about = "Harmonize Pacific marine pollution survey data")]
pub struct Cli {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    pub log: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the survey files are and how to treat lookup misses
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Directory containing the three survey files
    #[arg(short, long, default_value = ".")]
    pub data_dir: PathBuf,

    /// JSON config file overriding file names, batch years and exclusions
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Policy for country names / codes / indicators missing from the lookups
    #[arg(short, long, value_enum)]
    pub lookup_policy: Option<LookupPolicy>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the unified table and optionally export it
    Harmonize {
        #[command(flatten)]
        sources: SourceArgs,

        /// Write the table and lookups to this SQLite database
        #[arg(short, long)]
        output_db: Option<PathBuf>,

        /// Write the table as a JSON array to this file
        #[arg(short, long)]
        json: Option<PathBuf>,
    },

    /// Print every derived view for one indicator as JSON
    View {
        #[command(flatten)]
        sources: SourceArgs,

        /// Indicator display label, e.g. "Plastic Waste"
        #[arg(short, long)]
        indicator: String,
    },

    /// List indicator codes, labels and descriptions
    Indicators,

    /// List country codes, names and coordinates
    Countries,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
