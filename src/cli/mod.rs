pub mod input;
pub mod output;
pub mod status;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ColorChoice;

#[derive(Parser)]
#[command(
    name = "tradfri-status",
    version,
    about = "Show status lines for TRADFRI lighting groups and bulbs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output statuses as JSON instead of status lines
    #[arg(short = 'j', long = "json", global = true, conflicts_with = "table")]
    pub json: bool,

    /// Output statuses as a human-readable table
    #[arg(short = 't', long = "table", global = true)]
    pub table: bool,

    /// When to colorize status lines
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, global = true)]
    pub color: ColorChoice,

    /// Verbose output (log skipped records)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render group records
    Group {
        /// JSON file holding a record or an array of records ('-' for stdin)
        file: Option<PathBuf>,
    },

    /// Render bulb records
    Bulb {
        /// JSON file holding a record or an array of records ('-' for stdin)
        file: Option<PathBuf>,
    },

    /// Render a mix of group and bulb records, telling them apart by shape
    Show {
        /// JSON file holding a record or an array of records ('-' for stdin)
        file: Option<PathBuf>,
    },

    /// Render groups each followed by their bulbs
    Tree {
        /// JSON file of {"group": ..., "bulbs": [...]} entries ('-' for stdin)
        file: Option<PathBuf>,
    },
}
