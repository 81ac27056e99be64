use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pkgtally",
    version,
    about = "Aggregate npm daily download series into evolution buckets"
)]
pub struct Cli {
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: Format,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a daily series: validate, timestamp, sort
    Daily {
        /// JSON array of {day, downloads} records; '-' reads stdin
        #[arg(long)]
        input: PathBuf,
    },

    /// Fold a daily series into rolling 7-day windows
    Weekly {
        /// JSON array of {day, downloads} records; '-' reads stdin
        #[arg(long)]
        input: PathBuf,

        /// First day of the reporting window (YYYY-MM-DD, inclusive)
        #[arg(long)]
        start: String,

        /// Last day of the reporting window (YYYY-MM-DD, inclusive)
        #[arg(long)]
        end: String,
    },

    /// Aggregate a daily series into calendar months
    Monthly {
        /// JSON array of {day, downloads} records; '-' reads stdin
        #[arg(long)]
        input: PathBuf,
    },

    /// Aggregate a daily series into calendar years
    Yearly {
        /// JSON array of {day, downloads} records; '-' reads stdin
        #[arg(long)]
        input: PathBuf,
    },

    /// Resolve a package's creation date from a packument
    Created {
        /// Packument JSON document; '-' reads stdin
        #[arg(long)]
        input: PathBuf,
    },
}
