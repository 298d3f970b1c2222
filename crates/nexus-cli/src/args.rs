use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nexus")]
#[command(about = "Issue and validate nexus membership keys", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to config.toml in the nexus config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Issue a membership key
    Encode {
        /// User identifier the key is issued for
        user_id: String,

        /// Tier name (case-insensitive): archivist, orchestrator, godfather, entity
        #[arg(long)]
        tier: String,

        /// Registration date (YYYY-MM-DD, midnight UTC) or RFC 3339 instant; defaults to now
        #[arg(long)]
        date: Option<String>,

        /// Display name; initials of the first two words become the personal element
        #[arg(long)]
        name: Option<String>,

        /// Attribute mapping as JSON, e.g. '{"name": "Alice Smith"}'
        #[arg(long)]
        attributes: Option<String>,
    },

    /// Validate a membership key and show what it carries
    Validate { key: String },

    /// Derive QR presentation metadata from a membership key
    Describe { key: String },

    /// List the membership tiers
    Tiers,

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the config path and effective settings
    Show,

    /// Write a config file with default settings if none exists
    Init,
}
