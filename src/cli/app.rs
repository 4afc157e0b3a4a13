use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logging::LogLevel;
use crate::wizard::{ApplicationType, OrientationChoice};

/// Connector Guide: find matching sockets, tabs and headers
#[derive(Parser)]
#[command(name = "connector-guide")]
#[command(version)]
#[command(about = "Five-step connector selection guide over a connector catalog")]
#[command(
    long_about = "Connector Guide asks for the application, pole count, orientation and optional refinements, then lists the matching sockets, tabs and headers from the catalog."
)]
pub struct Cli {
    /// Settings file (defaults to the per-user config.yaml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog file (YAML or JSON); overrides the settings file
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Display locale
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Log level
    #[arg(long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive guide in the terminal
    #[cfg(feature = "tui")]
    Guide,

    /// Answer every step from flags and print the results
    Query {
        /// What the connector joins
        #[arg(short, long, value_enum)]
        application: ApplicationType,

        /// Number of contact positions (2-12)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(2..=12))]
        poles: u8,

        /// Mounting orientation
        #[arg(short, long, value_enum, default_value = "either")]
        orientation: OrientationChoice,

        /// Locking mechanism required
        #[arg(long)]
        locking: bool,

        /// Only special versions
        #[arg(long)]
        special: bool,

        /// Specific keying required
        #[arg(long)]
        keying: bool,

        /// Output the result set as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one connector by id or by `/{locale}/connector/{id}` route
    Show {
        /// Connector id or detail route
        target: String,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            #[cfg(feature = "tui")]
            Commands::Guide => "guide",
            Commands::Query { .. } => "query",
            Commands::Show { .. } => "show",
        }
    }

    /// Whether the command takes over the terminal
    pub fn is_interactive(&self) -> bool {
        #[cfg(feature = "tui")]
        if matches!(self, Commands::Guide) {
            return true;
        }
        false
    }
}
