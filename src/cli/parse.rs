//! CLI parse: clap types for donlocal-scaffold. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Create the empty DonLocal Angular application skeleton
#[derive(Parser)]
#[command(name = "donlocal-scaffold")]
#[command(about = "Create the empty DonLocal Angular application skeleton")]
pub struct Cli {
    /// Command to run (default: run)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base directory for the generated tree (default: src/app)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    /// Configuration file path (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored progress output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose diagnostic logging (default: off)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create the skeleton; existing files are truncated to empty
    Run,
    /// Print the layout and the paths a run would create, without writing
    Manifest {
        /// Output format
        #[arg(long, value_enum, default_value_t = ManifestFormat::Text)]
        format: ManifestFormat,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Text,
    Json,
    Toml,
}
