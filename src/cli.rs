//! Command-line interface for vodarr.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// vodarr - read-only streaming catalog server
#[derive(Parser)]
#[command(name = "vodarr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the catalog API server
    Serve,

    /// Validate every collection and its relations, then exit
    #[command(alias = "-c", alias = "--check")]
    Check,

    /// Write the public JSON payloads to a directory for static hosting
    Export {
        /// Output directory for the JSON documents
        #[arg(long, default_value = "dist")]
        out: PathBuf,
    },
}
