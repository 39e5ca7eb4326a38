//! Command-line definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// SecureVault - password-protected export and import of vault entries.
#[derive(Parser, Debug)]
#[command(name = "securevault", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding `settings.json`.
    #[arg(long, global = true, default_value = ".")]
    pub data_dir: PathBuf,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Seal a JSON list of entries into an encrypted export file.
    Export {
        /// JSON array of entries to export.
        #[arg(long)]
        entries: PathBuf,
        /// Directory the export file is written to.
        #[arg(long)]
        out: PathBuf,
        /// Export even if the password is below the configured strength.
        #[arg(long)]
        allow_weak: bool,
    },
    /// Open an encrypted export and recover its entries.
    Import {
        /// Export file to open.
        #[arg(long)]
        file: PathBuf,
        /// Write the entries JSON here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Score a password and list what it is missing.
    Strength,
    /// Generate a random password.
    Generate {
        /// Number of characters.
        #[arg(long)]
        length: Option<usize>,
        /// Leave out uppercase letters (A-Z).
        #[arg(long)]
        no_uppercase: bool,
        /// Leave out lowercase letters (a-z).
        #[arg(long)]
        no_lowercase: bool,
        /// Leave out digits (0-9).
        #[arg(long)]
        no_numbers: bool,
        /// Leave out symbols.
        #[arg(long)]
        no_symbols: bool,
    },
}
