//! Command line argument parsing for the Orthos CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Orthos - a statistical spelling corrector
#[derive(Parser, Debug, Clone)]
#[command(name = "orthos")]
#[command(about = "A statistical spelling corrector built on corpus word frequencies")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct OrthosArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl OrthosArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Correct one or more words against a trained corpus
    Correct(CorrectArgs),

    /// Interactively correct words read from stdin
    Repl(ReplArgs),

    /// Show statistics for a trained corpus
    Stats(StatsArgs),
}

/// Arguments for one-shot correction
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Path to the corpus file used to train the dictionary
    #[arg(short, long, value_name = "CORPUS_FILE", env = "ORTHOS_CORPUS")]
    pub corpus: PathBuf,

    /// Words to correct
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for the interactive correction loop
#[derive(Parser, Debug, Clone)]
pub struct ReplArgs {
    /// Path to the corpus file used to train the dictionary
    #[arg(short, long, value_name = "CORPUS_FILE", env = "ORTHOS_CORPUS")]
    pub corpus: PathBuf,
}

/// Arguments for corpus statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the corpus file used to train the dictionary
    #[arg(short, long, value_name = "CORPUS_FILE", env = "ORTHOS_CORPUS")]
    pub corpus: PathBuf,

    /// Number of top words to list
    #[arg(short, long, default_value = "10")]
    pub top: usize,
}
