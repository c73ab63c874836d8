//! CLI argument definitions for the Ordseq binary.

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Ordseq sorted sequence demonstration
#[derive(Parser, Debug)]
#[command(name = "ordseq")]
#[command(about = "Ordseq: keep integers or strings in sorted order")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(
        short,
        long,
        global = true,
        value_enum,
        default_value = "human",
        env = "ORDSEQ_FORMAT"
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the built-in integer and fruit examples (default)
    Demo,
    /// Sort the given values
    Sort(SortArgs),
}

/// Arguments for the sort command
#[derive(clap::Args, Debug)]
pub struct SortArgs {
    /// Values to insert. Anything that parses as a 64-bit integer is
    /// inserted as an integer, everything else as a string.
    #[arg(required = true, allow_hyphen_values = true)]
    pub values: Vec<String>,
}
