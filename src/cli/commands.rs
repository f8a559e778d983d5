//! CLI arguments and flag parsing

use clap::Parser;
use std::path::PathBuf;

/// Infer an Arrow schema from a single JSON object
#[derive(Parser, Debug)]
#[command(name = "schema-probe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input JSON file (default: stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty print the schema as a JSON document
    #[arg(long)]
    pub pretty: bool,

    /// Comma-separated list of columns to include
    #[arg(long)]
    pub include: Option<String>,

    /// Comma-separated list of column_name:type pairs
    /// (types: string, float64, bool; anything else means string)
    #[arg(long)]
    pub types: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
