//! schema-probe CLI
//!
//! One-shot schema inference: JSON object in, Arrow schema out.

use clap::Parser;
use schema_probe::cli::{Cli, Runner};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version requests are not failures
            let code = i32::from(e.use_stderr());
            print!("{e}");
            std::process::exit(code);
        }
    };

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // Logs go to stderr so they never mix with schema output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    std::process::exit(Runner::new(cli).run());
}
