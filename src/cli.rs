use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::errors::EXIT_ERROR;

/// foxhist - fuzzy search over Firefox browsing history
///
/// Searches the default profile's places.sqlite for URLs whose address,
/// title or description matches the query, and prints each matching URL
/// once, oldest visit first.
#[derive(Parser, Debug)]
#[command(name = "foxhist", version, about)]
pub struct Cli {
    /// The search query. Wrapped as *query* unless it already contains
    /// glob metacharacters (* ? [ ]).
    pub query: String,

    /// Firefox profiles root (default: ~/.mozilla/firefox)
    #[arg(long, value_name = "DIR")]
    pub profiles_dir: Option<PathBuf>,

    /// Scratch path for the temporary history copy
    #[arg(long, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,
}

/// Parse CLI arguments.
///
/// On a parse failure (e.g. no query argument), prints clap's usage message
/// to stderr and exits with code 1. `--help`/`--version` print to stdout
/// and exit 0.
pub fn parse() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let use_stderr = e.use_stderr();
            // Ignore write failures; we are about to exit anyway.
            let _ = e.print();
            if use_stderr {
                process::exit(EXIT_ERROR);
            }
            process::exit(0);
        }
    }
}
