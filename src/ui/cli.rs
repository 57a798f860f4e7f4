// Command-line interface definitions and the process entry point for both binaries

use clap::{CommandFactory, FromArgMatches, Parser};

use crate::config::{Mode, ScanConfig};
use crate::logging;
use crate::scanner;

/// Scan options are deliberately absent: only `--help` and `--version`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {}

/// Binary name shown in `--help` and `--version`
pub fn binary_name(mode: Mode) -> &'static str {
    match mode {
        Mode::Legacy => "list-versions-legacy",
        Mode::Current => "list-versions",
    }
}

fn about(mode: Mode) -> &'static str {
    match mode {
        Mode::Legacy => {
            "Print every filesfinder version referenced in .rs, .toml, .yml and .lock files \
             under the current directory"
        }
        Mode::Current => {
            "Print every filesfinder version, prefixed with 'v', referenced in .rs, .toml, \
             .yml, .lock, .md files and Dockerfiles under the current directory"
        }
    }
}

/// Parse the process arguments for the given mode, exiting on `--help`, `--version` or errors
pub fn parse_args(mode: Mode) -> Cli {
    let matches = Cli::command()
        .name(binary_name(mode))
        .about(about(mode))
        .get_matches();

    Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit())
}

/// Build the configuration for `mode`, scan the current directory and
/// return the process exit code
pub fn run_mode(mode: Mode) -> i32 {
    let result = ScanConfig::new(mode).and_then(|config| scanner::run(&config));

    match result {
        Ok(_) => 0,
        Err(e) => {
            logging::log_scan_aborted(&e);
            eprintln!("Error: {e}");
            1
        }
    }
}
