//! Waymark CLI entry point.

use std::env;
use std::io;
use std::process::ExitCode;

use waymark_runtime::cli::{self, CliConfig};
use waymark_runtime::logging;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let config = match CliConfig::parse_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            eprintln!("Try 'waymark --help' for more information.");
            return ExitCode::FAILURE;
        }
    };

    logging::init(config.verbose);

    match cli::run(&config, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(code = e.code(), "run aborted");
            eprintln!("\x1b[31m{}\x1b[0m", cli::render_error(&e));
            ExitCode::FAILURE
        }
    }
}
