//! # Pizza Desk Entry Point
//!
//! Interactive pizza menu management and order bill splitting.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Read configuration from the environment
//! 3. Load or seed the catalog
//! 4. Run the session on stdin / stdout

use std::io;
use std::process::ExitCode;

use pizza_cli::config::AppConfig;
use pizza_cli::error::CliError;
use tracing::error;

fn main() -> ExitCode {
    pizza_cli::init_tracing();

    let result = AppConfig::from_env()
        .map_err(CliError::from)
        .and_then(|config| pizza_cli::run(config, io::stdin().lock(), io::stdout().lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Session ended with an error");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
