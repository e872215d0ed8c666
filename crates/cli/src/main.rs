use std::process::ExitCode;

use tracing::error;

/// Argument parsing and top-level dispatch.
mod cli;
/// Subcommand implementations.
mod commands;
/// Tracing subscriber setup.
mod logging;

#[tokio::main]
async fn main() -> ExitCode {
    match cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Command failed: {}", e);
            ExitCode::FAILURE
        },
    }
}
