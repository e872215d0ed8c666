use std::io;

use clap::Parser;

use crate::{
    commands::{run_command, Cli},
    logging::init_tracing,
};

/// Run the Wayfarer CLI application.
///
/// Parses command-line arguments, initializes tracing, and executes the
/// requested command against a freshly seeded in-memory store.
///
/// # Returns
/// Returns `Ok(())` on successful execution, or an `io::Error` on failure.
pub async fn run() -> io::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.json, cli.verbose);

    run_command(cli).await.map_err(io::Error::other)
}
