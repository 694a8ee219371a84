use pagecheck_core::logging;

mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible; if the state dir is not
    // writable, fall back to stderr instead of refusing to start.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args().await {
        eprintln!("pagecheck error: {:#}", err);
        std::process::exit(1);
    }
}
