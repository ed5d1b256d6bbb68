mod cli;

use seasonswap_core::logging;

fn main() {
    // Initialize logging as early as possible.
    logging::init_logging().expect("failed to initialize logging");

    // Parse CLI and dispatch.
    if let Err(err) = cli::CliCommand::run_from_args() {
        eprintln!("seasonswap error: {:#}", err);
        std::process::exit(1);
    }
}
