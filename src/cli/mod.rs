pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init(cli.debug, cli.trace);

    commands::handle_generate_command(&cli.files);
}
