// Module declarations
mod cli;
mod markdown;
mod utils;

fn main() {
    // Run the CLI
    cli::run();
}
