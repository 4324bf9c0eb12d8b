//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use larder_cli::CliError;

fn main() {
    match larder_cli::run() {
        Ok(()) => {}
        // Clap renders help, version, and usage errors itself.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("larder: {err}");
            std::process::exit(1);
        }
    }
}
