//! sheetnorm CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run the batch, and exit
//! non-zero on the first failure. For programmatic use, prefer the library
//! API (`sheetnorm::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
