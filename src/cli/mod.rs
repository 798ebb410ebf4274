//! Command Line Interface (CLI) layer for sheetnorm.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that turns flags or a config file
//! into `NormalizeParams`, runs the batch, and prints one confirmation line
//! per written sheet.
//!
//! If you are embedding sheetnorm into another application, prefer the
//! high-level `sheetnorm::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
