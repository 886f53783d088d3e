//! XML-RPC C++ proxy generator CLI library.
//!
//! Argument parsing and the generation pipeline, kept out of `main.rs`
//! so both can be driven from tests with an injected server and an
//! in-memory output sink.

pub mod cli;
pub mod runner;

pub use cli::{Cli, UsageError, parse_args};
pub use runner::{diagnostic, init_logging, run};
