//! Command-line interface and orchestration for solr-probe
//!
//! This module owns the boundary of the tool: the six-positional-parameter
//! contract, diagnostic logging setup, and the mapping from the error taxonomy
//! to process exit codes.
//!
//! # Execution Flow
//!
//! The `run` function parses the command line with clap, normalizes it into a
//! `RunConfig`, drives one poll cycle, and writes the report to the host's
//! output stream. Any failure writes a single line to the host's error stream
//! and exits with the code carried by the error class. The `Host` trait
//! abstracts the output streams and process termination so the whole flow is
//! testable in memory.

mod host;
mod run;

pub use host::Host;
pub use run::run;
