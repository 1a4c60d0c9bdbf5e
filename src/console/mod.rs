//! Serial console front end for the log proxy
//!
//! Parses `log [start] [end]` style command lines and dispatches them onto
//! a [`crate::RingLog`]. Zero heap allocation - all output goes through the
//! caller's sink.

pub mod commands;
pub mod error;
pub mod parser;

pub use commands::{execute, COMMANDS};
pub use error::ConsoleError;
pub use parser::{parse_line, ParsedCommand};
