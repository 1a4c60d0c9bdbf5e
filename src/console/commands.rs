//! Command handlers
//!
//! Dispatch is a `match` rather than the usual fn-pointer table: handlers
//! are generic over the ring log's const parameters, and function pointers
//! cannot be. The descriptor table still exists for `help`.

use super::parser::ParsedCommand;
use super::ConsoleError;
use crate::query;
use crate::ring::RingLog;
use crate::sink::Sink;

/// Command descriptor
pub struct CommandDescriptor {
    pub name: &'static str,
    pub brief: &'static str,
}

/// All available commands
pub static COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor { name: "help", brief: "List commands" },
    CommandDescriptor { name: "log", brief: "Print buffered lines: log [start] [end]" },
    CommandDescriptor { name: "mute", brief: "Suppress all log output" },
    CommandDescriptor { name: "unmute", brief: "Resume log output" },
    CommandDescriptor { name: "stats", brief: "Buffer statistics" },
];

/// Execute a parsed command against a ring log
pub fn execute<const BUFFER_SIZE: usize, const MAX_CLIENTS: usize>(
    cmd: &ParsedCommand<'_>,
    log: &mut RingLog<'_, BUFFER_SIZE, MAX_CLIENTS>,
    out: &dyn Sink,
) -> Result<(), ConsoleError> {
    match cmd.command {
        "" => Ok(()), // Empty line, do nothing
        "help" => cmd_help(cmd, out),
        "log" => cmd_log(cmd, log, out),
        "mute" => {
            log.enable(false);
            out.write_all(b"muted\n");
            Ok(())
        }
        "unmute" => {
            log.enable(true);
            out.write_all(b"unmuted\n");
            Ok(())
        }
        "stats" => cmd_stats(log, out),
        _ => Err(ConsoleError::UnknownCommand),
    }
}

// --- Command Implementations ---

fn cmd_help(cmd: &ParsedCommand<'_>, out: &dyn Sink) -> Result<(), ConsoleError> {
    if let Some(name) = cmd.arg(0) {
        // Help for specific command
        let c = COMMANDS
            .iter()
            .find(|c| c.name == name)
            .ok_or(ConsoleError::UnknownCommand)?;
        query::write_fmt(out, format_args!("{}: {}\n", c.name, c.brief));
    } else {
        // List all commands
        for c in COMMANDS {
            query::write_fmt(out, format_args!("  {:<8} {}\n", c.name, c.brief));
        }
    }
    Ok(())
}

fn cmd_log<const BUFFER_SIZE: usize, const MAX_CLIENTS: usize>(
    cmd: &ParsedCommand<'_>,
    log: &RingLog<'_, BUFFER_SIZE, MAX_CLIENTS>,
    out: &dyn Sink,
) -> Result<(), ConsoleError> {
    let start = cmd.int_arg(0).ok_or(ConsoleError::InvalidValue)?;
    let end = cmd.int_arg(1).ok_or(ConsoleError::InvalidValue)?;

    // Usage-error text is already on `out` when this fails.
    if log.print_lines(out, start, end) {
        Ok(())
    } else {
        Err(ConsoleError::BadRange)
    }
}

fn cmd_stats<const BUFFER_SIZE: usize, const MAX_CLIENTS: usize>(
    log: &RingLog<'_, BUFFER_SIZE, MAX_CLIENTS>,
    out: &dyn Sink,
) -> Result<(), ConsoleError> {
    query::write_fmt(out, format_args!("capacity: {} bytes\n", log.capacity()));
    query::write_fmt(out, format_args!("cursor: {}\n", log.write_index()));
    query::write_fmt(out, format_args!("clients: {}\n", log.client_count()));
    query::write_fmt(out, format_args!("enabled: {}\n", log.is_enabled()));
    Ok(())
}
