//! Command line parser
//!
//! Simple split on whitespace. The widest command (`log <start> <end>`)
//! takes two arguments, so two slots are enough.

/// Parsed command with up to 2 arguments
#[derive(Debug, Clone)]
pub struct ParsedCommand<'a> {
    /// The command name (first token)
    pub command: &'a str,
    /// Up to 2 arguments
    pub args: [Option<&'a str>; 2],
}

impl<'a> ParsedCommand<'a> {
    /// Create empty command
    pub const fn empty() -> Self {
        Self {
            command: "",
            args: [None, None],
        }
    }

    /// Get argument by index (0-based)
    pub fn arg(&self, idx: usize) -> Option<&'a str> {
        self.args.get(idx).copied().flatten()
    }

    /// Parse argument `idx` as a signed line number.
    ///
    /// Missing arguments read as 0 (the "not given" value of the query
    /// API); a present but non-numeric argument is `None`.
    pub fn int_arg(&self, idx: usize) -> Option<i32> {
        match self.arg(idx) {
            None => Some(0),
            Some(s) => s.parse().ok(),
        }
    }
}

/// Parse a command line into command and arguments
pub fn parse_line(line: &str) -> ParsedCommand<'_> {
    let mut parts = line.split_whitespace();

    let command = parts.next().unwrap_or("");

    let mut args = [None, None];
    for (i, arg) in parts.take(2).enumerate() {
        args[i] = Some(arg);
    }

    ParsedCommand { command, args }
}
