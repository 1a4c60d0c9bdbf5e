//! # buflog
//!
//! Buffered log proxy for memory-constrained targets: emit bytes once,
//! mirror them to any number of registered sinks, and keep the most recent
//! bytes in a fixed ring for `tail`-style replay by line number or range.
//!
//! ## Architecture
//!
//! All output enters through [`RingLog::write`]: the byte is archived in
//! the ring, then handed to the [`SinkFanout`], which writes the primary
//! sink and mirrors every registered client. Queries run the other way -
//! [`RingLog::print_lines`] scans the ring's two physical spans, counting
//! newlines on the fly, and copies the requested line window to a
//! destination sink. No heap, no locks, single execution context.
//!
//! ```
//! use buflog::{CaptureSink, RingLog};
//!
//! let console = CaptureSink::<64>::new();
//! let mut log: RingLog<32, 2> = RingLog::new(&console, true);
//! log.write_all(b"boot ok\nlink up\n");
//!
//! let out = CaptureSink::<64>::new();
//! assert!(log.print_lines(&out, 0, 0));
//! assert!(out.as_str().contains("boot ok\n"));
//! ```

#![cfg_attr(not(test), no_std)]

pub mod console;
pub mod fanout;
pub mod query;
pub mod ring;
pub mod sink;

pub use fanout::SinkFanout;
pub use query::{LineWindow, WindowError, DEFAULT_WINDOW};
pub use ring::RingLog;
pub use sink::{CaptureSink, NullSink, Sink};
