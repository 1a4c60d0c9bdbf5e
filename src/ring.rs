//! Bounded ring history over the fan-out writer.
//!
//! Every byte is archived into a fixed circular buffer before it is handed
//! to the fan-out, so the most recent `BUFFER_SIZE` bytes of output can be
//! replayed later even if every sink was deaf at the time. No line index is
//! kept; queries re-derive line boundaries by scanning (see [`crate::query`]).

use crate::fanout::SinkFanout;
use crate::query;
use crate::sink::Sink;

/// Ring-buffered log proxy.
///
/// Composition, not inheritance: the ring owns a [`SinkFanout`] and
/// delegates to it after archiving, which fixes the ordering guarantee
/// (archive first, fan out second) in the call structure itself.
pub struct RingLog<'a, const BUFFER_SIZE: usize, const MAX_CLIENTS: usize> {
    fanout: SinkFanout<'a, MAX_CLIENTS>,
    buffer: [u8; BUFFER_SIZE],
    write_idx: usize,
}

impl<'a, const BUFFER_SIZE: usize, const MAX_CLIENTS: usize>
    RingLog<'a, BUFFER_SIZE, MAX_CLIENTS>
{
    /// Create an enabled-or-not ring log writing to `primary`.
    pub fn new(primary: &'a dyn Sink, enabled: bool) -> Self {
        Self {
            fanout: SinkFanout::new(primary, enabled),
            buffer: [0u8; BUFFER_SIZE],
            write_idx: 0,
        }
    }

    /// Archive one byte, then fan it out.
    ///
    /// Disabled: no-op reported as success (1); the buffer and the default
    /// window are untouched. Enabled: the byte lands in the ring before any
    /// sink sees it, so a sink failure never loses history. Returns the
    /// primary sink's byte count.
    pub fn write(&mut self, byte: u8) -> usize {
        if !self.fanout.is_enabled() {
            return 1;
        }

        self.buffer[self.write_idx] = byte;
        self.write_idx += 1;
        if self.write_idx == BUFFER_SIZE {
            self.write_idx = 0;
        }

        self.fanout.write(byte)
    }

    /// Write a whole slice through [`Self::write`], returning the sum of
    /// the per-byte results.
    pub fn write_all(&mut self, bytes: &[u8]) -> usize {
        let mut n = 0;
        for &b in bytes {
            n += self.write(b);
        }
        n
    }

    /// The two physical spans of the ring, oldest first.
    ///
    /// Span A is `[write_idx, BUFFER_SIZE)`, the older bytes, still
    /// zero-filled past the logical end if the ring never wrapped. Span B
    /// is `[0, write_idx)`: the newer bytes. Chronological order is A
    /// then B; nothing is copied.
    pub fn buffer_view(&self) -> (&[u8], &[u8]) {
        (&self.buffer[self.write_idx..], &self.buffer[..self.write_idx])
    }

    /// Replay a window of buffered lines to `out`.
    ///
    /// `start`/`end` select the window:
    /// - `start == 0`: the default window of 10 lines.
    /// - `start > 0, end == 0`: the first `start` lines of currently
    ///   retained history (history older than the ring is gone, so "first"
    ///   means first-still-retained).
    /// - `start < 0, end == 0`: everything retained.
    /// - `start, end != 0`: range mode: skip `start` lines, then print
    ///   `end - start + 1` lines (`end < 0` for "through the end").
    ///
    /// Output is framed by a `----` delimiter line and closed either by
    /// `history clean` (nothing was consumed) or by a second delimiter and
    /// a printed-line count. Returns `false` only for the two usage errors,
    /// whose exact messages are written to `out` instead of any lines.
    pub fn print_lines(&self, out: &dyn Sink, start: i32, end: i32) -> bool {
        let window = match query::LineWindow::resolve(start, end) {
            Ok(w) => w,
            Err(e) => {
                out.write_all(e.message().as_bytes());
                return false;
            }
        };

        let (span_a, span_b) = self.buffer_view();
        query::print_window(out, &window, span_a, span_b);
        true
    }

    /// Ring capacity in bytes.
    pub fn capacity(&self) -> usize {
        BUFFER_SIZE
    }

    /// Current cursor position (next byte to be overwritten).
    pub fn write_index(&self) -> usize {
        self.write_idx
    }

    /// Register a mirror client on the underlying fan-out.
    pub fn add_client(&mut self, sink: &'a dyn Sink) -> bool {
        self.fanout.add_client(sink)
    }

    /// Unregister a mirror client.
    pub fn remove_client(&mut self, sink: &dyn Sink) -> bool {
        self.fanout.remove_client(sink)
    }

    /// Number of registered mirror clients.
    pub fn client_count(&self) -> usize {
        self.fanout.client_count()
    }

    /// Suppress or resume all archiving and output.
    pub fn enable(&mut self, enabled: bool) {
        self.fanout.enable(enabled);
    }

    pub fn is_enabled(&self) -> bool {
        self.fanout.is_enabled()
    }
}
