//! Line-window query over the two ring spans.
//!
//! No line index exists, so a query is two forward scans: a skip pass that
//! counts newlines until the window starts, then a print pass that copies
//! bytes verbatim until the window is full. Both passes treat a NUL byte as
//! "end of valid history": the region past the logical end of a not-yet-
//! wrapped ring is zero-filled and never written.

use core::fmt;

use crate::sink::Sink;

/// Lines printed when the caller asks for the default window.
pub const DEFAULT_WINDOW: usize = 10;

/// "As many lines as exist": countdown that cannot realistically hit zero.
const UNBOUNDED: usize = usize::MAX;

/// A resolved query window: lines to skip, then lines to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineWindow {
    pub skip: usize,
    pub requested: usize,
}

/// The two rejectable start/end combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowError {
    /// Range mode with a negative start.
    NegativeStart,
    /// Range mode with `end <= start`.
    EmptyRange,
}

impl WindowError {
    /// Verbatim usage-error text; part of the observable contract.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NegativeStart => "<start> can not be negative when requesting a range\n",
            Self::EmptyRange => "<start> must be smaller than <end>\n",
        }
    }
}

impl LineWindow {
    /// Map the signed `start`/`end` request onto a skip count and a line
    /// countdown.
    ///
    /// A zero `start` always selects the default window, even with a
    /// nonzero `end`: range mode needs both parameters nonzero.
    pub fn resolve(start: i32, end: i32) -> Result<Self, WindowError> {
        let mut requested = DEFAULT_WINDOW;
        let mut skip = 0;

        if start != 0 && end == 0 {
            /* only count given */
            requested = if start > 0 { start as usize } else { UNBOUNDED };
        } else if start != 0 && end != 0 {
            if start < 0 {
                return Err(WindowError::NegativeStart);
            }
            if end < 0 {
                requested = UNBOUNDED;
            } else {
                if end <= start {
                    return Err(WindowError::EmptyRange);
                }
                requested = (end - start) as usize + 1;
            }
            skip = start as usize;
        }

        Ok(Self { skip, requested })
    }
}

/// Skip pass: advance `i` through `buf` consuming `skip` newlines.
///
/// Stops when the skip budget or the span is exhausted, or at a NUL byte
/// (end of valid history). When the budget runs out on a newline, `i` ends
/// up one past it, so a following print pass starts on the next line.
fn skip_lines(skip: &mut usize, i: &mut usize, buf: &[u8]) {
    while *i < buf.len() && *skip > 0 {
        let c = buf[*i];
        if c == b'\n' {
            *skip -= 1;
        }
        if c == 0 {
            return;
        }
        *i += 1;
    }
}

/// Print pass: copy bytes to `out`, decrementing `remaining` per newline.
///
/// Stops when the countdown or the span is exhausted, or at a NUL byte. A
/// trailing line without a newline is copied but not counted.
fn print_span(out: &dyn Sink, remaining: &mut usize, buf: &[u8]) {
    for &c in buf {
        if *remaining == 0 {
            return;
        }
        if c == 0 {
            return;
        }
        out.write_byte(c);
        if c == b'\n' {
            *remaining -= 1;
            if *remaining == 0 {
                return;
            }
        }
    }
}

/// Run a resolved window over the two spans and frame the output.
///
/// The epilogue preserves the historical condition exactly: `history clean`
/// is emitted only when the countdown never moved (zero lines consumed),
/// otherwise a closing delimiter and the consumed-line count.
pub(crate) fn print_window(out: &dyn Sink, window: &LineWindow, span_a: &[u8], span_b: &[u8]) {
    let mut skip = window.skip;
    let mut remaining = window.requested;

    out.write_all(b"----\n");

    let mut i = 0;
    skip_lines(&mut skip, &mut i, span_a);
    if skip == 0 {
        print_span(out, &mut remaining, &span_a[i..]);
    }
    i = 0;
    if skip > 0 {
        skip_lines(&mut skip, &mut i, span_b);
    }
    if skip == 0 {
        print_span(out, &mut remaining, &span_b[i..]);
    }

    let printed = window.requested - remaining;
    if printed == 0 {
        out.write_all(b"history clean\n");
    } else {
        out.write_all(b"----\n");
        write_fmt(out, format_args!("{} lines\n", printed));
    }
}

/// Format directly into a sink through a `core::fmt::Write` shim.
pub(crate) fn write_fmt(out: &dyn Sink, args: fmt::Arguments<'_>) {
    struct SinkWriter<'a> {
        out: &'a dyn Sink,
    }

    impl fmt::Write for SinkWriter<'_> {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            self.out.write_all(s.as_bytes());
            Ok(())
        }
    }

    let mut writer = SinkWriter { out };
    let _ = fmt::write(&mut writer, args);
}
