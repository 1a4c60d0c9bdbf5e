//! Byte sink abstraction.
//!
//! Everything the proxy talks to (the primary output, mirrored clients,
//! query destinations) is a [`Sink`]: a destination that accepts one byte
//! at a time. Sinks are registered by shared reference and use interior
//! mutability, so a single sink object can be both registered as a mirror
//! and handed out as a query destination.

use core::cell::{Cell, UnsafeCell};

/// A byte-at-a-time output destination.
///
/// `write_byte` returns the number of bytes accepted (0 or 1), mirroring
/// the byte-count convention of serial drivers. Implementations must not
/// panic; a full or broken sink reports 0.
pub trait Sink {
    /// Write a single byte, returning how many bytes were accepted.
    fn write_byte(&self, byte: u8) -> usize;

    /// Write a byte slice, returning how many bytes were accepted.
    fn write_all(&self, bytes: &[u8]) -> usize {
        let mut n = 0;
        for &b in bytes {
            n += self.write_byte(b);
        }
        n
    }
}

/// Sink that discards everything but counts what it swallowed.
#[derive(Default)]
pub struct NullSink {
    written: Cell<usize>,
}

impl NullSink {
    pub const fn new() -> Self {
        Self {
            written: Cell::new(0),
        }
    }

    /// Total bytes accepted so far.
    pub fn written(&self) -> usize {
        self.written.get()
    }
}

impl Sink for NullSink {
    fn write_byte(&self, _byte: u8) -> usize {
        self.written.set(self.written.get() + 1);
        1
    }
}

/// Fixed-capacity capture sink.
///
/// Collects bytes into a static buffer; overflow bytes are dropped and
/// counted, never blocking the writer. Single execution context only:
/// interior mutability is plain `UnsafeCell` + `Cell`, the type is not
/// `Sync`, and accessors must not be held across a write.
pub struct CaptureSink<const N: usize> {
    buf: UnsafeCell<[u8; N]>,
    len: Cell<usize>,
    dropped: Cell<usize>,
}

impl<const N: usize> CaptureSink<N> {
    pub const fn new() -> Self {
        Self {
            buf: UnsafeCell::new([0u8; N]),
            len: Cell::new(0),
            dropped: Cell::new(0),
        }
    }

    /// Captured bytes, oldest first.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: single execution context; the only writer is write_byte,
        // which is never live while this shared borrow is held.
        unsafe { &(&*self.buf.get())[..self.len.get()] }
    }

    /// Captured bytes as UTF-8, lossy on invalid sequences.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(self.as_bytes()).unwrap_or("<invalid utf8>")
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    pub fn is_empty(&self) -> bool {
        self.len.get() == 0
    }

    /// Bytes rejected because the buffer was full.
    pub fn dropped(&self) -> usize {
        self.dropped.get()
    }

    /// Forget everything captured so far.
    pub fn clear(&self) {
        self.len.set(0);
        self.dropped.set(0);
    }
}

impl<const N: usize> Default for CaptureSink<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Sink for CaptureSink<N> {
    fn write_byte(&self, byte: u8) -> usize {
        let len = self.len.get();
        if len >= N {
            self.dropped.set(self.dropped.get() + 1);
            return 0;
        }
        // SAFETY: single execution context, index is in bounds, and no
        // shared borrow from as_bytes is live across this call.
        unsafe {
            (*self.buf.get())[len] = byte;
        }
        self.len.set(len + 1);
        1
    }
}
