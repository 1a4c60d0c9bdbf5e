//! Multi-sink fan-out writer.
//!
//! One logical write, many destinations: every byte goes to a fixed primary
//! sink and is mirrored to each registered client. Clients live in a fixed
//! slot table (`MAX_CLIENTS` slots, no allocation) and are borrowed, never
//! owned; the borrow ties each registration to the sink's lifetime.

use crate::sink::Sink;

/// Registration identity: two handles are the same client iff they point at
/// the same object. Comparing thin data pointers sidesteps vtable-identity
/// surprises across codegen units.
fn same_sink(a: &dyn Sink, b: &dyn Sink) -> bool {
    core::ptr::eq(a as *const dyn Sink as *const u8, b as *const dyn Sink as *const u8)
}

/// Fan-out writer over a fixed client table.
pub struct SinkFanout<'a, const MAX_CLIENTS: usize> {
    primary: &'a dyn Sink,
    clients: [Option<&'a dyn Sink>; MAX_CLIENTS],
    active: usize,
    enabled: bool,
}

impl<'a, const MAX_CLIENTS: usize> SinkFanout<'a, MAX_CLIENTS> {
    /// Create a fan-out around its primary sink.
    pub fn new(primary: &'a dyn Sink, enabled: bool) -> Self {
        Self {
            primary,
            clients: [None; MAX_CLIENTS],
            active: 0,
            enabled,
        }
    }

    /// Register a mirror client.
    ///
    /// Idempotent: re-adding a registered sink succeeds without consuming a
    /// second slot. Returns `false` only when the table is full, in which
    /// case nothing changes.
    pub fn add_client(&mut self, sink: &'a dyn Sink) -> bool {
        if self.clients.iter().flatten().any(|c| same_sink(*c, sink)) {
            return true;
        }
        for slot in self.clients.iter_mut() {
            if slot.is_none() {
                *slot = Some(sink);
                self.active += 1;
                return true;
            }
        }
        false
    }

    /// Unregister a mirror client. Returns `false` if it was not registered.
    pub fn remove_client(&mut self, sink: &dyn Sink) -> bool {
        for slot in self.clients.iter_mut() {
            if let Some(c) = slot {
                if same_sink(*c, sink) {
                    *slot = None;
                    self.active -= 1;
                    return true;
                }
            }
        }
        false
    }

    /// Number of registered clients.
    pub fn client_count(&self) -> usize {
        self.active
    }

    /// Suppress or resume all output.
    pub fn enable(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Write one byte to the primary sink and mirror it to every client.
    ///
    /// Disabled writers report success (1) without touching any sink. The
    /// primary's byte count is the result; mirror writes are best-effort
    /// and their results are discarded.
    pub fn write(&self, byte: u8) -> usize {
        if !self.enabled {
            return 1;
        }

        let ret = self.primary.write_byte(byte);

        if self.active > 0 {
            for client in self.clients.iter().flatten() {
                client.write_byte(byte);
            }
        }
        ret
    }
}
