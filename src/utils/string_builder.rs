use std::iter::Iterator;

use crate::types::snapshot::Snapshot;

/// A helper for building a snapshot in-order based on an original snapshot
/// and a series of insertions, deletions, and copies applied to it. All
/// lengths are UTF-16 code units. The methods must be called in-order.
pub struct StringBuilder<'a> {
    original: Box<dyn Iterator<Item = u16> + 'a>,
    buffer: Vec<u16>,
    remaining: usize,
}

impl StringBuilder<'_> {
    pub fn new(original: &Snapshot) -> StringBuilder<'_> {
        StringBuilder {
            original: Box::new(original.units().iter().copied()),
            buffer: Vec::with_capacity(original.len()),
            remaining: original.len(),
        }
    }

    /// Insert code units at the end of the built buffer.
    pub fn insert(&mut self, units: &[u16]) { self.buffer.extend_from_slice(units); }

    /// Skip copying `length` code units from the original to the built
    /// buffer.
    pub fn delete(&mut self, length: usize) {
        debug_assert!(length <= self.remaining, "Deleting past the end");

        if length == 0 {
            return;
        }

        self.original.nth(length - 1);
        self.remaining = self.remaining.saturating_sub(length);
    }

    /// Copy `length` code units from the original to the built buffer.
    pub fn retain(&mut self, length: usize) {
        debug_assert!(length <= self.remaining, "Retaining past the end");

        self.buffer.extend(self.original.by_ref().take(length));
        self.remaining = self.remaining.saturating_sub(length);
    }

    /// Copy everything that is left of the original.
    pub fn retain_rest(&mut self) { self.retain(self.remaining); }

    /// Returns the currently built snapshot and clears the buffer to allow
    /// consuming the result incrementally.
    pub fn take(&mut self) -> Snapshot { Snapshot::new(std::mem::take(&mut self.buffer)) }
}
