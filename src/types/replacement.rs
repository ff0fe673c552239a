use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{types::snapshot::Snapshot, utils::string_builder::StringBuilder};

/// A single contiguous edit: the code units of `range` in the old snapshot
/// are removed and `text` is spliced in their place.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub range: Range<usize>,
    pub text: Snapshot,
}

impl Replacement {
    #[must_use]
    pub fn new(range: Range<usize>, text: impl Into<Snapshot>) -> Self {
        debug_assert!(range.start <= range.end, "Replacement range must not be reversed");

        Self {
            range,
            text: text.into(),
        }
    }

    /// Nothing is removed, only inserted.
    #[must_use]
    pub fn is_insertion(&self) -> bool { self.range.is_empty() && !self.text.is_empty() }

    /// Nothing is inserted, only removed.
    #[must_use]
    pub fn is_deletion(&self) -> bool { !self.range.is_empty() && self.text.is_empty() }

    /// Where the caret ends up after the replacement has been applied.
    #[must_use]
    pub fn caret_after(&self) -> usize { self.range.start + self.text.len() }

    /// Applies the replacement to `original`.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if the range exceeds `original`.
    #[must_use]
    pub fn apply(&self, original: &Snapshot) -> Snapshot {
        debug_assert!(
            self.range.end <= original.len(),
            "Replacement range {:?} exceeds the snapshot of length {}",
            self.range,
            original.len()
        );

        let mut builder = StringBuilder::new(original);
        builder.retain(self.range.start);
        builder.delete(self.range.len());
        builder.insert(self.text.units());
        builder.retain_rest();

        builder.take()
    }
}
