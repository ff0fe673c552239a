use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An inline region of the view, such as a mention pill, that can only be
/// selected or edited as a whole.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AtomicSpan {
    pub start: usize,
    pub end: usize,
}

impl AtomicSpan {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "Atomic spans cover at least one code unit");

        Self { start, end }
    }

    #[must_use]
    pub fn range(&self) -> Range<usize> { self.start..self.end }

    /// Whether the span shares at least one code unit with `range`. Spans
    /// merely touching a boundary don't intersect. An empty `range` is a
    /// position and only intersects spans that strictly contain it.
    #[must_use]
    pub fn intersects(&self, range: &Range<usize>) -> bool {
        if range.is_empty() {
            self.start < range.start && range.start < self.end
        } else {
            self.start < range.end && range.start < self.end
        }
    }

    #[must_use]
    pub fn is_contained_in(&self, range: &Range<usize>) -> bool {
        range.start <= self.start && self.end <= range.end
    }
}

impl From<Range<usize>> for AtomicSpan {
    fn from(range: Range<usize>) -> Self { Self::new(range.start, range.end) }
}
