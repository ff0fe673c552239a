use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `Selection` is a pair of UTF-16 code unit offsets. Views always report
/// forward selections (`start <= end`), the composer engine may answer with a
/// backwards one where the anchor (`start`) comes after the focus (`end`).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self { Self { start, end } }

    /// A collapsed selection at `index`.
    #[must_use]
    pub fn caret(index: usize) -> Self { Self::new(index, index) }

    #[must_use]
    pub fn is_caret(&self) -> bool { self.start == self.end }

    #[must_use]
    pub fn is_backwards(&self) -> bool { self.start > self.end }

    /// Swaps anchor and focus.
    #[must_use]
    pub fn reversed(&self) -> Self { Self::new(self.end, self.start) }

    #[must_use]
    pub fn normalized(&self) -> Self {
        if self.is_backwards() {
            self.reversed()
        } else {
            *self
        }
    }

    /// The selected code units regardless of direction.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        let normalized = self.normalized();
        normalized.start..normalized.end
    }

    #[must_use]
    pub fn len(&self) -> usize { self.range().len() }
}

impl From<Range<usize>> for Selection {
    fn from(range: Range<usize>) -> Self { Self::new(range.start, range.end) }
}
