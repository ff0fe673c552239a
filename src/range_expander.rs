use std::ops::Range;

use log::{debug, error};
use thiserror::Error;

use crate::types::{atomic_span::AtomicSpan, replacement::Replacement, snapshot::Snapshot};

/// Contract violations of the range expansion functions. These indicate a
/// bug in the caller and are never recovered from silently.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    #[error("Cannot expand an empty range starting at {start}, the length must be positive")]
    InvalidRangeLength { start: usize },
}

/// Widens `range` until every atomic span it intersects lies completely
/// within it. Spans only touching the range don't widen it. Overlapping spans
/// are followed transitively, so expanding an expanded range is a no-op. The
/// result is clamped to the length of `content`.
///
/// ```
/// use composer_reconcile::{AtomicSpan, Snapshot, expand};
///
/// let content = Snapshot::from("0123456789");
/// assert_eq!(expand(&content, &[AtomicSpan::new(6, 10)], 3..7), 3..10);
/// assert_eq!(expand(&content, &[], 3..7), 3..7);
/// ```
#[must_use]
pub fn expand(content: &Snapshot, spans: &[AtomicSpan], range: Range<usize>) -> Range<usize> {
    let mut expanded = range;

    loop {
        let intersecting = spans.iter().filter(|span| span.intersects(&expanded));

        let (min_span_start, max_span_end) = intersecting.fold(
            (expanded.end, expanded.end),
            |(min_start, max_end), span| (min_start.min(span.start), max_end.max(span.end)),
        );

        let next = expanded.start.min(min_span_start)..expanded.end.max(max_span_end);
        if next == expanded {
            break;
        }

        expanded = next;
    }

    expanded.start.min(content.len())..expanded.end.min(content.len())
}

/// Same as `expand` but for a range given by its `start` and `length`.
///
/// # Errors
///
/// Returns `RangeError::InvalidRangeLength` when `length` is zero.
pub fn expand_by_length(
    content: &Snapshot,
    spans: &[AtomicSpan],
    start: usize,
    length: usize,
) -> Result<Range<usize>, RangeError> {
    if length == 0 {
        error!("Asked to expand an empty range at {start}");
        return Err(RangeError::InvalidRangeLength { start });
    }

    Ok(expand(content, spans, start..start + length))
}

/// Name under which platform code knows `expand_by_length`.
///
/// # Errors
///
/// Returns `RangeError::InvalidRangeLength` when `length` is zero.
pub fn extend_range_to_replacement_spans(
    content: &Snapshot,
    spans: &[AtomicSpan],
    start: usize,
    length: usize,
) -> Result<Range<usize>, RangeError> {
    expand_by_length(content, spans, start, length)
}

/// Moves an insertion that landed strictly inside an atomic span to the
/// start of that span when the resulting text is the same.
///
/// Trimming the common prefix places an ambiguous insertion as far right as
/// possible, so typing the first characters of a span right before it is
/// reported inside the span. Expanding that would replace the whole span.
#[must_use]
pub fn move_insertion_before_span(
    content: &Snapshot,
    spans: &[AtomicSpan],
    replacement: Replacement,
) -> Replacement {
    let at = replacement.range.start;
    if !replacement.range.is_empty() || at > content.len() {
        return replacement;
    }

    let Some(span) = spans.iter().find(|span| span.intersects(&(at..at))) else {
        return replacement;
    };

    // Inserting `text` after `skipped` equals inserting `moved` before it
    // exactly when `skipped + text == moved + skipped`.
    let skipped = &content.units()[span.start..at];
    let text = replacement.text.units();
    let combined: Vec<u16> = skipped.iter().chain(text).copied().collect();
    let (moved, rest) = combined.split_at(text.len());

    if rest != skipped {
        return replacement;
    }

    debug!("Moved insertion at {at} before the atomic span at {}", span.start);
    Replacement::new(span.start..span.start, Snapshot::from_units(moved))
}
