use unicode_segmentation::UnicodeSegmentation;

use crate::types::snapshot::Snapshot;

/// Offsets (in UTF-16 code units) at which a snapshot may be split without
/// breaking an extended grapheme cluster. Surrogate pairs, combining marks and
/// emoji sequences are kept whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphemeBoundaries {
    is_boundary: Vec<bool>,
}

impl GraphemeBoundaries {
    pub fn of(snapshot: &Snapshot) -> Self {
        let mut is_boundary = vec![false; snapshot.len() + 1];
        is_boundary[0] = true;

        // Lone surrogates decode to U+FFFD which is a single code unit as well,
        // so the offsets of the decoded text line up with the snapshot.
        let mut offset = 0;
        for grapheme in snapshot.to_string_lossy().graphemes(true) {
            offset += grapheme.encode_utf16().count();
            if let Some(entry) = is_boundary.get_mut(offset) {
                *entry = true;
            }
        }

        debug_assert_eq!(offset, snapshot.len(), "Decoded length must match");

        Self { is_boundary }
    }

    pub fn is_boundary(&self, offset: usize) -> bool {
        self.is_boundary.get(offset).copied().unwrap_or(false)
    }

    /// Splits `units` (the snapshot this was computed for) within `range` at
    /// every boundary. `range` has to start and end on boundaries.
    pub fn clusters<'a>(&self, units: &'a [u16], range: std::ops::Range<usize>) -> Vec<&'a [u16]> {
        debug_assert!(
            self.is_boundary(range.start) && self.is_boundary(range.end),
            "Cluster range {range:?} must start and end on grapheme boundaries"
        );

        let mut clusters = Vec::new();
        let mut start = range.start;
        for offset in range.start + 1..=range.end {
            if self.is_boundary(offset) {
                clusters.push(&units[start..offset]);
                start = offset;
            }
        }

        clusters
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn boundaries(text: &str) -> Vec<usize> {
        let snapshot = Snapshot::from(text);
        let boundaries = GraphemeBoundaries::of(&snapshot);

        (0..=snapshot.len())
            .filter(|offset| boundaries.is_boundary(*offset))
            .collect()
    }

    #[test]
    fn test_ascii() {
        assert_eq!(boundaries("abc"), vec![0, 1, 2, 3]);
        assert_eq!(boundaries(""), vec![0]);
    }

    #[test]
    fn test_surrogate_pairs() {
        assert_eq!(boundaries("a😀b"), vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_combining_sequences() {
        assert_eq!(boundaries("e\u{301}x"), vec![0, 2, 3]);
        assert_eq!(boundaries("👍🏽"), vec![0, 4]);
    }

    #[test]
    fn test_clusters() {
        let snapshot = Snapshot::from("a😀b");
        let boundaries = GraphemeBoundaries::of(&snapshot);
        let clusters = boundaries.clusters(snapshot.units(), 1..4);

        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].len(), 2);
        assert_eq!(clusters[1], &[u16::from(b'b')]);
    }
}
