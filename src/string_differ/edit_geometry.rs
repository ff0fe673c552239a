use std::ops::Range;

use log::debug;

use crate::{
    string_differ::{
        DiffOptions, diff_error::DiffError, grapheme_boundaries::GraphemeBoundaries,
        units_match,
    },
    types::{replacement::Replacement, snapshot::Snapshot},
    utils::raw_operation::RawOperation,
};

/// A grapheme cluster of a snapshot, compared according to `DiffOptions`.
#[derive(Debug, Clone, Copy)]
struct Cluster<'a> {
    units: &'a [u16],
    nbsp_as_space: bool,
}

impl PartialEq for Cluster<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.units.len() == other.units.len()
            && self
                .units
                .iter()
                .zip(other.units)
                .all(|(a, b)| units_match(*a, *b, self.nbsp_as_space))
    }
}

fn clusters<'a>(
    (snapshot, boundaries): (&'a Snapshot, &GraphemeBoundaries),
    range: Range<usize>,
    nbsp_as_space: bool,
) -> Vec<Cluster<'a>> {
    boundaries
        .clusters(snapshot.units(), range)
        .into_iter()
        .map(|units| Cluster {
            units,
            nbsp_as_space,
        })
        .collect()
}

/// Verifies that the trimmed `replacement` between `old` and `new` is one
/// edit made at a single cursor. The trimmed regions are diffed cluster by
/// cluster; unchanged clusters inside them mean the snapshots differ in
/// several places.
pub fn check_single_edit(
    old: (&Snapshot, &GraphemeBoundaries),
    new: (&Snapshot, &GraphemeBoundaries),
    replacement: &Replacement,
    options: &DiffOptions,
) -> Result<(), DiffError> {
    let inserted: Range<usize> =
        replacement.range.start..replacement.range.start + replacement.text.len();

    let removed_clusters = clusters(old, replacement.range.clone(), options.nbsp_as_space);
    let inserted_clusters = clusters(new, inserted, options.nbsp_as_space);

    if removed_clusters.len() + inserted_clusters.len() > options.geometry_check_limit {
        debug!(
            "Skipping edit geometry check for {} + {} clusters",
            removed_clusters.len(),
            inserted_clusters.len()
        );
        return Ok(());
    }

    let mut old_offset = replacement.range.start;
    let mut new_offset = replacement.range.start;
    let mut removals: Vec<usize> = Vec::new();
    let mut insertions: Vec<usize> = Vec::new();

    for operation in RawOperation::vec_from(&removed_clusters, &inserted_clusters) {
        let length: usize = operation
            .tokens()
            .iter()
            .map(|cluster| cluster.units.len())
            .sum();

        match operation {
            RawOperation::Equal(..) => {
                old_offset += length;
                new_offset += length;
            }
            RawOperation::Delete(..) => {
                removals.push(old_offset);
                old_offset += length;
            }
            RawOperation::Insert(..) => {
                insertions.push(new_offset);
                new_offset += length;
            }
        }
    }

    if removals.len() > 1 || insertions.len() > 1 {
        return Err(DiffError::TooComplicated);
    }

    match (removals.first(), insertions.first()) {
        (Some(&removed_at), Some(&inserted_at)) if removed_at != inserted_at => {
            Err(DiffError::InsertionsDontMatchRemovals {
                removed_at,
                inserted_at,
            })
        }
        _ => Ok(()),
    }
}
