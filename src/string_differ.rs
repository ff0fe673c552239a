mod diff_error;
mod edit_geometry;
mod grapheme_boundaries;

pub use diff_error::DiffError;
use edit_geometry::check_single_edit;
use grapheme_boundaries::GraphemeBoundaries;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    consts::{DEFAULT_GEOMETRY_CHECK_LIMIT, NO_BREAK_SPACE, SPACE},
    types::{replacement::Replacement, snapshot::Snapshot},
};

/// How strictly the differ decides whether two snapshots are one edit apart.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiffPolicy {
    /// Fail with a `DiffError` when the snapshots differ in more than one
    /// place or the removal and insertion are at different offsets.
    #[default]
    SingleEdit,

    /// Always succeed with the span between the common prefix and suffix,
    /// even when it is larger than the actual change.
    Trimmed,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOptions {
    pub policy: DiffPolicy,

    /// Largest number of grapheme clusters (removed plus inserted) for which
    /// the single edit check runs.
    pub geometry_check_limit: usize,

    /// Compare U+00A0 NO-BREAK SPACE and U+0020 SPACE as equal while
    /// trimming. Views rendering HTML often turn one into the other.
    pub nbsp_as_space: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            policy: DiffPolicy::default(),
            geometry_check_limit: DEFAULT_GEOMETRY_CHECK_LIMIT,
            nbsp_as_space: false,
        }
    }
}

/// Computes the replacement turning `old` into `new` with the default
/// options. Returns `Ok(None)` when the snapshots are identical.
///
/// ```
/// use composer_reconcile::{Replacement, Snapshot, diff};
///
/// let replacement = diff(&Snapshot::from("te"), &Snapshot::from("text")).unwrap();
/// assert_eq!(replacement, Some(Replacement::new(2..2, "xt")));
/// ```
///
/// # Errors
///
/// Returns a `DiffError` when the change isn't a single contiguous edit. The
/// caller is expected to fall back to replacing the whole document.
pub fn diff(old: &Snapshot, new: &Snapshot) -> Result<Option<Replacement>, DiffError> {
    diff_with_options(old, new, &DiffOptions::default())
}

/// Same as `diff` with explicit `options`.
///
/// # Errors
///
/// Returns a `DiffError` when the policy is `DiffPolicy::SingleEdit` and the
/// change isn't a single contiguous edit.
pub fn diff_with_options(
    old: &Snapshot,
    new: &Snapshot,
    options: &DiffOptions,
) -> Result<Option<Replacement>, DiffError> {
    let old_boundaries = GraphemeBoundaries::of(old);
    let new_boundaries = GraphemeBoundaries::of(new);

    let Some(replacement) = trim(old, &old_boundaries, new, &new_boundaries, options) else {
        return Ok(None);
    };

    if options.policy == DiffPolicy::SingleEdit {
        check_single_edit(
            (old, &old_boundaries),
            (new, &new_boundaries),
            &replacement,
            options,
        )?;
    }

    Ok(Some(replacement))
}

/// Strips the longest common prefix and suffix of `old` and `new` and returns
/// what remains as a replacement. Never splits a grapheme cluster of either
/// snapshot, so the result can be larger than the raw code unit difference.
#[must_use]
pub fn trim_common_affixes(
    old: &Snapshot,
    new: &Snapshot,
    options: &DiffOptions,
) -> Option<Replacement> {
    trim(
        old,
        &GraphemeBoundaries::of(old),
        new,
        &GraphemeBoundaries::of(new),
        options,
    )
}

fn trim(
    old: &Snapshot,
    old_boundaries: &GraphemeBoundaries,
    new: &Snapshot,
    new_boundaries: &GraphemeBoundaries,
    options: &DiffOptions,
) -> Option<Replacement> {
    let (old_units, new_units) = (old.units(), new.units());
    let shorter_length = old.len().min(new.len());

    let mut prefix = old_units
        .iter()
        .zip(new_units)
        .take_while(|(a, b)| units_match(**a, **b, options.nbsp_as_space))
        .count();
    while !(old_boundaries.is_boundary(prefix) && new_boundaries.is_boundary(prefix)) {
        prefix -= 1;
    }

    let mut suffix = old_units
        .iter()
        .rev()
        .zip(new_units.iter().rev())
        .take(shorter_length - prefix)
        .take_while(|(a, b)| units_match(**a, **b, options.nbsp_as_space))
        .count();
    while !(old_boundaries.is_boundary(old.len() - suffix)
        && new_boundaries.is_boundary(new.len() - suffix))
    {
        suffix -= 1;
    }

    let removed = prefix..old.len() - suffix;
    let inserted = new.slice(prefix..new.len() - suffix);

    if removed.is_empty() && inserted.is_empty() {
        return None;
    }

    Some(Replacement::new(removed, inserted))
}

fn units_match(a: u16, b: u16, nbsp_as_space: bool) -> bool {
    a == b || (nbsp_as_space && is_space(a) && is_space(b))
}

fn is_space(unit: u16) -> bool { unit == SPACE || unit == NO_BREAK_SPACE }
