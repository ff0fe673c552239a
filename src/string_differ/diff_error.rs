use thiserror::Error;

/// Returned when the difference between two snapshots can't be described as
/// a single edit made at one cursor. Callers recover by replacing the whole
/// document.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffError {
    /// The snapshots differ at more than one place, for example two
    /// independent substitutions.
    #[error("The change consists of multiple separate edits")]
    TooComplicated,

    /// There is exactly one removal and one insertion, but they happened at
    /// different offsets, which a single cursor can't produce.
    #[error(
        "Text was removed at offset {removed_at} but inserted at offset {inserted_at}, which \
         isn't a single edit"
    )]
    InsertionsDontMatchRemovals {
        /// Start of the removed code units in the old snapshot
        removed_at: usize,
        /// Start of the inserted code units in the new snapshot
        inserted_at: usize,
    },
}
