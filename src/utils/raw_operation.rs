use std::fmt::Debug;

use crate::utils::myers_diff::myers_diff;

/// Diff operation over a run of tokens. Consecutive operations of the same
/// kind can be joined into a single run.
#[derive(Debug, Clone, PartialEq)]
pub enum RawOperation<T>
where
    T: PartialEq + Clone + Debug,
{
    Insert(Vec<T>),
    Delete(Vec<T>),
    Equal(Vec<T>),
}

impl<T> RawOperation<T>
where
    T: PartialEq + Clone + Debug,
{
    /// Diffs `old` and `new` and joins the single-token operations returned by
    /// Myers' algorithm into runs. Inserts and deletes between two equal runs
    /// are reordered so that the deletes come first.
    pub fn vec_from(old: &[T], new: &[T]) -> Vec<Self> {
        let mut result: Vec<Self> = Vec::new();
        let mut pending_delete: Option<Self> = None;
        let mut pending_insert: Option<Self> = None;

        for operation in myers_diff(old, new) {
            match operation {
                RawOperation::Insert(..) => {
                    pending_insert = Some(match pending_insert.take() {
                        Some(previous) => previous.join(operation),
                        None => operation,
                    });
                }
                RawOperation::Delete(..) => {
                    pending_delete = Some(match pending_delete.take() {
                        Some(previous) => previous.join(operation),
                        None => operation,
                    });
                }
                RawOperation::Equal(..) => {
                    result.extend(pending_delete.take());
                    result.extend(pending_insert.take());

                    match result.pop() {
                        Some(previous @ RawOperation::Equal(..)) => {
                            result.push(previous.join(operation));
                        }
                        previous => {
                            result.extend(previous);
                            result.push(operation);
                        }
                    }
                }
            }
        }

        result.extend(pending_delete);
        result.extend(pending_insert);

        result
    }

    pub fn tokens(&self) -> &Vec<T> {
        match self {
            RawOperation::Insert(tokens)
            | RawOperation::Delete(tokens)
            | RawOperation::Equal(tokens) => tokens,
        }
    }

    /// Extends the operation with another operation. Only operations of the
    /// same type as self can be used to extend self, otherwise the function
    /// will panic.
    pub fn join(self, other: RawOperation<T>) -> RawOperation<T> {
        debug_assert!(
            std::mem::discriminant(&self) == std::mem::discriminant(&other),
            "Cannot extend operations of different types. This should have been handled before \
             calling this function."
        );

        match (self, other) {
            (RawOperation::Insert(self_tokens), RawOperation::Insert(other_tokens)) => {
                RawOperation::Insert(self_tokens.into_iter().chain(other_tokens).collect())
            }
            (RawOperation::Delete(tokens1), RawOperation::Delete(tokens2)) => {
                RawOperation::Delete(tokens1.into_iter().chain(tokens2).collect())
            }
            (RawOperation::Equal(tokens1), RawOperation::Equal(tokens2)) => {
                RawOperation::Equal(tokens1.into_iter().chain(tokens2).collect())
            }
            _ => unreachable!("Only operations of the same type can be extended"),
        }
    }
}
