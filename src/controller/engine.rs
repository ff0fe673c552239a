use std::ops::Range;

use crate::types::{
    engine_update::{ComposerAction, ComposerState, EngineUpdate},
    selection::Selection,
    snapshot::Snapshot,
};

/// The external formatting engine owning the canonical document. Calls are
/// synchronous and expected to be fast.
pub trait ComposerEngine {
    type Error: std::error::Error;

    /// The engine's current content and selection.
    fn composer_state(&self) -> ComposerState;

    /// Replaces `range` of the engine's text with `text`.
    ///
    /// # Errors
    ///
    /// Returns the engine's error if the replacement couldn't be applied.
    fn apply_replace(
        &mut self,
        range: Range<usize>,
        text: &Snapshot,
    ) -> Result<EngineUpdate, Self::Error>;

    /// Replaces the whole document with `content`.
    ///
    /// # Errors
    ///
    /// Returns the engine's error if the content couldn't be set.
    fn apply_replace_all(&mut self, content: &Snapshot) -> Result<EngineUpdate, Self::Error>;

    /// Informs the engine of a selection made by the user.
    ///
    /// # Errors
    ///
    /// Returns the engine's error if the selection is invalid.
    fn set_selection(&mut self, selection: Selection) -> Result<EngineUpdate, Self::Error>;

    /// Applies a named formatting action at the current selection.
    ///
    /// # Errors
    ///
    /// Returns the engine's error if the action couldn't be applied.
    fn apply_format(&mut self, action: ComposerAction) -> Result<EngineUpdate, Self::Error>;
}

/// The request the controller sent to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineRequest {
    Replace { range: Range<usize>, text: Snapshot },
    ReplaceAll { content: Snapshot },
    Select(Selection),
    Format(ComposerAction),
}

impl EngineRequest {
    pub(crate) fn send<E>(&self, engine: &mut E) -> Result<EngineUpdate, E::Error>
    where
        E: ComposerEngine + ?Sized,
    {
        match self {
            EngineRequest::Replace { range, text } => engine.apply_replace(range.clone(), text),
            EngineRequest::ReplaceAll { content } => engine.apply_replace_all(content),
            EngineRequest::Select(selection) => engine.set_selection(*selection),
            EngineRequest::Format(action) => engine.apply_format(*action),
        }
    }

    /// Whether the request only moves the selection. These don't go through
    /// `ControllerState::PendingEngineCall`.
    pub(crate) fn is_selection_only(&self) -> bool { matches!(self, EngineRequest::Select(_)) }

    /// The selection this request should leave behind, if it is known
    /// before the engine answers.
    pub(crate) fn implied_selection(&self) -> Option<Selection> {
        match self {
            EngineRequest::Replace { range, text } => {
                Some(Selection::caret(range.start + text.len()))
            }
            EngineRequest::ReplaceAll { content } => Some(Selection::caret(content.len())),
            EngineRequest::Select(selection) => Some(*selection),
            EngineRequest::Format(_) => None,
        }
    }
}
