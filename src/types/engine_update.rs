use std::{collections::BTreeMap, fmt::Display, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::selection::Selection;

/// Named formatting operations understood by the composer engine.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComposerAction {
    Bold,
    Italic,
    StrikeThrough,
    Underline,
    InlineCode,
    OrderedList,
    UnorderedList,
    Indent,
    Unindent,
    CodeBlock,
    Quote,
    Link,
    Undo,
    Redo,
}

impl Display for ComposerAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ComposerAction::Bold => "bold",
            ComposerAction::Italic => "italic",
            ComposerAction::StrikeThrough => "strike_through",
            ComposerAction::Underline => "underline",
            ComposerAction::InlineCode => "inline_code",
            ComposerAction::OrderedList => "ordered_list",
            ComposerAction::UnorderedList => "unordered_list",
            ComposerAction::Indent => "indent",
            ComposerAction::Unindent => "unindent",
            ComposerAction::CodeBlock => "code_block",
            ComposerAction::Quote => "quote",
            ComposerAction::Link => "link",
            ComposerAction::Undo => "undo",
            ComposerAction::Redo => "redo",
        };

        write!(f, "{name}")
    }
}

/// Availability of a formatting action at the current selection.
/// `Reversed` means the action is active and applying it again undoes it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionState {
    Enabled,
    Disabled,
    Reversed,
}

pub type ActionStates = BTreeMap<ComposerAction, ActionState>;

/// The engine's canonical document: serialized content and selection.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComposerState {
    pub html: String,
    pub selection: Selection,
}

/// Content the view has to display in place of `range`, followed by
/// `selection`. `content` is opaque to this crate and rendered by the view.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentReplacement {
    pub range: Range<usize>,
    pub content: String,
    pub selection: Selection,
}

/// Result of an engine call. A missing `replacement` means nothing visible
/// changed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EngineUpdate {
    pub replacement: Option<ContentReplacement>,
    pub action_states: Option<ActionStates>,
}

impl EngineUpdate {
    #[must_use]
    pub fn keep() -> Self { Self::default() }

    #[must_use]
    pub fn replace(range: Range<usize>, content: impl Into<String>, selection: Selection) -> Self {
        Self {
            replacement: Some(ContentReplacement {
                range,
                content: content.into(),
                selection,
            }),
            action_states: None,
        }
    }

    #[must_use]
    pub fn with_action_states(mut self, action_states: ActionStates) -> Self {
        self.action_states = Some(action_states);
        self
    }
}
