#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::engine_update::ComposerAction;

/// Modifier keys held during a key press. `command` is ⌘ on Apple platforms
/// and Ctrl elsewhere.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub command: bool,
    pub shift: bool,
    pub alt: bool,
}

/// A hardware key press: a key together with its modifiers. Keys are stored
/// lowercase so that ⇧ doesn't change the key itself.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub key: char,
    pub modifiers: Modifiers,
}

impl KeyChord {
    #[must_use]
    pub fn new(key: char, modifiers: Modifiers) -> Self {
        Self {
            key: key.to_ascii_lowercase(),
            modifiers,
        }
    }

    /// `key` pressed while holding the command modifier.
    #[must_use]
    pub fn command(key: char) -> Self {
        Self::new(
            key,
            Modifiers {
                command: true,
                ..Modifiers::default()
            },
        )
    }

    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub chord: KeyChord,
    pub action: ComposerAction,
}

/// Translation of key chords to formatting actions. Views don't report a
/// text change for these on every platform, so they are dispatched to the
/// engine directly.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    bindings: Vec<KeyBinding>,
}

impl KeyBindings {
    #[must_use]
    pub fn new(bindings: Vec<KeyBinding>) -> Self { Self { bindings } }

    #[must_use]
    pub fn empty() -> Self { Self::new(Vec::new()) }

    /// Adds a binding. A later binding for the same chord takes precedence.
    #[must_use]
    pub fn bind(mut self, chord: KeyChord, action: ComposerAction) -> Self {
        self.bindings.push(KeyBinding { chord, action });
        self
    }

    #[must_use]
    pub fn action_for(&self, chord: KeyChord) -> Option<ComposerAction> {
        let chord = KeyChord::new(chord.key, chord.modifiers);

        self.bindings
            .iter()
            .rev()
            .find(|binding| binding.chord == chord)
            .map(|binding| binding.action)
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyBinding> { self.bindings.iter() }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::empty()
            .bind(KeyChord::command('b'), ComposerAction::Bold)
            .bind(KeyChord::command('i'), ComposerAction::Italic)
            .bind(KeyChord::command('u'), ComposerAction::Underline)
            .bind(KeyChord::command('e'), ComposerAction::InlineCode)
            .bind(KeyChord::command('x').with_shift(), ComposerAction::StrikeThrough)
            .bind(KeyChord::command('z'), ComposerAction::Undo)
            .bind(KeyChord::command('z').with_shift(), ComposerAction::Redo)
            .bind(KeyChord::command('y'), ComposerAction::Redo)
    }
}
