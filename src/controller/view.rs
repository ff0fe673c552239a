use std::ops::Range;

use crate::types::{atomic_span::AtomicSpan, selection::Selection, snapshot::Snapshot};

/// Where a content change came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOrigin {
    HardwareKey,
    /// IME composition, dictation or autocorrection.
    Composition,
    Other,
}

/// Notifications delivered by the view, in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    ContentChanged {
        previous: Snapshot,
        current: Snapshot,
        origin: EditOrigin,
    },
    SelectionChanged {
        selection: Selection,
        focused: bool,
    },
}

/// The content-editable view. The write methods return the notifications
/// the view fired synchronously while being written to, so that the
/// controller can recognise them as its own.
pub trait InputView {
    /// The text currently displayed.
    fn content(&self) -> Snapshot;

    /// Atomic spans of the currently displayed text.
    fn atomic_spans(&self) -> Vec<AtomicSpan>;

    /// Displays `content` in place of `range`.
    fn replace_range(&mut self, range: Range<usize>, content: &str) -> Vec<InputEvent>;

    fn set_selection(&mut self, selection: Selection) -> Vec<InputEvent>;
}
