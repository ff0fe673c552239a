use log::trace;

use crate::types::selection::Selection;

/// Why a selection report was not forwarded to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionIgnoreReason {
    NotFocused,
    /// Same selection the view, the engine and the pending actions agree on.
    Redundant,
    /// The view reported the engine's backwards selection forwards. Views
    /// can't represent an anchor after the focus, so this is an echo.
    ReversedEcho,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionDecision {
    Ignore(SelectionIgnoreReason),
    Forward(Selection),
}

/// Keeps the selection the engine confirmed last, together with a short-lived
/// buffer of what the view reported previously and what locally submitted
/// actions are expected to produce. Reports matching all of these are echoes
/// of changes the engine already knows about.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionTracker {
    confirmed: Selection,
    reported: Option<Selection>,
    pending: Option<Selection>,
}

impl SelectionTracker {
    #[must_use]
    pub fn new(confirmed: Selection) -> Self {
        Self {
            confirmed,
            reported: None,
            pending: None,
        }
    }

    /// The selection last confirmed by the engine.
    #[must_use]
    pub fn confirmed(&self) -> Selection { self.confirmed }

    /// The selection last reported by the view.
    #[must_use]
    pub fn reported(&self) -> Selection { self.reported.unwrap_or(self.confirmed) }

    /// The selection implied by submitted but not yet confirmed actions.
    #[must_use]
    pub fn pending(&self) -> Selection { self.pending.unwrap_or(self.confirmed) }

    /// Classifies a selection reported by the view.
    pub fn observe(&mut self, selection: Selection, focused: bool) -> SelectionDecision {
        if !focused {
            trace!("Ignoring selection {selection:?} of an unfocused view");
            return SelectionDecision::Ignore(SelectionIgnoreReason::NotFocused);
        }

        let previous = [self.reported(), self.confirmed, self.pending()];
        self.reported = Some(selection);

        if previous.iter().all(|known| *known == selection) {
            trace!("Ignoring redundant selection {selection:?}");
            return SelectionDecision::Ignore(SelectionIgnoreReason::Redundant);
        }

        if previous.iter().all(|known| known.reversed() == selection) {
            trace!("Ignoring reversed echo of selection {selection:?}");
            return SelectionDecision::Ignore(SelectionIgnoreReason::ReversedEcho);
        }

        SelectionDecision::Forward(selection)
    }

    /// Records a selection the engine has confirmed.
    pub fn confirm(&mut self, selection: Selection) {
        self.confirmed = selection;
        self.pending = None;
    }

    /// Records the selection a locally submitted action should result in.
    pub fn expect(&mut self, selection: Selection) { self.pending = Some(selection); }

    /// The engine answered without a selection, so the expected one stands.
    pub fn acknowledge_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.confirmed = pending;
        }
    }

    /// The submitted action failed, so its expected selection won't happen.
    pub fn discard_pending(&mut self) { self.pending = None; }

    /// Records a selection the view reported as a consequence of our own
    /// write, without classifying it.
    pub fn record_reported(&mut self, selection: Selection) { self.reported = Some(selection); }
}
