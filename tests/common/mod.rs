//! In-memory stand-ins for a composer engine and a content-editable view.

#![allow(dead_code)]

use std::{collections::VecDeque, ops::Range};

use composer_reconcile::{
    AtomicSpan, ComposerAction, ComposerEngine, ComposerState, EditOrigin, EngineRequest,
    EngineUpdate, InputEvent, InputView, Replacement, Selection, Snapshot,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("The engine rejected the request")]
pub struct Rejected;

/// A plain-text engine. It applies every request to its own text, records it
/// and answers with the next queued response, or with `EngineUpdate::keep()`
/// once the queue is empty.
#[derive(Debug, Default)]
pub struct FakeEngine {
    pub text: Snapshot,
    pub selection: Selection,
    pub requests: Vec<EngineRequest>,
    responses: VecDeque<Result<EngineUpdate, Rejected>>,
}

impl FakeEngine {
    pub fn new(text: &str) -> Self {
        let text = Snapshot::from(text);

        Self {
            selection: Selection::caret(text.len()),
            text,
            ..Self::default()
        }
    }

    pub fn respond_with(&mut self, response: EngineUpdate) { self.responses.push_back(Ok(response)); }

    pub fn fail_next(&mut self) { self.responses.push_back(Err(Rejected)); }

    fn answer(&mut self, request: EngineRequest) -> Result<EngineUpdate, Rejected> {
        let response = self.responses.pop_front().unwrap_or_else(|| Ok(EngineUpdate::keep()));

        if response.is_ok() {
            match &request {
                EngineRequest::Replace { range, text } => {
                    self.text = Replacement::new(range.clone(), text.clone()).apply(&self.text);
                    self.selection = Selection::caret(range.start + text.len());
                }
                EngineRequest::ReplaceAll { content } => {
                    self.text = content.clone();
                    self.selection = Selection::caret(content.len());
                }
                EngineRequest::Select(selection) => self.selection = *selection,
                EngineRequest::Format(_) => {}
            }
        }

        self.requests.push(request);
        response
    }
}

impl ComposerEngine for FakeEngine {
    type Error = Rejected;

    fn composer_state(&self) -> ComposerState {
        ComposerState {
            html: self.text.to_string(),
            selection: self.selection,
        }
    }

    fn apply_replace(
        &mut self,
        range: Range<usize>,
        text: &Snapshot,
    ) -> Result<EngineUpdate, Self::Error> {
        self.answer(EngineRequest::Replace {
            range,
            text: text.clone(),
        })
    }

    fn apply_replace_all(&mut self, content: &Snapshot) -> Result<EngineUpdate, Self::Error> {
        self.answer(EngineRequest::ReplaceAll {
            content: content.clone(),
        })
    }

    fn set_selection(&mut self, selection: Selection) -> Result<EngineUpdate, Self::Error> {
        self.answer(EngineRequest::Select(selection))
    }

    fn apply_format(&mut self, action: ComposerAction) -> Result<EngineUpdate, Self::Error> {
        self.answer(EngineRequest::Format(action))
    }
}

/// A view that, like the platform ones, notifies about its own writes.
/// Selections are always reported forwards.
#[derive(Debug, Default)]
pub struct FakeView {
    pub text: Snapshot,
    pub selection: Selection,
    pub spans: Vec<AtomicSpan>,
    pub writes: usize,
}

impl FakeView {
    pub fn new(text: &str) -> Self {
        let text = Snapshot::from(text);

        Self {
            selection: Selection::caret(text.len()),
            text,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_spans(mut self, spans: Vec<AtomicSpan>) -> Self {
        self.spans = spans;
        self
    }

    /// Simulates the user editing the view and returns the notification.
    pub fn user_edit(&mut self, range: Range<usize>, text: &str) -> InputEvent {
        let previous = self.text.clone();
        let replacement = Replacement::new(range, text);
        self.text = replacement.apply(&previous);
        self.selection = Selection::caret(replacement.caret_after());

        InputEvent::ContentChanged {
            previous,
            current: self.text.clone(),
            origin: EditOrigin::HardwareKey,
        }
    }

    /// Simulates the user selecting text and returns the notification.
    pub fn user_select(&mut self, selection: Selection) -> InputEvent {
        self.selection = selection.normalized();

        InputEvent::SelectionChanged {
            selection: self.selection,
            focused: true,
        }
    }
}

impl InputView for FakeView {
    fn content(&self) -> Snapshot { self.text.clone() }

    fn atomic_spans(&self) -> Vec<AtomicSpan> { self.spans.clone() }

    fn replace_range(&mut self, range: Range<usize>, content: &str) -> Vec<InputEvent> {
        self.writes += 1;

        let start = range.start;
        self.spans.retain(|span| span.end <= start);
        let previous = self.text.clone();
        self.text = Replacement::new(range, content).apply(&previous);

        vec![InputEvent::ContentChanged {
            previous,
            current: self.text.clone(),
            origin: EditOrigin::Other,
        }]
    }

    fn set_selection(&mut self, selection: Selection) -> Vec<InputEvent> {
        self.writes += 1;
        self.selection = selection.normalized();

        vec![InputEvent::SelectionChanged {
            selection: self.selection,
            focused: true,
        }]
    }
}
