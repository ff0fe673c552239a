mod engine;
mod outcome;
mod view;

pub use engine::{ComposerEngine, EngineRequest};
use log::{debug, error, trace, warn};
pub use outcome::{IgnoreReason, Outcome};
pub use view::{EditOrigin, InputEvent, InputView};

use crate::{
    config::ReconcilerConfig,
    key_command::KeyChord,
    range_expander::{expand, move_insertion_before_span},
    selection_tracker::{SelectionDecision, SelectionTracker},
    string_differ::diff_with_options,
    types::{
        atomic_span::AtomicSpan,
        engine_update::{ActionStates, ComposerAction, EngineUpdate},
        selection::Selection,
        snapshot::Snapshot,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    /// A request derived from a view notification is with the engine.
    PendingEngineCall,
    /// The engine's answer is being written to the view.
    ApplyingResult,
}

/// Keeps a content-editable view and a composer engine in sync.
///
/// Every view notification is turned into at most one engine request: text
/// changes are diffed against the content the engine last acknowledged,
/// widened over atomic spans and sent as a single replacement (or as a full
/// document replacement when the diff isn't a single edit). The engine's
/// canonical answer is written back to the view. Notifications the view fires
/// while being written to are recognised and dropped.
#[derive(Debug)]
pub struct ReconciliationController<E, V>
where
    E: ComposerEngine,
    V: InputView,
{
    engine: E,
    view: V,
    config: ReconcilerConfig,
    state: ControllerState,
    known_good: Snapshot,
    known_spans: Vec<AtomicSpan>,
    selection: SelectionTracker,
    action_states: ActionStates,
}

impl<E, V> ReconciliationController<E, V>
where
    E: ComposerEngine,
    V: InputView,
{
    /// Creates a controller for a view that currently displays the engine's
    /// content.
    pub fn new(engine: E, view: V, config: ReconcilerConfig) -> Self {
        let known_good = view.content();
        let known_spans = view.atomic_spans();
        let selection = SelectionTracker::new(engine.composer_state().selection);

        Self {
            engine,
            view,
            config,
            state: ControllerState::Idle,
            known_good,
            known_spans,
            selection,
            action_states: ActionStates::new(),
        }
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Outcome {
        match event {
            InputEvent::ContentChanged {
                previous,
                current,
                origin,
            } => self.on_content_changed(&previous, current, origin),
            InputEvent::SelectionChanged { selection, focused } => {
                self.on_selection_changed(selection, focused)
            }
        }
    }

    /// Dispatches the formatting action bound to `chord`, without diffing.
    pub fn handle_key(&mut self, chord: KeyChord) -> Outcome {
        let Some(action) = self.config.key_bindings.action_for(chord) else {
            trace!("No action bound to {chord:?}");
            return Outcome::Ignored(IgnoreReason::UnboundKey);
        };

        self.apply_action(action)
    }

    pub fn apply_action(&mut self, action: ComposerAction) -> Outcome {
        if self.state != ControllerState::Idle {
            return Outcome::Ignored(IgnoreReason::SelfTriggered);
        }

        self.submit(EngineRequest::Format(action))
    }

    fn on_content_changed(
        &mut self,
        previous: &Snapshot,
        current: Snapshot,
        origin: EditOrigin,
    ) -> Outcome {
        if self.state != ControllerState::Idle {
            trace!("Ignoring content change fired while {:?}", self.state);
            return Outcome::Ignored(IgnoreReason::SelfTriggered);
        }

        if *previous != self.known_good {
            debug!("The view's previous content differs from the engine's, diffing against the latter");
        }

        self.state = ControllerState::PendingEngineCall;

        let request = match diff_with_options(&self.known_good, &current, &self.config.diff) {
            Ok(None) => {
                self.state = ControllerState::Idle;
                return Outcome::Unchanged;
            }
            Ok(Some(replacement)) => {
                let replacement =
                    move_insertion_before_span(&self.known_good, &self.known_spans, replacement);
                let range = expand(&self.known_good, &self.known_spans, replacement.range.clone());
                if range != replacement.range {
                    debug!(
                        "Widened {:?} to {range:?} to cover atomic spans",
                        replacement.range
                    );
                }

                EngineRequest::Replace {
                    range,
                    text: replacement.text,
                }
            }
            Err(error) => {
                warn!("Replacing the whole document after a {origin:?} edit: {error}");
                EngineRequest::ReplaceAll { content: current }
            }
        };

        self.submit(request)
    }

    fn on_selection_changed(&mut self, selection: Selection, focused: bool) -> Outcome {
        if self.state != ControllerState::Idle {
            trace!("Ignoring selection {selection:?} fired while {:?}", self.state);
            if focused {
                self.selection.record_reported(selection);
            }
            return Outcome::Ignored(IgnoreReason::SelfTriggered);
        }

        let selection = self.protect_atomic_spans(selection, focused);

        match self.selection.observe(selection, focused) {
            SelectionDecision::Ignore(reason) => Outcome::Ignored(IgnoreReason::Selection(reason)),
            SelectionDecision::Forward(selection) => self.submit(EngineRequest::Select(selection)),
        }
    }

    /// Widens a selection covering part of an atomic span and shows the
    /// widened one in the view.
    fn protect_atomic_spans(&mut self, selection: Selection, focused: bool) -> Selection {
        if !focused || !self.config.expand_selections || selection.is_caret() {
            return selection;
        }

        let range = expand(&self.known_good, &self.known_spans, selection.range());
        if range == selection.range() {
            return selection;
        }

        let expanded = Selection::from(range);
        debug!("Widened selection {selection:?} to {expanded:?} to cover atomic spans");

        self.state = ControllerState::ApplyingResult;
        let echoes = self.view.set_selection(expanded);
        self.dispatch_echoes(echoes);
        self.state = ControllerState::Idle;

        expanded
    }

    /// Sends `request` and applies the answer. Selection requests keep the
    /// controller `Idle` unless the engine asks for a view write.
    fn submit(&mut self, request: EngineRequest) -> Outcome {
        let selection_only = request.is_selection_only();
        if !selection_only {
            self.state = ControllerState::PendingEngineCall;
        }
        debug!("Sending {request:?} to the engine");

        if let Some(implied) = request.implied_selection() {
            self.selection.expect(implied);
        }

        match request.send(&mut self.engine) {
            Ok(update) => {
                let view_updated = self.apply_update(update, selection_only);
                Outcome::Applied {
                    request,
                    view_updated,
                }
            }
            Err(error) => {
                error!("The engine failed to apply {request:?}, dropping it: {error}");
                self.selection.discard_pending();
                self.state = ControllerState::Idle;
                Outcome::Dropped { request }
            }
        }
    }

    fn apply_update(&mut self, update: EngineUpdate, selection_only: bool) -> bool {
        if !selection_only || update.replacement.is_some() {
            self.state = ControllerState::ApplyingResult;
        }

        if let Some(action_states) = update.action_states {
            self.action_states = action_states;
        }

        let view_updated = if let Some(replacement) = update.replacement {
            let mut echoes = self
                .view
                .replace_range(replacement.range.clone(), &replacement.content);
            echoes.extend(self.view.set_selection(replacement.selection));
            self.dispatch_echoes(echoes);

            self.selection.confirm(replacement.selection);
            true
        } else {
            self.selection.acknowledge_pending();
            false
        };

        self.known_good = self.view.content();
        self.known_spans = self.view.atomic_spans();
        self.state = ControllerState::Idle;

        view_updated
    }

    fn dispatch_echoes(&mut self, echoes: Vec<InputEvent>) {
        debug_assert_eq!(self.state, ControllerState::ApplyingResult);

        for echo in echoes {
            let outcome = self.handle_event(echo);
            debug_assert_eq!(outcome, Outcome::Ignored(IgnoreReason::SelfTriggered));
        }
    }

    #[must_use]
    pub fn state(&self) -> ControllerState { self.state }

    /// The content the engine acknowledged last.
    #[must_use]
    pub fn known_good(&self) -> &Snapshot { &self.known_good }

    #[must_use]
    pub fn selection(&self) -> &SelectionTracker { &self.selection }

    #[must_use]
    pub fn action_states(&self) -> &ActionStates { &self.action_states }

    #[must_use]
    pub fn config(&self) -> &ReconcilerConfig { &self.config }

    #[must_use]
    pub fn engine(&self) -> &E { &self.engine }

    #[must_use]
    pub fn view(&self) -> &V { &self.view }

    /// The view, for forwarding user interaction to it. Changes only reach
    /// the engine through `handle_event`.
    pub fn view_mut(&mut self) -> &mut V { &mut self.view }

    pub fn into_parts(self) -> (E, V) { (self.engine, self.view) }
}
