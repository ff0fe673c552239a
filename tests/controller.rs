mod common;

use std::collections::BTreeMap;

use common::{FakeEngine, FakeView};
use composer_reconcile::{
    ActionState, AtomicSpan, ComposerAction, ControllerState, EditOrigin, EngineRequest,
    EngineUpdate, IgnoreReason, InputEvent, KeyChord, Outcome, ReconcilerConfig,
    ReconciliationController, Selection, SelectionIgnoreReason, Snapshot,
};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn controller(
    engine: FakeEngine,
    view: FakeView,
) -> ReconciliationController<FakeEngine, FakeView> {
    ReconciliationController::new(engine, view, ReconcilerConfig::default())
}

fn pill_document() -> (FakeEngine, FakeView) {
    (
        FakeEngine::new("Hi Alice!"),
        FakeView::new("Hi Alice!").with_spans(vec![AtomicSpan::new(3, 8)]),
    )
}

#[test]
fn test_typing_is_sent_as_insertion() {
    let mut controller = controller(FakeEngine::new("Hello"), FakeView::new("Hello"));
    let event = controller.view_mut().user_edit(5..5, "!");

    let outcome = controller.handle_event(event);

    assert_eq!(
        outcome,
        Outcome::Applied {
            request: EngineRequest::Replace {
                range: 5..5,
                text: Snapshot::from("!"),
            },
            view_updated: false,
        }
    );
    assert_eq!(controller.state(), ControllerState::Idle);
    assert_eq!(controller.engine().text, Snapshot::from("Hello!"));
    assert_eq!(controller.selection().confirmed(), Selection::caret(6));
    assert_eq!(controller.view().writes, 0);
}

#[test]
fn test_known_good_follows_accepted_edits() {
    let mut controller = controller(FakeEngine::new("Hello"), FakeView::new("Hello"));

    let event = controller.view_mut().user_edit(5..5, "!");
    controller.handle_event(event);
    assert_eq!(controller.known_good(), &Snapshot::from("Hello!"));

    let event = controller.view_mut().user_edit(0..1, "J");
    let outcome = controller.handle_event(event);

    assert_eq!(
        outcome.request(),
        Some(&EngineRequest::Replace {
            range: 0..1,
            text: Snapshot::from("J"),
        })
    );
    assert_eq!(controller.engine().text, Snapshot::from("Jello!"));
}

#[test]
fn test_unchanged_content_is_not_sent() {
    let mut controller = controller(FakeEngine::new("Hello"), FakeView::new("Hello"));

    let outcome = controller.handle_event(InputEvent::ContentChanged {
        previous: Snapshot::from("Hello"),
        current: Snapshot::from("Hello"),
        origin: EditOrigin::Other,
    });

    assert_eq!(outcome, Outcome::Unchanged);
    assert!(controller.engine().requests.is_empty());
}

#[test]
fn test_deleting_inside_a_pill_removes_the_whole_pill() {
    let (mut engine, view) = pill_document();
    engine.respond_with(EngineUpdate::replace(0..8, "Hi !", Selection::caret(3)));
    let mut controller = controller(engine, view);
    let event = controller.view_mut().user_edit(6..7, "");

    let outcome = controller.handle_event(event);

    assert_eq!(
        outcome,
        Outcome::Applied {
            request: EngineRequest::Replace {
                range: 3..8,
                text: Snapshot::default(),
            },
            view_updated: true,
        }
    );
    assert_eq!(controller.engine().text, Snapshot::from("Hi !"));
    assert_eq!(controller.view().text, Snapshot::from("Hi !"));
    assert_eq!(controller.view().selection, Selection::caret(3));
    assert_eq!(controller.known_good(), &Snapshot::from("Hi !"));
    assert_eq!(controller.selection().confirmed(), Selection::caret(3));
}

#[test_case(3, "A", "Hi AAlice!" ; "first character of the pill")]
#[test_case(3, "Al", "Hi AlAlice!" ; "first characters of the pill")]
#[test_case(3, "B", "Hi BAlice!" ; "other text")]
fn test_typing_right_before_a_pill_keeps_it(at: usize, typed: &str, expected: &str) {
    let (engine, view) = pill_document();
    let mut controller = controller(engine, view);
    let event = controller.view_mut().user_edit(at..at, typed);

    let outcome = controller.handle_event(event);

    assert_eq!(
        outcome,
        Outcome::Applied {
            request: EngineRequest::Replace {
                range: at..at,
                text: Snapshot::from(typed),
            },
            view_updated: false,
        }
    );
    assert_eq!(controller.engine().text, Snapshot::from(expected));
}

#[test]
fn test_typing_right_after_a_pill_keeps_it() {
    let (engine, view) = pill_document();
    let mut controller = controller(engine, view);
    let event = controller.view_mut().user_edit(8..8, "e");

    let outcome = controller.handle_event(event);

    assert_eq!(
        outcome.request(),
        Some(&EngineRequest::Replace {
            range: 8..8,
            text: Snapshot::from("e"),
        })
    );
    assert_eq!(controller.engine().text, Snapshot::from("Hi Alicee!"));
}

#[test]
fn test_writes_to_the_view_are_not_sent_back() {
    let (mut engine, view) = pill_document();
    engine.respond_with(EngineUpdate::replace(0..8, "Hi !", Selection::caret(3)));
    let mut controller = controller(engine, view);
    let event = controller.view_mut().user_edit(6..7, "");

    controller.handle_event(event);

    // Both writes notified the controller synchronously.
    assert_eq!(controller.view().writes, 2);
    assert_eq!(controller.engine().requests.len(), 1);
    assert_eq!(controller.selection().reported(), Selection::caret(3));
}

#[test]
fn test_complicated_edit_replaces_everything() {
    let mut controller = controller(FakeEngine::new("text"), FakeView::new("text"));
    controller.view_mut().text = Snapshot::from("fexf");

    let outcome = controller.handle_event(InputEvent::ContentChanged {
        previous: Snapshot::from("text"),
        current: Snapshot::from("fexf"),
        origin: EditOrigin::Composition,
    });

    assert!(outcome.is_full_resync());
    assert_eq!(
        outcome.request(),
        Some(&EngineRequest::ReplaceAll {
            content: Snapshot::from("fexf"),
        })
    );
    assert_eq!(controller.engine().text, Snapshot::from("fexf"));
    assert_eq!(controller.known_good(), &Snapshot::from("fexf"));
    assert_eq!(controller.state(), ControllerState::Idle);
}

#[test]
fn test_engine_failure_drops_the_edit() {
    let mut engine = FakeEngine::new("Hello");
    engine.fail_next();
    let mut controller = controller(engine, FakeView::new("Hello"));
    let event = controller.view_mut().user_edit(5..5, "!");

    let outcome = controller.handle_event(event);

    assert_eq!(
        outcome,
        Outcome::Dropped {
            request: EngineRequest::Replace {
                range: 5..5,
                text: Snapshot::from("!"),
            },
        }
    );
    assert_eq!(controller.state(), ControllerState::Idle);
    assert_eq!(controller.known_good(), &Snapshot::from("Hello"));
    assert_eq!(controller.engine().text, Snapshot::from("Hello"));
    assert_eq!(controller.selection().pending(), Selection::caret(5));
    assert_eq!(controller.view().writes, 0);
}

#[test]
fn test_next_edit_after_failure_includes_the_dropped_one() {
    let mut engine = FakeEngine::new("Hello");
    engine.fail_next();
    let mut controller = controller(engine, FakeView::new("Hello"));

    let first = controller.view_mut().user_edit(5..5, "!");
    assert!(matches!(
        controller.handle_event(first),
        Outcome::Dropped { .. }
    ));

    let second = controller.view_mut().user_edit(6..6, "?");
    let outcome = controller.handle_event(second);

    assert_eq!(
        outcome.request(),
        Some(&EngineRequest::Replace {
            range: 5..5,
            text: Snapshot::from("!?"),
        })
    );
    assert_eq!(controller.engine().text, Snapshot::from("Hello!?"));
}

#[test]
fn test_new_selection_is_forwarded() {
    let mut view = FakeView::new("Hello world");
    let event = view.user_select(Selection::new(1, 3));
    let mut controller = controller(FakeEngine::new("Hello world"), view);

    let outcome = controller.handle_event(event);

    assert_eq!(
        outcome,
        Outcome::Applied {
            request: EngineRequest::Select(Selection::new(1, 3)),
            view_updated: false,
        }
    );
    assert_eq!(controller.engine().selection, Selection::new(1, 3));
    assert_eq!(controller.selection().confirmed(), Selection::new(1, 3));
}

#[test]
fn test_redundant_selection_is_ignored() {
    let mut view = FakeView::new("Hello");
    let event = view.user_select(Selection::caret(5));
    let mut controller = controller(FakeEngine::new("Hello"), view);

    assert_eq!(
        controller.handle_event(event),
        Outcome::Ignored(IgnoreReason::Selection(SelectionIgnoreReason::Redundant))
    );
    assert!(controller.engine().requests.is_empty());
}

#[test]
fn test_reversed_selection_echo_is_ignored() {
    let mut engine = FakeEngine::new("Hello world");
    engine.selection = Selection::new(5, 2);
    let mut view = FakeView::new("Hello world");
    let event = view.user_select(Selection::new(5, 2));
    let mut controller = controller(engine, view);

    assert_eq!(
        event,
        InputEvent::SelectionChanged {
            selection: Selection::new(2, 5),
            focused: true,
        }
    );
    assert_eq!(
        controller.handle_event(event),
        Outcome::Ignored(IgnoreReason::Selection(
            SelectionIgnoreReason::ReversedEcho
        ))
    );
    assert!(controller.engine().requests.is_empty());
}

#[test]
fn test_unfocused_selection_is_ignored() {
    let mut controller = controller(FakeEngine::new("Hello"), FakeView::new("Hello"));

    let outcome = controller.handle_event(InputEvent::SelectionChanged {
        selection: Selection::new(1, 3),
        focused: false,
    });

    assert_eq!(
        outcome,
        Outcome::Ignored(IgnoreReason::Selection(SelectionIgnoreReason::NotFocused))
    );
    assert!(controller.engine().requests.is_empty());
}

#[test]
fn test_selection_is_widened_over_pills() {
    let (engine, mut view) = pill_document();
    let event = view.user_select(Selection::new(5, 9));
    let mut controller = controller(engine, view);

    let outcome = controller.handle_event(event);

    assert_eq!(
        outcome.request(),
        Some(&EngineRequest::Select(Selection::new(3, 9)))
    );
    assert_eq!(controller.view().selection, Selection::new(3, 9));
    assert_eq!(controller.engine().requests.len(), 1);
}

#[test]
fn test_selection_widening_can_be_disabled() {
    let (engine, mut view) = pill_document();
    let event = view.user_select(Selection::new(5, 9));
    let mut controller = ReconciliationController::new(
        engine,
        view,
        ReconcilerConfig::default().with_expand_selections(false),
    );

    let outcome = controller.handle_event(event);

    assert_eq!(
        outcome.request(),
        Some(&EngineRequest::Select(Selection::new(5, 9)))
    );
    assert_eq!(controller.view().writes, 0);
}

#[test]
fn test_key_chord_applies_format() {
    let mut engine = FakeEngine::new("Hello");
    engine.respond_with(
        EngineUpdate::keep()
            .with_action_states(BTreeMap::from([(ComposerAction::Bold, ActionState::Reversed)])),
    );
    let mut controller = controller(engine, FakeView::new("Hello"));

    let outcome = controller.handle_key(KeyChord::command('B'));

    assert_eq!(
        outcome,
        Outcome::Applied {
            request: EngineRequest::Format(ComposerAction::Bold),
            view_updated: false,
        }
    );
    assert_eq!(
        controller.action_states().get(&ComposerAction::Bold),
        Some(&ActionState::Reversed)
    );
    assert_eq!(controller.selection().confirmed(), Selection::caret(5));
}

#[test]
fn test_redo_has_two_chords() {
    let mut controller = controller(FakeEngine::new(""), FakeView::new(""));

    controller.handle_key(KeyChord::command('z').with_shift());
    controller.handle_key(KeyChord::command('y'));

    assert_eq!(
        controller.engine().requests,
        vec![
            EngineRequest::Format(ComposerAction::Redo),
            EngineRequest::Format(ComposerAction::Redo),
        ]
    );
}

#[test]
fn test_unbound_key_is_ignored() {
    let mut controller = controller(FakeEngine::new("Hello"), FakeView::new("Hello"));

    assert_eq!(
        controller.handle_key(KeyChord::command('q')),
        Outcome::Ignored(IgnoreReason::UnboundKey)
    );
    assert!(controller.engine().requests.is_empty());
}

#[test]
fn test_toolbar_action() {
    let mut controller = controller(FakeEngine::new("Hello"), FakeView::new("Hello"));

    let outcome = controller.apply_action(ComposerAction::Quote);

    assert_eq!(
        outcome.request(),
        Some(&EngineRequest::Format(ComposerAction::Quote))
    );
}
