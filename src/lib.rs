//! Keeps a platform's content-editable input view and an external rich-text
//! composer engine in agreement. The view reports what the user did as
//! before/after snapshots; this crate turns each report into a single minimal
//! replacement, widens it over atomic spans such as mention pills, filters
//! selection echoes and writes the engine's canonical answer back.

mod config;
pub mod consts;
mod controller;
mod display;
mod key_command;
mod range_expander;
mod selection_tracker;
mod string_differ;
mod types;
mod utils;

#[cfg(feature = "serde")]
pub use config::ConfigError;
pub use config::ReconcilerConfig;
pub use controller::{
    ComposerEngine, ControllerState, EditOrigin, EngineRequest, IgnoreReason, InputEvent,
    InputView, Outcome, ReconciliationController,
};
pub use display::{
    LinkRun, MemoizingMentionDisplayHandler, MentionDisplay, MentionDisplayHandler,
    atomic_spans_for_links,
};
pub use key_command::{KeyBinding, KeyBindings, KeyChord, Modifiers};
pub use range_expander::{
    RangeError, expand, expand_by_length, extend_range_to_replacement_spans,
    move_insertion_before_span,
};
pub use selection_tracker::{SelectionDecision, SelectionIgnoreReason, SelectionTracker};
pub use string_differ::{
    DiffError, DiffOptions, DiffPolicy, diff, diff_with_options, trim_common_affixes,
};
pub use types::{
    atomic_span::AtomicSpan,
    engine_update::{
        ActionState, ActionStates, ComposerAction, ComposerState, ContentReplacement,
        EngineUpdate,
    },
    replacement::Replacement,
    selection::Selection,
    snapshot::Snapshot,
};
pub use utils::memoize::{Memoized, memoize, memoize2};
