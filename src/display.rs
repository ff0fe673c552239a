//! Decisions about how links are displayed in the view. Links shown as pills
//! are atomic spans the range expander has to protect.

use std::{fmt::Debug, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{types::atomic_span::AtomicSpan, utils::memoize::Memoized};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MentionDisplay {
    /// Rendered as a regular link, editable character by character.
    Plain,
    /// Rendered as a pill with the given label, edited as a whole.
    Pill { label: String },
}

impl MentionDisplay {
    #[must_use]
    pub fn is_pill(&self) -> bool { matches!(self, MentionDisplay::Pill { .. }) }
}

/// Decides how mentions are displayed. Implemented by the host application.
pub trait MentionDisplayHandler {
    fn resolve_mention_display(&self, url: &str, text: &str) -> MentionDisplay;

    fn resolve_at_room_mention_display(&self) -> MentionDisplay;
}

/// A link in the rendered view content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRun {
    pub range: Range<usize>,
    pub url: String,
    pub text: String,
}

type Resolver<'h, K> = Memoized<K, MentionDisplay, Box<dyn Fn(&K) -> MentionDisplay + 'h>>;

/// Wraps a `MentionDisplayHandler` so that each distinct link is resolved
/// once per session.
pub struct MemoizingMentionDisplayHandler<'h, H>
where
    H: MentionDisplayHandler,
{
    handler: &'h H,
    mentions: Resolver<'h, (String, String)>,
    at_room: Resolver<'h, ()>,
}

impl<'h, H> MemoizingMentionDisplayHandler<'h, H>
where
    H: MentionDisplayHandler,
{
    pub fn new(handler: &'h H) -> Self {
        Self {
            handler,
            mentions: Memoized::new(Box::new(move |(url, text): &(String, String)| {
                handler.resolve_mention_display(url, text)
            })),
            at_room: Memoized::new(Box::new(move |(): &()| {
                handler.resolve_at_room_mention_display()
            })),
        }
    }

    pub fn inner(&self) -> &H { self.handler }
}

impl<H> Debug for MemoizingMentionDisplayHandler<'_, H>
where
    H: MentionDisplayHandler,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoizingMentionDisplayHandler")
            .field("mentions", &self.mentions)
            .field("at_room", &self.at_room)
            .finish_non_exhaustive()
    }
}

impl<H> MentionDisplayHandler for MemoizingMentionDisplayHandler<'_, H>
where
    H: MentionDisplayHandler,
{
    fn resolve_mention_display(&self, url: &str, text: &str) -> MentionDisplay {
        self.mentions.get(&(url.to_owned(), text.to_owned()))
    }

    fn resolve_at_room_mention_display(&self) -> MentionDisplay { self.at_room.get(&()) }
}

/// The atomic spans of a view: every link displayed as a pill.
pub fn atomic_spans_for_links<H>(links: &[LinkRun], handler: &H) -> Vec<AtomicSpan>
where
    H: MentionDisplayHandler + ?Sized,
{
    links
        .iter()
        .filter(|link| !link.range.is_empty())
        .filter(|link| {
            let display = if is_at_room(&link.url) {
                handler.resolve_at_room_mention_display()
            } else {
                handler.resolve_mention_display(&link.url, &link.text)
            };

            display.is_pill()
        })
        .map(|link| AtomicSpan::from(link.range.clone()))
        .collect()
}

fn is_at_room(url: &str) -> bool { url == "@room" }
