use crate::{controller::engine::EngineRequest, selection_tracker::SelectionIgnoreReason};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    Selection(SelectionIgnoreReason),
    /// Fired by the view while the controller was writing to it.
    SelfTriggered,
    UnboundKey,
}

/// What handling a view notification amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Ignored(IgnoreReason),
    /// The view content matches what the engine already has.
    Unchanged,
    /// The engine accepted `request`. `view_updated` tells whether its
    /// canonical content was written back to the view.
    Applied {
        request: EngineRequest,
        view_updated: bool,
    },
    /// The engine failed; nothing was changed and nothing will be retried.
    Dropped { request: EngineRequest },
}

impl Outcome {
    #[must_use]
    pub fn request(&self) -> Option<&EngineRequest> {
        match self {
            Outcome::Applied { request, .. } | Outcome::Dropped { request } => Some(request),
            Outcome::Ignored(_) | Outcome::Unchanged => None,
        }
    }

    /// Whether the change was sent as a full document replacement.
    #[must_use]
    pub fn is_full_resync(&self) -> bool {
        matches!(self.request(), Some(EngineRequest::ReplaceAll { .. }))
    }
}
