//! The view resolution capability.

use crate::model::{Hints, TabId, View, ViewId};

/// Snapshot of the manager's focus at resolution time.
///
/// Lets policies evaluate `current` and `current_tab` without holding state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Focus {
    /// View that currently has focus.
    pub active_view: Option<ViewId>,
    /// Tab currently shown.
    pub current_tab: Option<TabId>,
}

impl Focus {
    /// Focus with nothing active.
    pub fn none() -> Self {
        Self::default()
    }
}

/// Chooses which open view of a document to use.
///
/// Implementations are pure selectors: they never mutate views, never create
/// views, and never fail. `candidates` are the views open for one document in
/// tab order. Returning `None` means no existing view qualifies; whether to
/// create one is the caller's decision (see [`Hints::allows_creation`]).
pub trait ViewResolutionPolicy: Send + Sync {
    /// Select a view among `candidates`.
    fn select<'v>(&self, candidates: &'v [View], hints: &Hints, focus: &Focus)
        -> Option<&'v View>;
}

impl<P: ViewResolutionPolicy + ?Sized> ViewResolutionPolicy for Box<P> {
    fn select<'v>(
        &self,
        candidates: &'v [View],
        hints: &Hints,
        focus: &Focus,
    ) -> Option<&'v View> {
        (**self).select(candidates, hints, focus)
    }
}

impl<P: ViewResolutionPolicy + ?Sized> ViewResolutionPolicy for std::sync::Arc<P> {
    fn select<'v>(
        &self,
        candidates: &'v [View],
        hints: &Hints,
        focus: &Focus,
    ) -> Option<&'v View> {
        (**self).select(candidates, hints, focus)
    }
}
