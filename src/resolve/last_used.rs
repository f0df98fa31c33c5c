//! Recency-only resolution policy.

use super::hint_solver::{admissible, most_recent};
use super::policy::{Focus, ViewResolutionPolicy};
use crate::model::{Hints, View};

/// Always picks the most recently activated view.
///
/// Honors the `existing` hint like [`HintSolver`](super::HintSolver) but ignores the
/// hinted strategy list.
#[derive(Debug, Clone, Copy, Default)]
pub struct LastUsedStrategy;

impl ViewResolutionPolicy for LastUsedStrategy {
    fn select<'v>(
        &self,
        candidates: &'v [View],
        hints: &Hints,
        focus: &Focus,
    ) -> Option<&'v View> {
        most_recent(&admissible(candidates, hints, focus)?)
    }
}
