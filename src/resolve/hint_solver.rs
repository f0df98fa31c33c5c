//! Hint-driven view resolution.

use super::policy::{Focus, ViewResolutionPolicy};
use crate::model::{Existing, Hints, Strategy, View};
use tracing::trace;

/// Default resolution policy.
///
/// Applies the `existing` filter, then tries each hinted strategy in order.
/// When no strategy picks a view the first candidate is returned, so any
/// non-empty candidate set always resolves.
#[derive(Debug, Clone, Copy, Default)]
pub struct HintSolver;

impl HintSolver {
    /// Create the solver.
    pub fn new() -> Self {
        Self
    }
}

impl ViewResolutionPolicy for HintSolver {
    fn select<'v>(
        &self,
        candidates: &'v [View],
        hints: &Hints,
        focus: &Focus,
    ) -> Option<&'v View> {
        let admissible = admissible(candidates, hints, focus)?;

        for &strategy in &hints.strategy {
            if let Some(view) = pick(strategy, &admissible, focus) {
                trace!(view = %view.id, strategy = strategy.as_str(), "strategy picked view");
                return Some(view);
            }
        }

        admissible.first().copied()
    }
}

/// Candidates that survive the `existing` constraint.
///
/// `None` when the hints rule out every existing view.
pub(crate) fn admissible<'v>(
    candidates: &'v [View],
    hints: &Hints,
    focus: &Focus,
) -> Option<Vec<&'v View>> {
    let views: Vec<&View> = match hints.existing {
        Existing::Never => return None,
        Existing::CurrentTab => {
            let tab = focus.current_tab?;
            candidates.iter().filter(|v| v.tab == tab).collect()
        }
        Existing::Always | Existing::Unspecified => candidates.iter().collect(),
    };
    if views.is_empty() {
        None
    } else {
        Some(views)
    }
}

/// Apply one strategy.
pub(crate) fn pick<'v>(strategy: Strategy, views: &[&'v View], focus: &Focus) -> Option<&'v View> {
    match strategy {
        Strategy::LastUsed => most_recent(views),
        Strategy::Current => {
            let active = focus.active_view?;
            views.iter().copied().find(|v| v.id == active)
        }
        Strategy::CurrentTab => {
            let tab = focus.current_tab?;
            views.iter().copied().find(|v| v.tab == tab)
        }
        Strategy::First => views.first().copied(),
        Strategy::Last => views.last().copied(),
    }
}

/// View with the greatest activation; the earliest wins ties.
pub(crate) fn most_recent<'v>(views: &[&'v View]) -> Option<&'v View> {
    let mut best: Option<&View> = None;
    for &view in views {
        match best {
            Some(current) if view.activation <= current.activation => {}
            _ => best = Some(view),
        }
    }
    best
}

#[cfg(test)]
#[path = "hint_solver_tests.rs"]
mod tests;
