//! Host collaborators injected into the view manager.
//!
//! The main window and the component registry are passed in at construction
//! instead of being looked up from process-wide state.

use crate::model::View;
use std::sync::Arc;

/// Parent window of the tab container.
pub trait MainWindow: Send + Sync {
    /// Show `caption` as the window title. Empty when no view is active.
    fn set_caption(&self, caption: &str);
}

/// Window that ignores captions, for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessWindow;

impl MainWindow for HeadlessWindow {
    fn set_caption(&self, _caption: &str) {}
}

/// Receives view lifecycle notifications.
///
/// All methods default to no-ops so components implement only what they need.
pub trait ViewObserver: Send + Sync {
    /// A view was created and registered.
    fn view_created(&self, _view: &View) {}
    /// A view became active.
    fn view_activated(&self, _view: &View) {}
    /// A view was closed. The record is the view's final state.
    fn view_closed(&self, _view: &View) {}
}

/// Loaded components, notified in load order.
#[derive(Default, Clone)]
pub struct ComponentRegistry {
    components: Vec<(String, Arc<dyn ViewObserver>)>,
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("components", &self.names())
            .finish()
    }
}

impl ComponentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a component, replacing any component with the same name in place.
    pub fn load(&mut self, name: impl Into<String>, observer: Arc<dyn ViewObserver>) {
        let name = name.into();
        match self.components.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = observer,
            None => self.components.push((name, observer)),
        }
    }

    /// Unload a component. Returns whether one was loaded under `name`.
    pub fn unload(&mut self, name: &str) -> bool {
        let before = self.components.len();
        self.components.retain(|(n, _)| n != name);
        self.components.len() != before
    }

    /// Names of loaded components in load order.
    pub fn names(&self) -> Vec<&str> {
        self.components.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub(crate) fn each(&self, mut f: impl FnMut(&dyn ViewObserver)) {
        for (_, observer) in &self.components {
            f(observer.as_ref());
        }
    }
}
