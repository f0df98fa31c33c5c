//! View manager: owns the tabs, the open views and the part manager, and
//! resolves which view shows a document.

use crate::model::{DocumentId, Hints, Placement, TabId, View, ViewId, ViewManagerError};
use crate::resolve::{Focus, HintSolver, ViewResolutionPolicy};
use crate::state::{
    ComponentRegistry, HeadlessWindow, MainWindow, PartManager, TabContainer, ViewRegistry,
};
use tracing::{debug, info};

/// Editor view manager.
///
/// All host collaborators are injected at construction. The part manager is
/// created here and lives exactly as long as the manager.
///
/// # Resolution
///
/// [`editor_for`](Self::editor_for) gathers the document's views in tab
/// order and asks the policy once. The policy only ever picks among existing
/// views; when it picks none and the hints allow it, the manager creates the
/// view itself.
pub struct ViewManager<P = HintSolver> {
    tabs: TabContainer,
    registry: ViewRegistry,
    parts: PartManager,
    policy: P,
    window: Box<dyn MainWindow>,
    components: ComponentRegistry,
}

impl ViewManager<HintSolver> {
    /// Manager with an empty tab container, no window and no components.
    pub fn headless() -> Self {
        Self::new(
            TabContainer::new(),
            Box::new(HeadlessWindow),
            ComponentRegistry::new(),
            HintSolver,
        )
    }
}

impl<P: ViewResolutionPolicy> ViewManager<P> {
    /// Bind a manager to a tab container and a parent window.
    ///
    /// Views already referenced by `tabs` are not known to the registry and
    /// are never offered as candidates. Ids for new views start above the
    /// largest id `tabs` already holds.
    pub fn new(
        tabs: TabContainer,
        window: Box<dyn MainWindow>,
        components: ComponentRegistry,
        policy: P,
    ) -> Self {
        debug!(tabs = tabs.len(), components = ?components.names(), "view manager created");
        let registry = match tabs.max_view_id() {
            Some(last) => ViewRegistry::starting_after(last),
            None => ViewRegistry::new(),
        };
        Self {
            tabs,
            registry,
            parts: PartManager::new(),
            policy,
            window,
            components,
        }
    }

    /// Resolve the view to use for `document`.
    ///
    /// Consults the policy exactly once with the document's views and `hints`
    /// as given. If no view is selected and `hints` allow creation, a new view
    /// is created according to `hints.placement`. A document with no open
    /// views simply has no candidates.
    pub fn editor_for(&mut self, document: &DocumentId, hints: &Hints) -> Option<ViewId> {
        let candidates = self.registry.views_for(document, &self.tabs);
        let focus = self.focus();
        let selected = self
            .policy
            .select(&candidates, hints, &focus)
            .map(|view| view.id);

        debug!(
            document = %document,
            candidates = candidates.len(),
            selected = ?selected,
            "resolved editor"
        );

        match selected {
            Some(id) => Some(id),
            None if hints.allows_creation() => Some(self.create_editor(document.clone(), hints.placement)),
            None => None,
        }
    }

    /// Like [`editor_for`](Self::editor_for) but never creates a view.
    pub fn editor_for_existing(&mut self, document: &DocumentId, hints: &Hints) -> Option<ViewId> {
        let hints = hints.clone().with_create_if_needed(false);
        self.editor_for(document, &hints)
    }

    /// Resolve a view for `document` and activate it.
    pub fn show_document(
        &mut self,
        document: &DocumentId,
        hints: &Hints,
    ) -> Result<Option<ViewId>, ViewManagerError> {
        let Some(id) = self.editor_for(document, hints) else {
            return Ok(None);
        };
        self.activate_editor(id)?;
        Ok(Some(id))
    }

    /// Open a new view of `document`.
    ///
    /// `Placement::CurrentTab` falls back to a new tab when there is no
    /// current tab. The new view is registered with the part manager but not
    /// activated.
    pub fn create_editor(&mut self, document: DocumentId, placement: Placement) -> ViewId {
        let current = self.tabs.current().map(|t| t.id);
        let tab = match (placement, current) {
            (Placement::CurrentTab, Some(current)) => current,
            _ => self.tabs.add_tab(),
        };
        self.open_view(document, tab)
    }

    /// Open a new view of `document` at the end of an existing tab.
    pub fn open_in_tab(&mut self, document: DocumentId, tab: TabId) -> Result<ViewId, ViewManagerError> {
        if self.tabs.get(tab).is_none() {
            return Err(ViewManagerError::UnknownTabId(tab));
        }
        Ok(self.open_view(document, tab))
    }

    fn open_view(&mut self, document: DocumentId, tab: TabId) -> ViewId {
        let id = self.registry.open(document, tab);
        self.tabs.push_view(tab, id);
        self.parts.add_part(id);

        if let Some(view) = self.registry.get(id) {
            info!(view = %id, tab = %tab, document = %view.document, "editor created");
            self.components.each(|c| c.view_created(view));
        }
        id
    }

    /// Make `view` the active editor.
    ///
    /// Switches to its tab, stamps a fresh activation, sets the active part,
    /// updates the window caption and notifies components.
    pub fn activate_editor(&mut self, view: ViewId) -> Result<(), ViewManagerError> {
        let tab = self
            .registry
            .get(view)
            .ok_or(ViewManagerError::UnknownView(view))?
            .tab;

        self.parts.set_active_part(Some(view))?;
        if let Some(index) = self.tabs.position_of(tab) {
            self.tabs.set_current(index);
        }
        self.registry.touch(view);

        if let Some(record) = self.registry.get(view) {
            debug!(view = %view, activation = record.activation.get(), "editor activated");
            self.window.set_caption(record.document.as_str());
            self.components.each(|c| c.view_activated(record));
        }
        Ok(())
    }

    /// Close a view.
    ///
    /// Removes it from its tab (dropping the tab if it becomes empty), the
    /// registry and the part manager. Closing the active view activates the
    /// most recently used remaining view. If no remaining view was ever
    /// activated, the current tab's first view is preferred over the first
    /// view opened anywhere.
    pub fn close_editor(&mut self, view: ViewId) -> Result<(), ViewManagerError> {
        let record = self
            .registry
            .remove(view)
            .ok_or(ViewManagerError::UnknownView(view))?;

        if let Some(empty) = self.tabs.remove_view_from(record.tab, view) {
            self.tabs.remove_tab(empty);
        }
        let was_active = self.parts.active_part() == Some(view);
        self.parts.remove_part(view);

        info!(view = %view, document = %record.document, "editor closed");
        self.components.each(|c| c.view_closed(&record));

        if was_active {
            match self.successor() {
                Some(next) => self.activate_editor(next)?,
                None => self.window.set_caption(""),
            }
        }
        Ok(())
    }

    /// View to activate after the active one closes.
    fn successor(&self) -> Option<ViewId> {
        let recent = self.registry.most_recent()?;
        if !recent.activation.is_never() {
            return Some(recent.id);
        }
        self.tabs
            .current()
            .and_then(|tab| self.registry.most_recent_in(tab.id))
            .map(|v| v.id)
            .or(Some(recent.id))
    }

    /// Close every view of `document`. Returns how many were closed.
    pub fn close_document(&mut self, document: &DocumentId) -> Result<usize, ViewManagerError> {
        let ids: Vec<ViewId> = self
            .registry
            .iter()
            .filter(|v| &v.document == document)
            .map(|v| v.id)
            .collect();
        for id in &ids {
            self.close_editor(*id)?;
        }
        Ok(ids.len())
    }

    /// Switch to the tab at `index` and activate its most recently used view.
    ///
    /// Returns the activated view, if the tab has any.
    pub fn set_current_tab(&mut self, index: usize) -> Result<Option<ViewId>, ViewManagerError> {
        let tab = self
            .tabs
            .set_current(index)
            .ok_or(ViewManagerError::UnknownTab {
                index,
                count: self.tabs.len(),
            })?;
        let Some(view) = self.registry.most_recent_in(tab).map(|v| v.id) else {
            return Ok(None);
        };
        self.activate_editor(view)?;
        Ok(Some(view))
    }

    /// Current focus, as handed to the policy.
    pub fn focus(&self) -> Focus {
        Focus {
            active_view: self.parts.active_part(),
            current_tab: self.tabs.current().map(|t| t.id),
        }
    }

    /// The active editor.
    pub fn active_editor(&self) -> Option<&View> {
        self.parts.active_part().and_then(|id| self.registry.get(id))
    }

    /// Views of `document` in tab order.
    pub fn editors_for(&self, document: &DocumentId) -> Vec<View> {
        self.registry.views_for(document, &self.tabs)
    }

    /// Documents with at least one open view.
    pub fn documents(&self) -> Vec<&DocumentId> {
        self.registry.documents()
    }

    /// The tab container.
    pub fn tabs(&self) -> &TabContainer {
        &self.tabs
    }

    /// The view registry.
    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }

    /// The owned part manager.
    pub fn part_manager(&self) -> &PartManager {
        &self.parts
    }

    /// The resolution policy.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Loaded components; load or unload through this.
    pub fn components_mut(&mut self) -> &mut ComponentRegistry {
        &mut self.components
    }
}

impl<P> std::fmt::Debug for ViewManager<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewManager")
            .field("tabs", &self.tabs)
            .field("registry", &self.registry)
            .field("parts", &self.parts)
            .field("components", &self.components)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "view_manager_tests.rs"]
mod tests;
