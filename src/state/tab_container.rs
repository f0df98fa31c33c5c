//! Tab container state.
//!
//! Ordered tabs, each holding its views in split order, plus the index of the
//! tab currently shown. Pure data; rendering lives in `view::tab_bar`.

use crate::model::{TabId, ViewId};

/// A single tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    /// Container-assigned identity.
    pub id: TabId,
    /// Views in split order.
    pub views: Vec<ViewId>,
}

/// Ordered collection of tabs with a current tab.
#[derive(Debug, Clone, Default)]
pub struct TabContainer {
    tabs: Vec<Tab>,
    /// Index into `tabs`; `None` only when there are no tabs.
    current: Option<usize>,
    next_id: u64,
}

impl TabContainer {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new empty tab and return its id.
    ///
    /// The first tab added becomes current.
    pub fn add_tab(&mut self) -> TabId {
        self.next_id += 1;
        let id = TabId::new(self.next_id);
        self.tabs.push(Tab {
            id,
            views: Vec::new(),
        });
        if self.current.is_none() {
            self.current = Some(0);
        }
        id
    }

    /// Remove a tab. Returns the views it held, or `None` if unknown.
    ///
    /// The current index moves to the previous tab when the current tab (or
    /// one before it) is removed.
    pub fn remove_tab(&mut self, tab: TabId) -> Option<Vec<ViewId>> {
        let index = self.position_of(tab)?;
        let removed = self.tabs.remove(index);
        self.current = match self.current {
            _ if self.tabs.is_empty() => None,
            Some(current) if current > index => Some(current - 1),
            Some(current) if current == index => Some(current.saturating_sub(1)),
            other => other,
        };
        Some(removed.views)
    }

    /// Add a view to the end of a tab. Returns `false` if the tab is unknown.
    pub fn push_view(&mut self, tab: TabId, view: ViewId) -> bool {
        match self.tabs.iter_mut().find(|t| t.id == tab) {
            Some(t) => {
                t.views.push(view);
                true
            }
            None => false,
        }
    }

    /// Detach a view from whichever tab holds it.
    ///
    /// Returns the tab id when that tab is now empty.
    pub fn remove_view(&mut self, view: ViewId) -> Option<TabId> {
        let tab = self.tabs.iter_mut().find(|t| t.views.contains(&view))?;
        tab.views.retain(|v| *v != view);
        tab.views.is_empty().then_some(tab.id)
    }

    /// Detach a view from one specific tab.
    ///
    /// Returns the tab id when that tab is now empty, `None` when it still
    /// holds views or does not hold `view` at all.
    pub fn remove_view_from(&mut self, tab: TabId, view: ViewId) -> Option<TabId> {
        let tab = self.tabs.iter_mut().find(|t| t.id == tab)?;
        let before = tab.views.len();
        tab.views.retain(|v| *v != view);
        (tab.views.len() < before && tab.views.is_empty()).then_some(tab.id)
    }

    /// Largest view id referenced by any tab.
    pub fn max_view_id(&self) -> Option<ViewId> {
        self.tabs.iter().flat_map(|t| t.views.iter()).copied().max()
    }

    /// Tab holding a view.
    pub fn tab_of(&self, view: ViewId) -> Option<TabId> {
        self.tabs
            .iter()
            .find(|t| t.views.contains(&view))
            .map(|t| t.id)
    }

    /// Index of a tab.
    pub fn position_of(&self, tab: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab)
    }

    /// Look up a tab by id.
    pub fn get(&self, tab: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab)
    }

    /// Current tab.
    pub fn current(&self) -> Option<&Tab> {
        self.current.and_then(|i| self.tabs.get(i))
    }

    /// Index of the current tab.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Switch to the tab at `index`. Returns its id, or `None` when out of range.
    pub fn set_current(&mut self, index: usize) -> Option<TabId> {
        let id = self.tabs.get(index)?.id;
        self.current = Some(index);
        Some(id)
    }

    /// All tabs in display order.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Number of tabs.
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Whether there are no tabs.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}
