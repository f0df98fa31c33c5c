//! Registry of open views.
//!
//! Owns every [`View`] record and the activation counter that orders them by
//! recency.

use crate::model::{Activation, DocumentId, TabId, View, ViewId};
use crate::state::TabContainer;

/// Open views in creation order.
#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    views: Vec<View>,
    next_view: u64,
    clock: u64,
}

impl ViewRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry whose ids start above `last`.
    ///
    /// Used when binding to a tab container that already references views.
    pub fn starting_after(last: ViewId) -> Self {
        Self {
            next_view: last.get(),
            ..Self::default()
        }
    }

    /// Register a new, never-activated view of `document` in `tab`.
    pub fn open(&mut self, document: DocumentId, tab: TabId) -> ViewId {
        self.next_view += 1;
        let id = ViewId::new(self.next_view);
        self.views.push(View::new(id, document, tab));
        id
    }

    /// Look up a view.
    pub fn get(&self, id: ViewId) -> Option<&View> {
        self.views.iter().find(|v| v.id == id)
    }

    /// Whether a view is registered.
    pub fn contains(&self, id: ViewId) -> bool {
        self.get(id).is_some()
    }

    /// Unregister a view.
    pub fn remove(&mut self, id: ViewId) -> Option<View> {
        let index = self.views.iter().position(|v| v.id == id)?;
        Some(self.views.remove(index))
    }

    /// Stamp a view with the next activation token.
    pub fn touch(&mut self, id: ViewId) -> Option<Activation> {
        let view = self.views.iter_mut().find(|v| v.id == id)?;
        self.clock += 1;
        view.activation = Activation::new(self.clock);
        Some(view.activation)
    }

    /// Views of `document` in tab order, then split order within a tab.
    pub fn views_for(&self, document: &DocumentId, tabs: &TabContainer) -> Vec<View> {
        tabs.tabs()
            .iter()
            .flat_map(|tab| tab.views.iter())
            .filter_map(|id| self.get(*id))
            .filter(|v| &v.document == document)
            .cloned()
            .collect()
    }

    /// Most recently activated view overall.
    ///
    /// Ties (including never-activated views) go to the earliest created.
    pub fn most_recent(&self) -> Option<&View> {
        latest(self.views.iter())
    }

    /// Most recently activated view in one tab.
    pub fn most_recent_in(&self, tab: TabId) -> Option<&View> {
        latest(self.views.iter().filter(|v| v.tab == tab))
    }

    /// Distinct documents with at least one open view, in first-open order.
    pub fn documents(&self) -> Vec<&DocumentId> {
        let mut docs: Vec<&DocumentId> = Vec::new();
        for view in &self.views {
            if !docs.contains(&&view.document) {
                docs.push(&view.document);
            }
        }
        docs
    }

    /// All views in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &View> {
        self.views.iter()
    }

    /// Number of open views.
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Whether no views are open.
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

fn latest<'a>(views: impl Iterator<Item = &'a View>) -> Option<&'a View> {
    views.fold(None, |best: Option<&View>, view| match best {
        Some(current) if view.activation <= current.activation => Some(current),
        _ => Some(view),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str) -> DocumentId {
        DocumentId::new(name).expect("valid id")
    }

    #[test]
    fn open_assigns_fresh_ids() {
        let mut registry = ViewRegistry::new();
        let a = registry.open(doc("a.rs"), TabId::new(1));
        let b = registry.open(doc("a.rs"), TabId::new(1));
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn touch_orders_by_recency() {
        let mut registry = ViewRegistry::new();
        let a = registry.open(doc("a.rs"), TabId::new(1));
        let b = registry.open(doc("b.rs"), TabId::new(1));

        let first = registry.touch(b).expect("known view");
        let second = registry.touch(a).expect("known view");
        assert!(second > first);
        assert_eq!(registry.most_recent().map(|v| v.id), Some(a));
    }

    #[test]
    fn touch_unknown_view_returns_none() {
        let mut registry = ViewRegistry::new();
        assert_eq!(registry.touch(ViewId::new(5)), None);
    }

    #[test]
    fn views_for_follows_tab_order() {
        let mut tabs = TabContainer::new();
        let t1 = tabs.add_tab();
        let t2 = tabs.add_tab();
        let mut registry = ViewRegistry::new();

        // Created in tab 2 first, but tab 1 comes first in display order.
        let late = registry.open(doc("a.rs"), t2);
        tabs.push_view(t2, late);
        let early = registry.open(doc("a.rs"), t1);
        tabs.push_view(t1, early);
        let other = registry.open(doc("b.rs"), t1);
        tabs.push_view(t1, other);

        let ids: Vec<ViewId> = registry
            .views_for(&doc("a.rs"), &tabs)
            .into_iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, vec![early, late]);
    }

    #[test]
    fn views_for_unknown_document_is_empty() {
        let registry = ViewRegistry::new();
        assert!(registry.views_for(&doc("nope.rs"), &TabContainer::new()).is_empty());
    }

    #[test]
    fn most_recent_in_restricts_to_tab() {
        let mut registry = ViewRegistry::new();
        let a = registry.open(doc("a.rs"), TabId::new(1));
        let b = registry.open(doc("b.rs"), TabId::new(2));
        registry.touch(a);
        registry.touch(b);
        assert_eq!(registry.most_recent_in(TabId::new(1)).map(|v| v.id), Some(a));
        assert_eq!(registry.most_recent_in(TabId::new(3)), None);
    }

    #[test]
    fn documents_are_distinct_in_open_order() {
        let mut registry = ViewRegistry::new();
        registry.open(doc("b.rs"), TabId::new(1));
        registry.open(doc("a.rs"), TabId::new(1));
        registry.open(doc("b.rs"), TabId::new(2));
        let docs: Vec<&str> = registry.documents().iter().map(|d| d.as_str()).collect();
        assert_eq!(docs, vec!["b.rs", "a.rs"]);
    }

    #[test]
    fn remove_forgets_view() {
        let mut registry = ViewRegistry::new();
        let a = registry.open(doc("a.rs"), TabId::new(1));
        assert!(registry.remove(a).is_some());
        assert!(!registry.contains(a));
        assert!(registry.is_empty());
    }

    #[test]
    fn starting_after_skips_taken_ids() {
        let mut registry = ViewRegistry::starting_after(ViewId::new(7));
        assert!(registry.is_empty());
        assert_eq!(registry.open(doc("a.rs"), TabId::new(1)), ViewId::new(8));
        assert_eq!(registry.open(doc("a.rs"), TabId::new(1)), ViewId::new(9));
    }
}
