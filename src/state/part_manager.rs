//! Part manager: tracks embedded editor parts and the active one.
//!
//! Owned exclusively by a [`ViewManager`](crate::state::ViewManager) and
//! released when the manager is dropped.

use crate::model::{ViewId, ViewManagerError};
use tracing::debug;

/// Registered parts plus the active part.
#[derive(Debug, Default)]
pub struct PartManager {
    parts: Vec<ViewId>,
    active: Option<ViewId>,
}

impl PartManager {
    /// Create a manager with no parts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a part. Registering twice is a no-op.
    pub fn add_part(&mut self, view: ViewId) {
        if !self.parts.contains(&view) {
            self.parts.push(view);
        }
    }

    /// Unregister a part. Clears the active part if it was this one.
    ///
    /// Returns whether the part was registered.
    pub fn remove_part(&mut self, view: ViewId) -> bool {
        let before = self.parts.len();
        self.parts.retain(|p| *p != view);
        if self.active == Some(view) {
            self.active = None;
        }
        self.parts.len() != before
    }

    /// Make a registered part active, or clear the active part with `None`.
    pub fn set_active_part(&mut self, view: Option<ViewId>) -> Result<(), ViewManagerError> {
        if let Some(id) = view {
            if !self.parts.contains(&id) {
                return Err(ViewManagerError::UnregisteredPart(id));
            }
        }
        self.active = view;
        Ok(())
    }

    /// Active part.
    pub fn active_part(&self) -> Option<ViewId> {
        self.active
    }

    /// Registered parts in registration order.
    pub fn parts(&self) -> &[ViewId] {
        &self.parts
    }
}

impl Drop for PartManager {
    fn drop(&mut self) {
        debug!(parts = self.parts.len(), "part manager released");
        self.active = None;
        self.parts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_part_is_idempotent() {
        let mut parts = PartManager::new();
        parts.add_part(ViewId::new(1));
        parts.add_part(ViewId::new(1));
        assert_eq!(parts.parts(), &[ViewId::new(1)]);
    }

    #[test]
    fn set_active_requires_registration() {
        let mut parts = PartManager::new();
        assert_eq!(
            parts.set_active_part(Some(ViewId::new(2))),
            Err(ViewManagerError::UnregisteredPart(ViewId::new(2)))
        );
        assert_eq!(parts.active_part(), None);
    }

    #[test]
    fn removing_active_part_clears_active() {
        let mut parts = PartManager::new();
        parts.add_part(ViewId::new(1));
        parts.set_active_part(Some(ViewId::new(1))).expect("registered");

        assert!(parts.remove_part(ViewId::new(1)));
        assert_eq!(parts.active_part(), None);
        assert!(!parts.remove_part(ViewId::new(1)));
    }

    #[test]
    fn active_part_can_be_cleared() {
        let mut parts = PartManager::new();
        parts.add_part(ViewId::new(1));
        parts.set_active_part(Some(ViewId::new(1))).expect("registered");
        parts.set_active_part(None).expect("clearing never fails");
        assert_eq!(parts.active_part(), None);
    }
}
