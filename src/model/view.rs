//! Editor view records.

use crate::model::{DocumentId, TabId, ViewId};

/// Activation order token.
///
/// Tokens are issued from a registry-wide counter, so a later activation
/// always compares greater than an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Activation(u64);

impl Activation {
    /// A view that was never activated.
    pub const NEVER: Activation = Activation(0);

    /// Create a token from a raw order value.
    pub fn new(order: u64) -> Self {
        Self(order)
    }

    /// Raw order value.
    pub fn get(self) -> u64 {
        self.0
    }

    /// Whether the view has ever been activated.
    pub fn is_never(self) -> bool {
        self.0 == 0
    }
}

/// A presentation of a document inside a tab.
///
/// The document reference is non-owning: closing a view never closes the
/// document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// Registry-assigned identity.
    pub id: ViewId,
    /// Document shown by this view.
    pub document: DocumentId,
    /// Tab containing this view.
    pub tab: TabId,
    /// When the view was last activated.
    pub activation: Activation,
}

impl View {
    /// Build a view record that has never been activated.
    pub fn new(id: ViewId, document: DocumentId, tab: TabId) -> Self {
        Self {
            id,
            document,
            tab,
            activation: Activation::NEVER,
        }
    }

    /// Same view with a different activation token.
    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }
}
