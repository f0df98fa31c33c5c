//! Workspace layout files.
//!
//! A layout lists tabs and the documents open in each, plus an optional
//! activation rank per view:
//!
//! ```toml
//! [[tabs]]
//! views = [
//!   { document = "src/main.rs", activated = 2 },
//!   { document = "src/lib.rs" },
//! ]
//!
//! [[tabs]]
//! views = [{ document = "src/main.rs", activated = 5 }]
//! ```
//!
//! Applying a layout opens views in file order, then activates ranked views
//! from lowest to highest rank, so the highest rank ends up active.

use crate::model::{DocumentId, Placement, ViewId, ViewManagerError};
use crate::resolve::ViewResolutionPolicy;
use crate::state::ViewManager;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Errors from loading or applying a layout.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Failed to read the layout file.
    #[error("Failed to read layout file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Layout file contains invalid TOML or unknown fields.
    #[error("Invalid layout in {path}: {reason}")]
    ParseError {
        /// Path with the invalid layout.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A view entry has an empty document name.
    #[error("Empty document name in tab {tab}, view {view}")]
    InvalidDocument {
        /// Zero-based tab index in the file.
        tab: usize,
        /// Zero-based view index within the tab.
        view: usize,
    },

    /// The manager rejected an operation while applying the layout.
    #[error("Failed to apply layout: {0}")]
    Manager(#[from] ViewManagerError),
}

/// Parsed layout file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Layout {
    /// Tabs in display order.
    #[serde(default)]
    pub tabs: Vec<TabLayout>,
}

/// One tab of a layout.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TabLayout {
    /// Views in split order.
    #[serde(default)]
    pub views: Vec<ViewLayout>,
}

/// One view of a layout.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ViewLayout {
    /// Document shown by the view.
    pub document: String,
    /// Activation rank; higher is more recent. Unranked views are never activated.
    #[serde(default)]
    pub activated: Option<u64>,
}

impl Layout {
    /// Parse a layout from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Open this layout's tabs and views in `manager`.
    ///
    /// Document names are validated before anything is opened, so an invalid
    /// layout leaves the manager untouched. Returns the created views in
    /// file order.
    pub fn apply<P: ViewResolutionPolicy>(
        &self,
        manager: &mut ViewManager<P>,
    ) -> Result<Vec<ViewId>, LayoutError> {
        let documents = self.documents()?;

        let mut created = Vec::new();
        let mut ranked: Vec<(u64, ViewId)> = Vec::new();

        for (tab_layout, tab_documents) in self.tabs.iter().zip(documents) {
            if tab_documents.is_empty() {
                warn!("skipping layout tab with no views");
                continue;
            }
            let mut tab = None;
            for (view_layout, document) in tab_layout.views.iter().zip(tab_documents) {
                let id = match tab {
                    None => {
                        let id = manager.create_editor(document, Placement::NewTab);
                        tab = manager.tabs().tab_of(id);
                        id
                    }
                    Some(tab) => manager.open_in_tab(document, tab)?,
                };
                if let Some(rank) = view_layout.activated {
                    ranked.push((rank, id));
                }
                created.push(id);
            }
        }

        // Stable sort: equal ranks activate in file order.
        ranked.sort_by_key(|(rank, _)| *rank);
        for (_, id) in ranked {
            manager.activate_editor(id)?;
        }

        info!(views = created.len(), tabs = manager.tabs().len(), "layout applied");
        Ok(created)
    }

    fn documents(&self) -> Result<Vec<Vec<DocumentId>>, LayoutError> {
        self.tabs
            .iter()
            .enumerate()
            .map(|(tab, tab_layout)| {
                tab_layout
                    .views
                    .iter()
                    .enumerate()
                    .map(|(view, v)| {
                        DocumentId::new(v.document.as_str())
                            .map_err(|_| LayoutError::InvalidDocument { tab, view })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect()
    }
}

/// Read and parse a layout file.
///
/// Unlike config files, a missing layout is an error: the caller asked for it.
pub fn load_layout(path: impl AsRef<Path>) -> Result<Layout, LayoutError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| LayoutError::ReadError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Layout::from_toml(&contents).map_err(|e| LayoutError::ParseError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
