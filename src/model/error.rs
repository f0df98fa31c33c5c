//! Error types for tabviews.
//!
//! Errors are grouped per concern with `thiserror` and compose into
//! [`AppError`] through `From` conversions, so the binary can use `?` end to end.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the binary
//!   - [`ViewManagerError`] - Manager operations referring to views or tabs that do not exist
//!   - [`ConfigError`] - Config file read/parse failures
//!   - [`LoggingError`] - Tracing initialization failures
//!   - [`LayoutError`] - Workspace layout file failures
//!
//! View resolution itself has no error type: every combination of candidates
//! and hints maps to a view or to nothing. Resolving a document with no open
//! views is "zero candidates", not a failure.

use crate::config::ConfigError;
use crate::layout::LayoutError;
use crate::logging::LoggingError;
use crate::model::{TabId, ViewId};
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Workspace layout could not be loaded or applied.
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    /// A view manager operation failed.
    #[error("View manager error: {0}")]
    Manager(#[from] ViewManagerError),

    /// Output could not be serialized.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// Errors from view manager operations.
///
/// These are caller errors: the referenced view or tab is not (or no longer)
/// managed. Manager state is left unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewManagerError {
    /// No view with this id is open.
    #[error("Unknown view: {0}")]
    UnknownView(ViewId),

    /// Tab index is out of range.
    #[error("Unknown tab index {index} (have {count} tabs)")]
    UnknownTab {
        /// Requested index.
        index: usize,
        /// Number of tabs at the time of the call.
        count: usize,
    },

    /// No tab with this id exists.
    #[error("Unknown tab: {0}")]
    UnknownTabId(TabId),

    /// The part manager has no part for this view.
    #[error("View {0} is not registered with the part manager")]
    UnregisteredPart(ViewId),
}
