//! tabviews
//!
//! Editor view resolution for tabbed workspaces: given a document and a set
//! of hints, decide which open view should show it, or whether a new one is
//! needed.
//!
//! The decision itself lives in [`resolve`] and is pure. [`state`] holds the
//! tabs, views and parts a host application mutates, with
//! [`state::ViewManager`] tying them to a policy. Layout files, config,
//! logging and the tab bar widget make up the shell around that core.

pub mod config;
pub mod layout;
pub mod logging;
pub mod model;
pub mod resolve;
pub mod state;
pub mod view;
