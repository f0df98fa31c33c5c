//! Terminal rendering (impure shell).
//!
//! Widgets here read manager state and draw it with ratatui; they never
//! mutate the manager.

pub mod tab_bar;

pub use tab_bar::{render_tab_bar, tab_bar, tab_title, tab_titles, TAB_BAR_HEIGHT};
