//! Editor state: tabs, open views, parts, and the manager tying them together.
//!
//! Everything here is plain data driven through `&mut self`; no widget
//! toolkit is involved.

pub mod components;
pub mod part_manager;
pub mod registry;
pub mod tab_container;
pub mod view_manager;

// Re-export for convenience
pub use components::{ComponentRegistry, HeadlessWindow, MainWindow, ViewObserver};
pub use part_manager::PartManager;
pub use registry::ViewRegistry;
pub use tab_container::{Tab, TabContainer};
pub use view_manager::ViewManager;
