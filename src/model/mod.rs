//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod hints;
pub mod identifiers;
pub mod view;

// Re-export for convenience
pub use error::{AppError, ViewManagerError};
pub use hints::{Existing, Hints, Placement, Strategy};
pub use identifiers::{DocumentId, InvalidDocumentId, TabId, ViewId};
pub use view::{Activation, View};
