//! View resolution policies (pure).
//!
//! A policy answers one question: given the views open for a document and a
//! set of hints, which existing view should be used? Policies never create
//! views and never fail.

pub mod hint_solver;
pub mod last_used;
pub mod policy;

pub use hint_solver::HintSolver;
pub use last_used::LastUsedStrategy;
pub use policy::{Focus, ViewResolutionPolicy};
