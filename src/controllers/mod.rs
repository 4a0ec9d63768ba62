//! Controllers
//!
//! View-independent logic behind the components: remote calls, cache
//! reconciliation and small pieces of UI state.

mod category;
mod link;
mod questions;

pub use category::{AddOutcome, CategoryController, SelectedIds};
pub use link::{links_in_category, CompletionBanner, LinkCreator};
pub use questions::{QuestionListing, QuestionRow};
