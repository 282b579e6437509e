//! Verdict Details UI Module
//!
//! - view_model.rs: copy / print / reasoning toggle
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::VerdictDetails;
pub use view_model::VerdictDetailsViewModel;
