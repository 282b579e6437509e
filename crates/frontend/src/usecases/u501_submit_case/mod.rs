pub mod api;
pub mod loading_overlay;
pub mod view;
pub mod view_model;

pub use view::CaseForm;
