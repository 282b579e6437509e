pub mod aggregate;
pub mod validation;

pub use aggregate::{CaseDraft, CaseField, CaseInput, Currency};
pub use validation::FormErrors;
