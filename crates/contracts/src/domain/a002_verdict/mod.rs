pub mod aggregate;
pub mod export;

pub use aggregate::{SectionKind, VerdictResponse, VerdictSection};
pub use export::clipboard_text;
