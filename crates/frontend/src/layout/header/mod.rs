pub mod header;
pub mod language_switcher;

pub use header::Header;
