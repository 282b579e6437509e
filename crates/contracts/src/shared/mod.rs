pub mod file_staging;
pub mod i18n;
