pub mod api_utils;
pub mod clipboard;
pub mod components;
pub mod file_upload;
pub mod i18n;
pub mod icons;
pub mod notify;
