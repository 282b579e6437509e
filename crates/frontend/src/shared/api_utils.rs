//! API utilities for talking to the opinion service
//!
//! The service lives on its own origin, configured at build time.

use contracts::DEFAULT_API_BASE_URL;

/// Get the base URL for API requests
///
/// Taken from the `API_BASE_URL` environment variable when the bundle is
/// built (`API_BASE_URL=https://api.example.com trunk build`), otherwise
/// `http://localhost:5000`. Trailing slashes are removed.
///
/// # Example
/// ```rust
/// # use frontend::shared::api_utils::api_base;
/// let url = format!("{}/ask/gemini", api_base());
/// ```
pub fn api_base() -> String {
    option_env!("API_BASE_URL")
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}
