//! Shared contracts for the judicial assistant client.
//!
//! Everything here is target-agnostic: the wasm frontend renders it, the
//! native test suite exercises it directly.

pub mod domain;
pub mod shared;
pub mod usecases;

/// Fallback for the inference service when `API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
