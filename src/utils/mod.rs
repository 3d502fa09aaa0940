//! Utility modules for web, DOM, and network operations.
//!
//! Provides:
//! - [`ApiClient`] - Backend requests with timeout and bearer auth
//! - [`cache`] - sessionStorage caching for responses
//! - [`dom`] - Window, storage and history helpers

pub mod cache;
pub mod dom;
mod fetch;

pub use fetch::ApiClient;
