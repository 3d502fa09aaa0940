//! Session caching for backend responses.
//!
//! Backed by sessionStorage, so cached content lives for the browser tab
//! and is refetched on the next visit.

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use super::dom;

/// Cache operation errors.
#[derive(Debug, Clone, Error)]
pub enum CacheError {
    #[error("sessionStorage not available")]
    StorageUnavailable,
    #[error("failed to serialize cache entry")]
    SerializationFailed,
    #[error("failed to write cache entry")]
    WriteFailed,
}

/// Get cached data from sessionStorage.
///
/// Returns `None` if the key doesn't exist or deserialization fails.
pub fn get<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = dom::session_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

/// Store data in sessionStorage.
pub fn set<T: Serialize>(key: &str, data: &T) -> Result<(), CacheError> {
    let storage = dom::session_storage().ok_or(CacheError::StorageUnavailable)?;
    let json = serde_json::to_string(data).map_err(|_| CacheError::SerializationFailed)?;
    storage
        .set_item(key, &json)
        .map_err(|_| CacheError::WriteFailed)
}
