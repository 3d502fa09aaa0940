//! Backend HTTP client with timeout and bearer authentication.
//!
//! Requests go to `{API_URL}/api/{path}` with a fixed timeout and an
//! `Authorization: Bearer` header when a token was configured at build time.

use js_sys::{Array, Promise};
use serde::{Serialize, de::DeserializeOwned};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::config::{API_AUTH_TOKEN, API_URL, FETCH_TIMEOUT_MS};
use crate::core::error::FetchError;
use crate::utils::cache;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout using `Promise.race`.
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Resolves to undefined when the timer fires
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

// =============================================================================
// API Client
// =============================================================================

/// Pre-configured request issuer for the content backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    timeout_ms: i32,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(origin: &str, timeout_ms: i32, token: Option<&str>) -> Self {
        Self {
            base_url: format!("{}/api/", origin.trim_end_matches('/')),
            timeout_ms,
            token: token.filter(|t| !t.is_empty()).map(str::to_string),
        }
    }

    /// Client built from build-time configuration.
    pub fn configured() -> Self {
        Self::new(API_URL, FETCH_TIMEOUT_MS, API_AUTH_TOKEN)
    }

    /// Full URL of a backend path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `Authorization` header value, if a token is configured.
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Fetch and parse JSON from a backend path.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let text = self.get_text(path).await?;
        serde_json::from_str(&text).map_err(|e| FetchError::JsonParseError(e.to_string()))
    }

    /// Fetch JSON with sessionStorage caching.
    ///
    /// Cache is cleared when the browser tab is closed.
    pub async fn get_json_cached<T>(&self, path: &str, cache_key: &str) -> Result<T, FetchError>
    where
        T: DeserializeOwned + Serialize,
    {
        if let Some(cached) = cache::get::<T>(cache_key) {
            return Ok(cached);
        }

        let data = self.get_json::<T>(path).await?;

        // Best-effort
        let _ = cache::set(cache_key, &data);

        Ok(data)
    }

    /// GET a backend path as text, racing the request against the timeout.
    async fn get_text(&self, path: &str) -> Result<String, FetchError> {
        let window = web_sys::window().ok_or(FetchError::NoWindow)?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        if let Some(auth) = self.authorization() {
            let headers = Headers::new().map_err(|_| FetchError::RequestCreationFailed)?;
            headers
                .set("Authorization", &auth)
                .map_err(|_| FetchError::RequestCreationFailed)?;
            opts.set_headers(&headers);
        }

        let request = Request::new_with_str_and_init(&self.endpoint(path), &opts)
            .map_err(|_| FetchError::RequestCreationFailed)?;

        let fetch_promise = window.fetch_with_request(&request);

        match race_with_timeout(fetch_promise, self.timeout_ms).await {
            RaceResult::TimedOut => Err(FetchError::Timeout),
            RaceResult::Error(msg) => Err(FetchError::NetworkError(msg)),
            RaceResult::Completed(result) => {
                let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;

                if !resp.ok() {
                    return Err(FetchError::from_status(resp.status()));
                }

                let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
                    .await
                    .map_err(|_| FetchError::ResponseReadFailed)?;

                text.as_string().ok_or(FetchError::InvalidContent)
            }
        }
    }
}
