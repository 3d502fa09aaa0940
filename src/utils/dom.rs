//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Element, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Get sessionStorage.
#[inline]
pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

/// Read a localStorage entry.
pub fn local_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

/// Get the document root (`<html>`).
fn root_element() -> Option<Element> {
    window()?.document()?.document_element()
}

/// Set an attribute on the document root (`<html>`).
pub fn set_root_attribute(name: &str, value: &str) {
    if let Some(root) = root_element() {
        let _ = root.set_attribute(name, value);
    }
}

/// Replace one class on the document root, leaving its other classes alone.
pub fn swap_root_class(previous: Option<&str>, class: &str) {
    if let Some(root) = root_element() {
        let list = root.class_list();
        if let Some(previous) = previous.filter(|p| *p != class && !p.is_empty()) {
            let _ = list.remove_1(previous);
        }
        if !class.is_empty() {
            let _ = list.add_1(class);
        }
    }
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Current `location.pathname`, `/` when unavailable.
pub fn pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| "/".to_string())
}

/// Current location relative to the origin: path, query and fragment.
pub fn relative_href() -> String {
    window()
        .map(|w| w.location())
        .map(|loc| {
            let path = loc.pathname().unwrap_or_default();
            let search = loc.search().unwrap_or_default();
            let hash = loc.hash().unwrap_or_default();
            format!("{}{}{}", path, search, hash)
        })
        .unwrap_or_else(|| "/".to_string())
}

/// Push a same-origin path onto the history stack.
pub fn push_path(path: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
    }
}

/// Scroll the page back to the top after a client-side navigation.
pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}


/// Wait for pending reactive effects and one browser task to run.
#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) async fn next_tick() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        if let Some(window) = window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}
