//! Browser location facility.
//!
//! Tracks `location.pathname` in a signal and performs client-side
//! navigation with the History API. Uses native popstate events, so
//! browser back/forward buttons keep the signal in sync.
//!
//! This is not a router: it only exposes the current path and a way to
//! change it. Deciding what a path means is left to the consumers.

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::utils::dom;

/// Current path plus a navigate capability.
#[derive(Clone, Copy)]
pub struct LocationContext {
    /// Path portion of the current URL (no query or fragment).
    pub path: RwSignal<String>,
}

impl LocationContext {
    /// Create a context initialized from the browser URL.
    pub fn new() -> Self {
        Self {
            path: RwSignal::new(dom::pathname()),
        }
    }

    /// Keep [`path`](Self::path) in sync with back/forward navigation.
    ///
    /// Registers a popstate listener for the lifetime of the app.
    pub fn listen(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;
            let path = self.path;
            let closure = Closure::wrap(Box::new(move || {
                path.set(dom::pathname());
            }) as Box<dyn Fn()>);

            if let Some(window) = dom::window() {
                let _ = window
                    .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
            }

            // Keep the closure alive for the lifetime of the app
            closure.forget();
        }
    }

    /// Navigate to a same-origin `href` without reloading.
    ///
    /// A history entry is pushed whenever the full href (query and fragment
    /// included) differs from the current one. [`path`](Self::path) only
    /// changes, and the page only scrolls up, when the path itself changes.
    pub fn navigate(&self, href: &str) {
        if dom::relative_href() == href {
            return;
        }
        dom::push_path(href);

        let target = pathname_of(href);
        if self.path.with_untracked(|p| p != target) {
            self.path.set(target.to_string());
            dom::scroll_to_top();
        }
    }
}

impl Default for LocationContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Path portion of a site-relative href.
pub fn pathname_of(href: &str) -> &str {
    match href.split(['?', '#']).next() {
        Some("") | None => "/",
        Some(path) => path,
    }
}

/// Whether a click on a link to `href` should be handled client-side.
///
/// Only plain primary-button clicks on site-relative links qualify; modified
/// clicks (new tab, download) and external schemes go to the browser.
pub fn should_intercept(href: &str, button: i16, modified: bool) -> bool {
    button == 0 && !modified && href.starts_with('/') && !href.starts_with("//")
}

/// [`should_intercept`] for a DOM click event.
pub fn intercepts_click(ev: &leptos::ev::MouseEvent, href: &str) -> bool {
    let modified = ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key();
    should_intercept(href, ev.button(), modified)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use leptos::reactive::owner::Owner;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn search() -> String {
        dom::window().unwrap().location().search().unwrap()
    }

    #[wasm_bindgen_test]
    fn test_query_change_pushes_history() {
        let owner = Owner::new();
        owner.set();

        dom::push_path("/");
        let location = LocationContext::new();

        location.navigate("/search");
        assert_eq!(location.path.get_untracked(), "/search");
        assert_eq!(search(), "");

        location.navigate("/search?q=x");
        assert_eq!(location.path.get_untracked(), "/search");
        assert_eq!(search(), "?q=x");

        location.navigate("/search?q=y#results");
        assert_eq!(dom::relative_href(), "/search?q=y#results");

        location.navigate("/");
        assert_eq!(location.path.get_untracked(), "/");
        assert_eq!(dom::relative_href(), "/");
    }
}
