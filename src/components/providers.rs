//! Cross-cutting context providers.
//!
//! [`Providers`] fixes the nesting order at the application entry:
//!
//! ```text
//! SearchProvider        search state
//! └─ UiProvider         navigation delegate for links and buttons
//!    └─ ThemeProvider   theme options, passed through unmodified
//!       └─ children
//! ```
//!
//! Every provider only makes its context available to descendants. None of
//! them reads another provider's context while mounting.

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::config::breakpoints;
use crate::models::ThemeOptions;
use crate::utils::dom;

// ============================================================================
// Composition
// ============================================================================

/// Wraps the application tree in the provider stack.
///
/// # Props
/// - `navigate`: delegate used for programmatic, client-side navigation
/// - `theme`: options for [`ThemeProvider`]
#[component]
pub fn Providers(
    navigate: Callback<String>,
    #[prop(optional)] theme: ThemeOptions,
    children: Children,
) -> impl IntoView {
    view! {
        <SearchProvider>
            <UiProvider navigate=navigate>
                <ThemeProvider options=theme>{children()}</ThemeProvider>
            </UiProvider>
        </SearchProvider>
    }
}

// ============================================================================
// Search
// ============================================================================

/// Site search state shared between the search box and result views.
#[derive(Clone, Copy)]
pub struct SearchContext {
    /// Current query text.
    pub query: RwSignal<String>,
}

impl SearchContext {
    pub fn new() -> Self {
        Self {
            query: RwSignal::new(String::new()),
        }
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn SearchProvider(children: Children) -> impl IntoView {
    provide_context(SearchContext::new());
    children()
}

/// Access the search state.
pub fn use_search() -> SearchContext {
    use_context::<SearchContext>().expect("SearchContext must be provided")
}

// ============================================================================
// UI root
// ============================================================================

/// UI-level services shared by interactive components.
#[derive(Clone, Copy)]
pub struct UiContext {
    navigate: Callback<String>,
}

impl UiContext {
    /// Navigate to a site-relative path through the delegate.
    pub fn navigate(&self, href: &str) {
        self.navigate.run(href.to_string());
    }
}

#[component]
pub fn UiProvider(navigate: Callback<String>, children: Children) -> impl IntoView {
    provide_context(UiContext { navigate });
    children()
}

/// Access the UI context.
pub fn use_ui() -> UiContext {
    use_context::<UiContext>().expect("UiContext must be provided")
}

// ============================================================================
// Theme
// ============================================================================

/// Resolved theme, available to descendants.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Name of the applied theme.
    pub theme: Memo<String>,
}

/// Resolves the active theme and writes it to the `<html>` element.
///
/// The stored choice (localStorage, `storage_key`) wins over
/// `default_theme`; `"system"` follows `prefers-color-scheme`.
#[component]
pub fn ThemeProvider(options: ThemeOptions, children: Children) -> impl IntoView {
    let prefers_dark = use_media_query(breakpoints::PREFERS_DARK);
    let stored = dom::local_item(&options.storage_key);
    let attribute = options.attribute.clone();

    let theme = Memo::new(move |_| options.resolve(stored.as_deref(), prefers_dark.get()));

    // With the `class` attribute only the theme class is swapped
    Effect::new(move |previous: Option<String>| {
        let name = theme.get();
        if attribute == "class" {
            dom::swap_root_class(previous.as_deref(), &name);
        } else {
            dom::set_root_attribute(&attribute, &name);
        }
        name
    });

    provide_context(ThemeContext { theme });
    children()
}

/// Access the resolved theme.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext must be provided")
}
