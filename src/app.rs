//! Root application module.
//!
//! Wires the location facility, the provider stack and the page layout,
//! and loads the contacts record for the navbar.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::providers::{use_search, use_theme};
use crate::components::{LocationContext, Navbar, Providers};
use crate::config::{APP_NAME, NAV_ITEMS};
use crate::core::contacts::fetch_contacts;
use crate::core::nav::uncovered_sections;
use crate::core::{NavModel, RouteClassifier};
use crate::models::{Contacts, ThemeOptions};
use crate::utils::ApiClient;

stylance::import_crate_style!(css, "src/app.module.css");

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the [`LocationContext`]
/// - Composes the providers with explicit theme options and navigation delegate
/// - Renders the page layout
#[component]
pub fn App() -> impl IntoView {
    let location = LocationContext::new();
    location.listen();
    provide_context(location);

    report_config_drift();

    let navigate = Callback::new(move |href: String| location.navigate(&href));
    let theme = ThemeOptions::configured();

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::fallback>
                    <h1>"Что-то пошло не так"</h1>
                    <p>"Попробуйте перезагрузить страницу."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <Providers navigate=navigate theme=theme>
                <Layout />
            </Providers>
        </ErrorBoundary>
    }
}

/// Warn when a nav section would be highlighted together with home.
fn report_config_drift() {
    let uncovered = uncovered_sections(&RouteClassifier::configured(), NAV_ITEMS);
    if !uncovered.is_empty() {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::warn_1(
            &format!(
                "nav sections missing from NON_CATALOG_ROUTES: {}",
                uncovered.join(", ")
            )
            .into(),
        );
    }
}

/// Navbar above the page content.
#[component]
fn Layout() -> impl IntoView {
    let location = use_context::<LocationContext>().expect("LocationContext must be provided");
    let theme = use_theme();

    // Filled once the backend answers; the navbar degrades until then
    let contacts = RwSignal::new(None::<Contacts>);
    spawn_local(async move {
        match fetch_contacts(&ApiClient::configured()).await {
            Ok(record) => contacts.set(record),
            Err(_e) => {
                #[cfg(target_arch = "wasm32")]
                web_sys::console::warn_1(&format!("contacts unavailable: {}", _e).into());
            }
        }
    });

    view! {
        <div class=css::page data-theme=move || theme.theme.get()>
            <Navbar contacts=contacts current_path=location.path />
            <PageOutlet current_path=location.path />
        </div>
    }
}

/// Placeholder for the routed page content.
#[component]
fn PageOutlet(#[prop(into)] current_path: Signal<String>) -> impl IntoView {
    let search = use_search();
    let classifier = RouteClassifier::configured();

    let title = Memo::new(move |_| {
        current_path.with(|path| {
            NavModel::build(&classifier, NAV_ITEMS, &[], None, path)
                .active_label()
                .or_else(|| NAV_ITEMS.first().map(|item| item.label))
                .unwrap_or(APP_NAME)
        })
    });
    let on_search = Memo::new(move |_| current_path.with(|path| path.starts_with("/search")));

    view! {
        <main class=css::main>
            <h1>{move || title.get()}</h1>
            <Show when=move || on_search.get()>
                <input
                    class=css::search
                    type="search"
                    placeholder="Поиск по каталогу"
                    prop:value=move || search.query.get()
                    on:input=move |ev| search.query.set(event_target_value(&ev))
                />
            </Show>
        </main>
    }
}
