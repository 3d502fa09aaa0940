//! Site navigation bar.
//!
//! Renders a desktop region (primary nav + contact block) and a mobile
//! region (brand, menu toggle, slide-out menu) from one [`NavModel`], plus an
//! informational banner per breakpoint. CSS decides which region is visible.

mod banner;
mod hooks;
mod links;

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::components::icons as ic;
use crate::components::providers::use_ui;
use crate::components::router::intercepts_click;
use crate::config::{APP_NAME, LOGO_PATH, LOGO_SIZE, MENU_ITEMS, NAV_ITEMS, breakpoints};
use crate::core::{NavModel, RouteClassifier};
use crate::models::{ChannelKind, Contacts, NavItem};

use banner::{Banner, BannerVariant};
use hooks::MenuController;
use links::{ContactLayout, ContactLink, NavLink};

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

/// Navigation bar.
///
/// # Props
/// - `contacts`: contact record, `None` while loading or when unavailable
/// - `current_path`: path of the current location
/// - `nav_items` / `menu_items`: override the configured entries
#[component]
pub fn Navbar(
    #[prop(into)] contacts: Signal<Option<Contacts>>,
    #[prop(into)] current_path: Signal<String>,
    #[prop(default = NAV_ITEMS)] nav_items: &'static [NavItem],
    #[prop(default = MENU_ITEMS)] menu_items: &'static [NavItem],
) -> impl IntoView {
    let menu = MenuController::new();
    let classifier = RouteClassifier::configured();

    let model = Memo::new(move |_| {
        contacts.with(|c| {
            current_path.with(|path| {
                NavModel::build(&classifier, nav_items, menu_items, c.as_ref(), path)
            })
        })
    });
    let phone = Signal::derive(move || model.with(|m| m.phone().cloned()));

    // The menu only exists below the xl breakpoint
    let is_desktop = use_media_query(breakpoints::XL);
    Effect::new(move || {
        if is_desktop.get() {
            menu.set_open(false);
        }
    });

    let escape = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" {
            menu.set_open(false);
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <div class=css::root>
            <Banner variant=BannerVariant::Desktop phone=phone />
            <nav class=css::bar data-menu-open=move || menu.is_open().to_string()>
                <Brand />
                <DesktopNav model=model />
                <MenuToggle menu=menu />
                <MobileMenu model=model menu=menu />
            </nav>
            <Banner variant=BannerVariant::Mobile phone=phone />
        </div>
    }
}

/// Logo link to the catalog root.
#[component]
fn Brand() -> impl IntoView {
    let ui = use_ui();
    let on_click = move |e: ev::MouseEvent| {
        if intercepts_click(&e, "/") {
            e.prevent_default();
            ui.navigate("/");
        }
    };

    view! {
        <a class=css::brand href="/" on:click=on_click>
            <img
                class=css::logo
                src=LOGO_PATH
                alt=APP_NAME
                width=LOGO_SIZE.0.to_string()
                height=LOGO_SIZE.1.to_string()
            />
        </a>
    }
}

/// Primary nav (xl and up) and contact block (md and up).
#[component]
fn DesktopNav(model: Memo<NavModel>) -> impl IntoView {
    view! {
        <div class=css::desktop>
            <ul class=css::desktopNav>
                {move || model.with(|m| {
                    m.primary
                        .iter()
                        .cloned()
                        .map(|entry| view! { <NavLink entry=entry /> })
                        .collect::<Vec<_>>()
                })}
            </ul>
            <ul class=css::desktopContacts>
                {move || model.with(|m| {
                    let (emails, phones): (Vec<_>, Vec<_>) = m
                        .channels
                        .iter()
                        .cloned()
                        .partition(|c| c.kind == ChannelKind::Email);
                    let phones = phones
                        .into_iter()
                        .map(|channel| view! {
                            <li class=css::contactItem>
                                <ContactLink channel=channel layout=ContactLayout::Stacked />
                            </li>
                        })
                        .collect::<Vec<_>>();
                    let emails = emails
                        .into_iter()
                        .map(|channel| view! {
                            <ContactLink channel=channel layout=ContactLayout::Stacked />
                        })
                        .collect::<Vec<_>>();
                    view! {
                        {phones}
                        <li class=css::emailGroup>{emails}</li>
                    }
                })}
            </ul>
        </div>
    }
}

/// Hamburger button, shown below the xl breakpoint.
#[component]
fn MenuToggle(menu: MenuController) -> impl IntoView {
    view! {
        <button
            class=css::toggle
            type="button"
            aria-expanded=move || menu.is_open().to_string()
            aria-label=move || if menu.is_open() { "Закрыть меню" } else { "Открыть меню" }
            on:click=move |_| menu.toggle()
        >
            {move || if menu.is_open() {
                view! { <Icon icon=ic::CLOSE /> }.into_any()
            } else {
                view! { <Icon icon=ic::MENU /> }.into_any()
            }}
        </button>
    }
}

/// Slide-out menu. Every link in it closes the menu.
#[component]
fn MobileMenu(model: Memo<NavModel>, menu: MenuController) -> impl IntoView {
    let on_select = Callback::new(move |_: ()| menu.select());

    view! {
        <Show when=move || menu.is_open()>
            <div class=css::backdrop on:click=move |_| menu.set_open(false)></div>
            <div class=css::menu>
                <ul class=css::menuList>
                    {move || model.with(|m| {
                        m.menu
                            .iter()
                            .cloned()
                            .map(|entry| view! { <NavLink entry=entry on_select=on_select /> })
                            .collect::<Vec<_>>()
                    })}
                </ul>
                <ul class=css::menuContacts>
                    {move || model.with(|m| {
                        m.channels
                            .iter()
                            .cloned()
                            .map(|channel| view! {
                                <li class=css::contactItem>
                                    <ContactLink
                                        channel=channel
                                        layout=ContactLayout::Inline
                                        on_select=on_select
                                    />
                                </li>
                            })
                            .collect::<Vec<_>>()
                    })}
                </ul>
            </div>
        </Show>
    }
}
