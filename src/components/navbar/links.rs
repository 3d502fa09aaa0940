//! Navigation and contact links.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use super::css;
use crate::components::icons as ic;
use crate::components::providers::use_ui;
use crate::components::router::intercepts_click;
use crate::models::{ContactChannel, NavEntry};

/// A nav entry. Site-relative clicks go through the UI navigation delegate.
///
/// `on_select` runs before navigation on any activation.
#[component]
pub fn NavLink(entry: NavEntry, #[prop(optional)] on_select: Option<Callback<()>>) -> impl IntoView {
    let ui = use_ui();
    let href = entry.href;

    let on_click = move |e: ev::MouseEvent| {
        if let Some(select) = on_select {
            select.run(());
        }
        if intercepts_click(&e, href) {
            e.prevent_default();
            ui.navigate(href);
        }
    };

    let class = if entry.active {
        format!("{} {}", css::navLink, css::navLinkActive)
    } else {
        css::navLink.to_string()
    };

    view! {
        <li class=css::navItem data-active=entry.active.to_string()>
            <a
                class=class
                href=href
                aria-current=entry.active.then_some("page")
                on:click=on_click
            >
                {entry.label}
            </a>
        </li>
    }
}

/// How a contact's secondary note is laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactLayout {
    /// Note on its own line under the label (desktop).
    Stacked,
    /// Note in parentheses after the label (mobile menu).
    Inline,
}

/// An external contact link (`tel:`, `wa.me`, `mailto:`).
#[component]
pub fn ContactLink(
    channel: ContactChannel,
    layout: ContactLayout,
    #[prop(optional)] on_select: Option<Callback<()>>,
) -> impl IntoView {
    let on_click = move |_: ev::MouseEvent| {
        if let Some(select) = on_select {
            select.run(());
        }
    };

    let text = match (layout, channel.note) {
        (ContactLayout::Stacked, Some(note)) => view! {
            <span class=css::contactText>
                <span>{channel.label}</span>
                <span class=css::contactNote>{note}</span>
            </span>
        }
        .into_any(),
        (ContactLayout::Inline, Some(note)) => view! {
            <span class=css::contactText>{format!("{}  ({})", channel.label, note)}</span>
        }
        .into_any(),
        (_, None) => view! { <span class=css::contactText>{channel.label}</span> }.into_any(),
    };

    view! {
        <a
            class=css::contactLink
            href=channel.href
            aria-label=channel.kind.aria_label()
            on:click=on_click
        >
            <span class=css::contactIcon><Icon icon=ic::channel(channel.kind) /></span>
            {text}
        </a>
    }
}
