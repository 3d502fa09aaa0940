//! Informational banners around the navbar.

use leptos::prelude::*;

use super::css;
use crate::config::{BANNER_DESKTOP, BANNER_MOBILE, BANNER_TAIL};
use crate::models::ContactChannel;

/// Which breakpoint a banner belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerVariant {
    /// Above the bar, xl and up.
    Desktop,
    /// Below the bar, under xl.
    Mobile,
}

impl BannerVariant {
    fn text(self) -> &'static str {
        match self {
            Self::Desktop => BANNER_DESKTOP,
            Self::Mobile => BANNER_MOBILE,
        }
    }

    fn class(self) -> String {
        let visibility = match self {
            Self::Desktop => css::bannerDesktop,
            Self::Mobile => css::bannerMobile,
        };
        format!("{} {}", css::banner, visibility)
    }
}

/// Static notice with a live phone link.
///
/// Without a phone number the notice reads on without a link.
#[component]
pub fn Banner(variant: BannerVariant, phone: Signal<Option<ContactChannel>>) -> impl IntoView {
    view! {
        <p class=variant.class()>
            {variant.text().trim_end()}
            " "
            {move || phone.get().map(|channel| view! {
                <a class=css::bannerLink href=channel.href>{channel.label}</a>
            })}
            {BANNER_TAIL.trim_end()}
        </p>
    }
}
