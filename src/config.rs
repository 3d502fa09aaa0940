//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`.

use crate::core::route::MatchStrategy;
use crate::models::NavItem;

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Banner copy shown above the navbar on wide viewports.
/// The phone link is appended after this text.
pub const BANNER_DESKTOP: &str = include_str!("../assets/text/banner_desktop.txt");

/// Banner copy shown below the navbar on narrow viewports.
pub const BANNER_MOBILE: &str = include_str!("../assets/text/banner_mobile.txt");

/// Banner copy following the phone link (shared by both banners).
pub const BANNER_TAIL: &str = include_str!("../assets/text/banner_tail.txt");

/// Theme provider options (TOML).
pub const THEME_TOML: &str = include_str!("../assets/theme.toml");

// =============================================================================
// Site Metadata
// =============================================================================

/// Brand name, also used as logo alt text.
pub const APP_NAME: &str = "Промоставки";

/// Logo image served from the site root.
pub const LOGO_PATH: &str = "/logo.png";

/// Logo intrinsic size (width, height) in pixels.
pub const LOGO_SIZE: (u32, u32) = (290, 40);

// =============================================================================
// Navigation Configuration
// =============================================================================

/// Primary navigation (desktop bar). Order is display order.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem::new("Каталог", "/"),
    NavItem::new("Поиск", "/search"),
    NavItem::new("Доставка", "/delivery"),
    NavItem::new("Вопросы и ответы", "/faq"),
    NavItem::new("О компании", "/about"),
    NavItem::new("Контакты", "/contacts"),
];

/// Mobile menu entries. Shares the href space of [`NAV_ITEMS`].
pub const MENU_ITEMS: &[NavItem] = &[
    NavItem::new("Каталог", "/"),
    NavItem::new("Поиск по сайту", "/search"),
    NavItem::new("Доставка и оплата", "/delivery"),
    NavItem::new("Вопросы и ответы", "/faq"),
    NavItem::new("О компании", "/about"),
    NavItem::new("Контакты", "/contacts"),
];

/// Path prefixes outside the catalog/home section.
///
/// Maintained by hand, independently of [`NAV_ITEMS`]. Drift between the two
/// is reported at startup (see [`crate::core::nav::uncovered_sections`]).
pub const NON_CATALOG_ROUTES: &[&str] = &["/search", "/faq", "/delivery", "/about", "/contacts"];

/// Path matching used to highlight nav entries.
pub const MATCH_STRATEGY: MatchStrategy = MatchStrategy::Substring;

// =============================================================================
// Contacts Configuration
// =============================================================================

/// Company mailbox, always listed before the backend-supplied address.
pub const COMPANY_EMAIL: &str = "enzakaz@bk.ru";

/// Backend endpoint (relative to the API base) holding the contacts record.
pub const CONTACTS_ENDPOINT: &str = "contact";

// =============================================================================
// Network Configuration
// =============================================================================

/// Backend origin, baked in at build time. Empty means same origin.
pub const API_URL: &str = match option_env!("API_URL") {
    Some(url) => url,
    None => "",
};

/// Bearer token for the backend, baked in at build time.
pub const API_AUTH_TOKEN: Option<&str> = option_env!("API_AUTH_HEADER");

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Layout Configuration
// =============================================================================

/// Media queries for the layout breakpoints.
pub mod breakpoints {
    /// Desktop nav and desktop banner are shown from here up.
    pub const XL: &str = "(min-width: 1280px)";
    /// Desktop contact block is shown from here up.
    pub const MD: &str = "(min-width: 768px)";
    /// OS-level dark mode preference.
    pub const PREFERS_DARK: &str = "(prefers-color-scheme: dark)";
}

// =============================================================================
// Cache Configuration
// =============================================================================

/// Session cache configuration.
pub mod cache {
    /// sessionStorage key for the contacts record.
    pub const CONTACTS_KEY: &str = "contacts_cache";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Filled glyphs, includes a WhatsApp logo (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
