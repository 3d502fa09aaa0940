//! UI components built with Leptos.
//!
//! - [`navbar`] - Site navigation bar with mobile menu and banners
//! - [`providers`] - Search, UI and theme context providers
//! - [`router`] - Browser location facility (current path, navigate)
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod navbar;
pub mod providers;
pub mod router;

pub use navbar::Navbar;
pub use providers::Providers;
pub use router::LocationContext;
