//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`NavItem`], [`NavEntry`] - Configured and route-annotated navigation links
//! - [`Contacts`], [`ContactChannel`] - Backend contact record and rendered links
//! - [`MenuState`], [`MenuEvent`] - Mobile menu state machine
//! - [`ThemeOptions`] - Options passed through to the theme provider

mod contacts;
mod menu;
mod nav;
mod theme;

pub use contacts::{ChannelKind, ContactChannel, Contacts};
pub use menu::{MenuEvent, MenuState};
pub use nav::{NavEntry, NavItem};
pub use theme::ThemeOptions;
