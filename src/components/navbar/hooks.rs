//! Menu state hook for the navbar.

use leptos::prelude::*;

use crate::models::{MenuEvent, MenuState};

/// Owner of the mobile menu visibility.
///
/// The single source of truth for the menu: desktop and mobile branches read
/// the same signal, and writes happen only through [`toggle`](Self::toggle),
/// [`select`](Self::select) and [`set_open`](Self::set_open).
#[derive(Clone, Copy)]
pub struct MenuController {
    state: RwSignal<MenuState>,
}

impl MenuController {
    /// Create a controller with the menu closed.
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(MenuState::default()),
        }
    }

    /// Current state (tracked).
    #[cfg(test)]
    pub fn state(&self) -> MenuState {
        self.state.get()
    }

    /// Whether the menu is open (tracked).
    pub fn is_open(&self) -> bool {
        self.state.with(|s| s.is_open())
    }

    /// The menu toggle was activated.
    pub fn toggle(&self) {
        self.dispatch(MenuEvent::Toggle);
    }

    /// A link inside the menu was activated.
    pub fn select(&self) {
        self.dispatch(MenuEvent::Select);
    }

    /// The menu surface reported a state change (outside click, Escape,
    /// viewport change).
    pub fn set_open(&self, open: bool) {
        self.dispatch(MenuEvent::Set(open));
    }

    fn dispatch(&self, event: MenuEvent) {
        let current = self.state.get_untracked();
        let next = current.apply(event);
        if next != current {
            self.state.set(next);
        }
    }
}

impl Default for MenuController {
    fn default() -> Self {
        Self::new()
    }
}
