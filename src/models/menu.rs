//! Mobile menu visibility state machine.

/// Visibility of the mobile menu surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    /// Menu hidden (initial)
    #[default]
    Closed,
    /// Menu overlay shown
    Open,
}

/// Events that may change [`MenuState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// User activated the menu toggle.
    Toggle,
    /// User activated a link inside the menu.
    Select,
    /// The menu surface reported its own state (outside click, Escape,
    /// viewport change). Always wins over the current state.
    Set(bool),
}

impl MenuState {
    /// Returns the state after `event`.
    pub fn apply(self, event: MenuEvent) -> Self {
        match (self, event) {
            (Self::Closed, MenuEvent::Toggle) => Self::Open,
            (Self::Open, MenuEvent::Toggle) => Self::Closed,
            (_, MenuEvent::Select) => Self::Closed,
            (_, MenuEvent::Set(open)) => Self::from(open),
        }
    }

    #[inline]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

impl From<bool> for MenuState {
    fn from(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_double_toggle_round_trip() {
        let state = MenuState::Closed
            .apply(MenuEvent::Toggle)
            .apply(MenuEvent::Toggle);
        assert_eq!(state, MenuState::Closed);
    }

    #[test]
    fn test_toggle_then_select_closes() {
        let opened = MenuState::Closed.apply(MenuEvent::Toggle);
        assert_eq!(opened, MenuState::Open);
        assert_eq!(opened.apply(MenuEvent::Select), MenuState::Closed);
    }

    #[test]
    fn test_select_always_closes() {
        let histories: &[&[MenuEvent]] = &[
            &[MenuEvent::Toggle],
            &[MenuEvent::Toggle, MenuEvent::Toggle, MenuEvent::Toggle],
            &[MenuEvent::Set(true)],
            &[MenuEvent::Toggle, MenuEvent::Set(false), MenuEvent::Set(true)],
            &[],
        ];
        for history in histories {
            let state = history
                .iter()
                .fold(MenuState::Closed, |s, e| s.apply(*e));
            assert_eq!(state.apply(MenuEvent::Select), MenuState::Closed);
        }
    }

    #[test]
    fn test_external_set_wins() {
        assert_eq!(MenuState::Open.apply(MenuEvent::Set(false)), MenuState::Closed);
        assert_eq!(MenuState::Closed.apply(MenuEvent::Set(true)), MenuState::Open);
        // Redundant reports are no-ops
        assert_eq!(MenuState::Open.apply(MenuEvent::Set(true)), MenuState::Open);
        assert_eq!(MenuState::Closed.apply(MenuEvent::Set(false)), MenuState::Closed);
    }
}
