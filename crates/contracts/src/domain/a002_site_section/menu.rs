//! Collapsible navigation menu shown on narrow screens.

/// Above this viewport width the desktop navigation takes over.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Anything that can open or close the menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuEvent<'a> {
    Toggle,
    /// A navigation link inside the menu was followed, internal or external.
    LinkFollowed,
    ClickOutside,
    KeyDown(&'a str),
    Resize { width: f64 },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenuState {
    open: bool,
}

impl MobileMenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns `true` when the event changed the state.
    pub fn apply(&mut self, event: MenuEvent<'_>) -> bool {
        let open = match event {
            MenuEvent::Toggle => !self.open,
            MenuEvent::LinkFollowed | MenuEvent::ClickOutside => false,
            MenuEvent::KeyDown("Escape") => false,
            MenuEvent::KeyDown(_) => self.open,
            MenuEvent::Resize { width } if width > MOBILE_BREAKPOINT_PX => false,
            MenuEvent::Resize { .. } => self.open,
        };
        let changed = open != self.open;
        self.open = open;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened() -> MobileMenuState {
        let mut state = MobileMenuState::new();
        assert!(state.apply(MenuEvent::Toggle));
        assert!(state.is_open());
        state
    }

    #[test]
    fn test_toggle_flips() {
        let mut state = opened();
        assert!(state.apply(MenuEvent::Toggle));
        assert!(!state.is_open());
    }

    #[test]
    fn test_escape_closes_open_menu() {
        let mut state = opened();
        assert!(!state.apply(MenuEvent::KeyDown("Enter")));
        assert!(state.is_open());

        assert!(state.apply(MenuEvent::KeyDown("Escape")));
        assert!(!state.is_open());

        assert!(!state.apply(MenuEvent::KeyDown("Escape")));
        assert!(!state.is_open());
    }

    #[test]
    fn test_link_and_outside_click_close() {
        let mut state = opened();
        assert!(state.apply(MenuEvent::LinkFollowed));
        assert!(!state.is_open());

        let mut state = opened();
        assert!(state.apply(MenuEvent::ClickOutside));
        assert!(!state.is_open());
    }

    #[test]
    fn test_resize_closes_only_past_breakpoint() {
        let mut state = opened();
        assert!(!state.apply(MenuEvent::Resize { width: 768.0 }));
        assert!(state.is_open());

        assert!(state.apply(MenuEvent::Resize { width: 1024.0 }));
        assert!(!state.is_open());
    }

    #[test]
    fn test_closed_menu_ignores_closing_events() {
        let mut state = MobileMenuState::new();
        assert!(!state.apply(MenuEvent::ClickOutside));
        assert!(!state.apply(MenuEvent::Resize { width: 2000.0 }));
        assert!(!state.is_open());
    }
}
