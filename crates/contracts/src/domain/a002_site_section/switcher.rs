//! About/Projects pane switcher.
//!
//! The transition has two timed steps driven by the UI layer:
//!
//! ```text
//!  request(target)          after FADE_OUT_MS            next animation frame
//! Idle ────────────▶ FadingOut ───────────────▶ FadingIn ───────────────────▶ Idle
//!  visible: 1.0       visible: 0.0   swap()      target shown at 0.0  finish()  target: 1.0
//! ```
//!
//! Exactly one pane is un-hidden at every step; only opacity changes while
//! a pane fades.

/// Delay between starting the fade-out and swapping panes.
pub const FADE_OUT_MS: u32 = 150;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Pane {
    #[default]
    About,
    Projects,
}

impl Pane {
    /// DOM id of the pane element.
    pub fn element_id(&self) -> &'static str {
        match self {
            Pane::About => "about-section",
            Pane::Projects => "projects-section",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Pane::About => "About",
            Pane::Projects => "Projects",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    Idle,
    FadingOut { target: Pane },
    FadingIn,
}

/// Rendering attributes of one pane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneStyle {
    pub hidden: bool,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwitcherState {
    visible: Pane,
    phase: Phase,
    /// Bumped on every accepted request; timers carrying an older value are stale.
    generation: u64,
}

impl SwitcherState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(&self) -> Pane {
        self.visible
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Pane whose tab is highlighted: the target as soon as it is requested.
    pub fn selected_tab(&self) -> Pane {
        match self.phase {
            Phase::FadingOut { target } => target,
            _ => self.visible,
        }
    }

    pub fn style(&self, pane: Pane) -> PaneStyle {
        if pane != self.visible {
            return PaneStyle {
                hidden: true,
                opacity: 0.0,
            };
        }
        let opacity = match self.phase {
            Phase::Idle => 1.0,
            Phase::FadingOut { .. } | Phase::FadingIn => 0.0,
        };
        PaneStyle {
            hidden: false,
            opacity,
        }
    }

    /// Start fading towards `target`.
    ///
    /// Returns the generation to hand to [`Self::swap`] once
    /// [`FADE_OUT_MS`] have elapsed, or `None` when nothing needs to happen.
    /// A request during a transition retargets it.
    pub fn request(&mut self, target: Pane) -> Option<u64> {
        if self.phase == Phase::Idle && target == self.visible {
            return None;
        }
        self.phase = Phase::FadingOut { target };
        self.generation += 1;
        Some(self.generation)
    }

    /// Hide the faded pane and un-hide the target at opacity 0.
    ///
    /// Returns `true` when the caller should schedule [`Self::finish`] on the
    /// next animation frame.
    pub fn swap(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        let Phase::FadingOut { target } = self.phase else {
            return false;
        };
        self.visible = target;
        self.phase = Phase::FadingIn;
        true
    }

    /// Bring the visible pane to full opacity.
    pub fn finish(&mut self, generation: u64) {
        if generation == self.generation && self.phase == Phase::FadingIn {
            self.phase = Phase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_exactly_one_visible(state: &SwitcherState) {
        let shown = [Pane::About, Pane::Projects]
            .into_iter()
            .filter(|p| !state.style(*p).hidden)
            .count();
        assert_eq!(shown, 1, "{:?}", state);
    }

    #[test]
    fn test_initial_state_shows_about() {
        let state = SwitcherState::new();
        assert_eq!(state.visible(), Pane::About);
        assert_eq!(state.style(Pane::About), PaneStyle { hidden: false, opacity: 1.0 });
        assert_eq!(state.style(Pane::Projects), PaneStyle { hidden: true, opacity: 0.0 });
        assert!(!state.is_transitioning());
    }

    #[test]
    fn test_full_transition_to_projects() {
        let mut state = SwitcherState::new();
        assert_exactly_one_visible(&state);

        let generation = state.request(Pane::Projects).unwrap();
        assert_exactly_one_visible(&state);
        assert_eq!(state.selected_tab(), Pane::Projects);
        assert_eq!(state.style(Pane::About), PaneStyle { hidden: false, opacity: 0.0 });

        assert!(state.swap(generation));
        assert_exactly_one_visible(&state);
        assert_eq!(state.style(Pane::Projects), PaneStyle { hidden: false, opacity: 0.0 });
        assert!(state.style(Pane::About).hidden);

        state.finish(generation);
        assert_exactly_one_visible(&state);
        assert_eq!(state.visible(), Pane::Projects);
        assert_eq!(state.style(Pane::Projects), PaneStyle { hidden: false, opacity: 1.0 });
        assert!(!state.is_transitioning());
    }

    #[test]
    fn test_request_for_visible_pane_is_noop() {
        let mut state = SwitcherState::new();
        assert_eq!(state.request(Pane::About), None);
        assert_eq!(state, SwitcherState::new());
    }

    #[test]
    fn test_retarget_mid_transition_drops_stale_timer() {
        let mut state = SwitcherState::new();
        let first = state.request(Pane::Projects).unwrap();
        let second = state.request(Pane::About).unwrap();
        assert_ne!(first, second);

        assert!(!state.swap(first));
        assert_exactly_one_visible(&state);

        assert!(state.swap(second));
        state.finish(second);
        assert_eq!(state.visible(), Pane::About);
        assert_eq!(state.style(Pane::About).opacity, 1.0);
    }

    #[test]
    fn test_stale_finish_is_ignored() {
        let mut state = SwitcherState::new();
        let first = state.request(Pane::Projects).unwrap();
        assert!(state.swap(first));
        let second = state.request(Pane::About).unwrap();
        state.finish(first);
        assert!(state.is_transitioning());
        assert!(state.swap(second));
        state.finish(second);
        assert_eq!(state.visible(), Pane::About);
        assert!(!state.is_transitioning());
    }

    #[test]
    fn test_pane_helpers() {
        assert_eq!(Pane::About.label(), "About");
        assert_eq!(Pane::Projects.element_id(), "projects-section");
    }
}
