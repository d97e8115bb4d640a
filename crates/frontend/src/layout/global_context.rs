use contracts::config::SiteConfig;
use contracts::domain::a001_project::ProjectRecord;
use contracts::domain::a002_site_section::route::navigate;
use contracts::domain::a002_site_section::switcher::FADE_OUT_MS;
use contracts::domain::a002_site_section::{
    ContentBlock, ContentState, MenuEvent, MobileMenuState, Navigation, Pane, Route,
    SwitcherState,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::dom;

/// Opacity of the content body while a new block is swapped in.
const CONTENT_DIM_OPACITY: f32 = 0.5;

/// Page-wide UI state shared through context.
///
/// Each project catalog keeps its own state; only the "reset to All"
/// request is broadcast from here.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_route: RwSignal<Route>,
    pub content: RwSignal<ContentState>,
    pub mobile_menu: RwSignal<MobileMenuState>,
    pub switcher: RwSignal<SwitcherState>,
    /// Bumped to ask every catalog to go back to "All".
    pub catalog_reset: RwSignal<u32>,
    pub projects: StoredValue<Vec<ProjectRecord>>,
    pub api_url: StoredValue<Option<String>>,
}

impl AppGlobalContext {
    pub fn new(config: &SiteConfig, projects: Vec<ProjectRecord>) -> Self {
        Self {
            active_route: RwSignal::new(Route::default()),
            content: RwSignal::new(ContentState::new()),
            mobile_menu: RwSignal::new(MobileMenuState::new()),
            switcher: RwSignal::new(SwitcherState::new()),
            catalog_reset: RwSignal::new(0),
            projects: StoredValue::new(projects),
            api_url: StoredValue::new(config.api_url().map(str::to_string)),
        }
    }

    pub fn content_opacity(&self) -> f32 {
        if self.content.with(|c| c.is_dimmed()) {
            CONTENT_DIM_OPACITY
        } else {
            1.0
        }
    }

    /// Handle a click on a navigation link.
    ///
    /// Returns `false` when the browser should follow the link itself: any
    /// non-`#` href and the external GitHub route. The mobile menu is closed
    /// either way.
    pub fn follow_nav_link(&self, href: &str) -> bool {
        self.mobile_menu_event(MenuEvent::LinkFollowed);
        if !href.starts_with('#') {
            return false;
        }

        let (route, navigation) = navigate(href);
        log::debug!("navigate: href='{}' -> {:?}", href, route);
        match navigation {
            Navigation::Show(section) => {
                self.active_route.set(route);
                self.switch_pane(Pane::About);
                self.show_content(ContentBlock::Section(section));
                true
            }
            Navigation::External(url) => {
                log::debug!("navigate: leaving for {}", url);
                false
            }
        }
    }

    /// Swap the main content with a short dim transition. Only the most
    /// recent request is rendered when several overlap.
    pub fn show_content(&self, block: ContentBlock) {
        let Some(generation) = self.content.try_update(|c| c.dim()) else {
            return;
        };
        let content = self.content;
        spawn_local(async move {
            TimeoutFuture::new(FADE_OUT_MS).await;
            let committed = content
                .try_update(|c| c.commit(generation, block))
                .unwrap_or(false);
            if committed {
                dom::scroll_selector_into_view(".main-content");
            }
        });
    }

    /// Start the About/Projects fade. Stale timers from an earlier request
    /// are ignored by [`SwitcherState`].
    pub fn switch_pane(&self, target: Pane) {
        let Some(generation) = self.switcher.try_update(|s| s.request(target)).flatten() else {
            return;
        };
        log::debug!("switch pane -> {:?} (generation {})", target, generation);

        let switcher = self.switcher;
        spawn_local(async move {
            TimeoutFuture::new(FADE_OUT_MS).await;
            let swapped = switcher.try_update(|s| s.swap(generation)).unwrap_or(false);
            if !swapped {
                return;
            }
            request_animation_frame(move || {
                switcher.update(|s| s.finish(generation));
                if target == Pane::Projects {
                    dom::scroll_selector_into_view("#projects-section .projects-section");
                }
            });
        });
    }

    /// Show the Projects pane with every catalog filtered to "All".
    pub fn open_projects(&self) {
        self.catalog_reset.update(|n| *n = n.wrapping_add(1));
        self.switch_pane(Pane::Projects);
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu.with(|m| m.is_open())
    }

    /// Feed an event to the mobile menu; subscribers are only notified when
    /// it actually opens or closes.
    pub fn mobile_menu_event(&self, event: MenuEvent<'_>) {
        self.mobile_menu.maybe_update(|m| m.apply(event));
    }
}
