use contracts::domain::a002_site_section::{SkillTab, SkillsTabsState};
use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

/// Skill areas as tabs; only the selected tab's panel is shown.
#[component]
pub fn SkillsTabs() -> impl IntoView {
    let state = RwSignal::new(SkillsTabsState::new());

    let select = move |tab: SkillTab| {
        log::debug!("skills tab -> {}", tab.label());
        state.update(|s| s.select(tab));
    };

    view! {
        <section class="skills-tabs" aria-label="Skills">
            <h2 class="sidebar__heading">"Skills"</h2>
            <div class="skills-tab-list" role="tablist">
                {SkillTab::all()
                    .into_iter()
                    .map(|tab| {
                        let is_selected = move || state.with(|s| s.is_selected(tab));
                        view! {
                            <div
                                id=tab.tab_id()
                                class="skills-tab"
                                class:active=is_selected
                                role="tab"
                                tabindex="0"
                                aria-selected=move || is_selected().to_string()
                                aria-controls=tab.panel_id()
                                on:click=move |_| select(tab)
                                on:keydown=move |ev: KeyboardEvent| {
                                    if ev.key() == "Enter" || ev.key() == " " {
                                        ev.prevent_default();
                                        select(tab);
                                    }
                                }
                            >
                                {tab.label()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            {SkillTab::all()
                .into_iter()
                .map(|tab| {
                    view! {
                        <div
                            id=tab.panel_id()
                            class="skills-panel"
                            class:hidden=move || state.with(|s| s.panel_hidden(tab))
                            role="tabpanel"
                            aria-labelledby=tab.tab_id()
                            inner_html=tab.panel_html()
                        ></div>
                    }
                })
                .collect_view()}
        </section>
    }
}
