//! About/Projects tabs and the two panes they switch between.

use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a002_site_section::switcher::FADE_OUT_MS;
use contracts::domain::a002_site_section::Pane;
use leptos::prelude::*;

#[component]
pub fn SectionTabs() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let tab = move |pane: Pane| {
        let is_selected = move || ctx.switcher.with(|s| s.selected_tab() == pane);
        view! {
            <button
                class="top-tab"
                class:active=is_selected
                role="tab"
                aria-selected=move || is_selected().to_string()
                aria-controls=pane.element_id()
                data-target=format!("#{}", pane.element_id())
                on:click=move |ev| {
                    ev.prevent_default();
                    ctx.switch_pane(pane);
                }
            >
                {pane.label()}
            </button>
        }
    };

    view! {
        <div
            class="top-tabs"
            role="tablist"
            aria-busy=move || ctx.switcher.with(|s| s.is_transitioning()).to_string()
        >
            {tab(Pane::About)}
            {tab(Pane::Projects)}
        </div>
    }
}

/// Pane whose visibility and opacity follow the switcher state.
#[component]
pub fn SectionPane(pane: Pane, children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let style = move || ctx.switcher.with(|s| s.style(pane));

    view! {
        <section
            id=pane.element_id()
            class="section-pane"
            role="tabpanel"
            hidden=move || style().hidden
            style=move || {
                format!(
                    "opacity: {}; transition: opacity {}ms ease-in-out;",
                    style().opacity,
                    FADE_OUT_MS
                )
            }
        >
            {children()}
        </section>
    }
}
