use crate::domain::a001_project::ui::catalog::ProjectCatalog;
use crate::domain::a002_site_section::ui::switcher::{SectionPane, SectionTabs};
use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a002_site_section::switcher::FADE_OUT_MS;
use contracts::domain::a002_site_section::Pane;
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="content" style="flex: 1; overflow: auto;">
            {children()}
        </div>
    }
}

/// Content header plus the About/Projects panes.
///
/// The About pane shows whatever block navigation selected last, with its
/// own project list under the About text. The Projects pane hosts the main
/// catalog. The two catalogs filter and open details independently.
#[component]
pub fn ContentArea() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let shows_hub = move || ctx.content.with(|c| c.shown().hosts_project_hub());

    view! {
        <div class="content-header">
            <h1>{move || ctx.content.with(|c| c.shown().title())}</h1>
            <SectionTabs />
        </div>

        <div class="content-body">
            <SectionPane pane=Pane::About>
                <div
                    class="content-block"
                    style=move || {
                        format!(
                            "opacity: {}; transition: opacity {}ms ease-in-out;",
                            ctx.content_opacity(),
                            FADE_OUT_MS
                        )
                    }
                >
                    <div inner_html=move || ctx.content.with(|c| c.shown().html())></div>
                    <Show when=shows_hub>
                        <ProjectCatalog projects=ctx.projects.get_value() />
                    </Show>
                </div>
            </SectionPane>

            <SectionPane pane=Pane::Projects>
                <ProjectCatalog projects=ctx.projects.get_value() />
            </SectionPane>
        </div>
    }
}
