pub mod state;

use self::state::create_state;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::CardAnimated;
use crate::shared::dom;
use crate::shared::icons::icon;
use contracts::domain::a001_project::{
    Category, DetailView, ItemActivation, LinkTarget, ProjectRecord,
};
use leptos::ev::MouseEvent;
use leptos::html::Div;
use leptos::prelude::*;

/// Project list with a category bar and an inline detail area.
///
/// All state is local to the instance, so several catalogs can live on one
/// page without sharing filters or detail views.
#[component]
pub fn ProjectCatalog(
    /// Records to show, in display order.
    projects: Vec<ProjectRecord>,
) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let state = create_state(projects);
    let detail_ref = NodeRef::<Div>::new();
    let categories = state.with_untracked(|s| s.categories().to_vec());

    // Sidebar "Projects" entry resets every catalog to "All"
    Effect::new(move |previous: Option<u32>| {
        let current = ctx.catalog_reset.get();
        if previous.is_some() {
            state.update(|s| s.reset());
        }
        current
    });

    // Detail container is filled imperatively: in-page sections are
    // deep-copied nodes, which the view macro cannot express.
    Effect::new(move |_| {
        let detail = state.with(|s| s.detail().clone());
        let Some(container) = detail_ref.get() else {
            return;
        };
        match &detail {
            DetailView::Hidden => container.set_inner_html(""),
            DetailView::Section { anchor_id } => {
                if !dom::clone_section_into(&container, anchor_id) {
                    log::warn!("project detail: section #{} disappeared", anchor_id);
                }
            }
            DetailView::Placeholder(placeholder) => {
                container.set_inner_html(&placeholder.to_html())
            }
        }
        if detail.is_visible() {
            dom::scroll_into_view_smooth(&container);
        }
    });

    let select = move |category: Category| {
        log::debug!("project category -> {}", category);
        state.update(|s| s.select(category));
    };

    let activate = move |index: usize, ev: MouseEvent| {
        let outcome = state
            .try_update(|s| s.activate(index, dom::element_exists))
            .unwrap_or(ItemActivation::FollowLink);
        if outcome == ItemActivation::ShowDetail {
            ev.prevent_default();
        }
    };

    let visible_items = move || {
        state.with(|s| {
            s.visible()
                .into_iter()
                .map(|(index, record)| (index, record.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="projects-section">
            <div class="project-categories" role="toolbar" aria-label="Project categories">
                {categories
                    .into_iter()
                    .map(|category| {
                        let label = category.label().to_string();
                        let for_class = category.clone();
                        let for_pressed = category.clone();
                        view! {
                            <button
                                class="project-cat"
                                class:active=move || state.with(|s| s.active() == &for_class)
                                aria-pressed=move || {
                                    state.with(|s| (s.active() == &for_pressed).to_string())
                                }
                                data-cat=label.clone()
                                on:click=move |_| select(category.clone())
                            >
                                {label.clone()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <ul class="project-list">
                <For
                    each=visible_items
                    key=|(index, _)| *index
                    children=move |(index, record)| view! {
                        <ProjectItem record=record on_activate=move |ev| activate(index, ev) />
                    }
                />
            </ul>

            <Show when=move || state.with(|s| s.is_empty())>
                <p class="project-list__empty">"No projects published yet."</p>
            </Show>

            <div
                class="project-detail-container project-detail-inline"
                class:hidden=move || !state.with(|s| s.detail().is_visible())
            >
                <button
                    class="project-detail__close"
                    aria-label="Close project details"
                    on:click=move |_| state.update(|s| s.close_detail())
                >
                    {icon("x")}
                </button>
                <CardAnimated class="project-detail-card">
                    <div class="project-detail__body" node_ref=detail_ref></div>
                </CardAnimated>
            </div>
        </div>
    }
}

#[component]
fn ProjectItem<F>(record: ProjectRecord, on_activate: F) -> impl IntoView
where
    F: Fn(MouseEvent) + 'static,
{
    let external = record.link_target().is_external();
    let tags = record.tags_display();
    let anchor_id = match record.link_target() {
        LinkTarget::Anchor(id) => Some(id.to_string()),
        _ => None,
    };

    view! {
        <li>
            <a
                href=record.href.clone()
                class="project-link"
                target=external.then_some("_blank")
                rel=external.then_some("noopener noreferrer")
                aria-controls=anchor_id
                data-title=record.title.clone()
                data-href=record.href.clone()
                data-tags=tags.clone()
                data-date=record.date.clone()
                on:click=on_activate
            >
                <span class="project-title">{record.title.clone()}</span>
                <span class="project-date">{record.date.clone()}</span>
                <span class="project-tags">{tags.clone()}</span>
            </a>
        </li>
    }
}
