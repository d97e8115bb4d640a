//! Sidebar topic list and skills tabs. The "Projects" topic jumps to the
//! project catalog; every other topic shows a short content block in the
//! About pane.

use super::SkillsTabs;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::domain::a002_site_section::topic::sidebar_topics;
use contracts::domain::a002_site_section::{Pane, Topic, TopicAction};
use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let topics = ctx.projects.with_value(|projects| sidebar_topics(projects));

    let run = move |topic: &Topic| match topic.action() {
        TopicAction::OpenProjects => ctx.open_projects(),
        TopicAction::ShowContent(block) => {
            ctx.switch_pane(Pane::About);
            ctx.show_content(block);
        }
    };

    view! {
        <nav class="sidebar__topics" aria-label="Topics">
            <h2 class="sidebar__heading">"Categories"</h2>
            <ul class="category-list">
                {topics
                    .into_iter()
                    .map(|topic| {
                        let name = topic.name.clone();
                        let count = topic.count;
                        let on_key = {
                            let topic = topic.clone();
                            move |ev: KeyboardEvent| {
                                if ev.key() == "Enter" || ev.key() == " " {
                                    ev.prevent_default();
                                    run(&topic);
                                }
                            }
                        };
                        view! {
                            <li
                                class="category-item"
                                tabindex="0"
                                role="button"
                                on:click=move |_| run(&topic)
                                on:keydown=on_key
                            >
                                {icon("folder")}
                                <span class="category-name">{name}</span>
                                <span class="category-count">{count}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
        <SkillsTabs />
    }
}
