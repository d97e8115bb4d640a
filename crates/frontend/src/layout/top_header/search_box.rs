use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::domain::a002_site_section::{ContentBlock, Pane};
use leptos::ev::KeyboardEvent;
use leptos::html::Input;
use leptos::prelude::*;

/// Terms shorter than this are not worth a log line.
const MIN_LOGGED_TERM_LEN: usize = 3;

/// Header search. Enter shows a "Search Results" block for the term.
#[component]
pub fn SearchBox() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let input_ref = NodeRef::<Input>::new();
    let (term, set_term) = signal(String::new());

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ev.prevent_default();
        let value = term.get_untracked().trim().to_string();
        if value.is_empty() {
            return;
        }
        log::info!("search: '{}'", value);
        ctx.switch_pane(Pane::About);
        ctx.show_content(ContentBlock::SearchResults { term: value });
    };

    view! {
        <div class="search-box">
            <button
                class="search-icon"
                aria-label="Focus search"
                on:click=move |ev| {
                    ev.prevent_default();
                    if let Some(input) = input_ref.get_untracked() {
                        let _ = input.focus();
                    }
                }
            >
                {icon("search")}
            </button>
            <input
                node_ref=input_ref
                type="search"
                class="search-input"
                placeholder="Search"
                aria-label="Search portfolio content"
                prop:value=term
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    if value.trim().chars().count() >= MIN_LOGGED_TERM_LEN {
                        log::debug!("searching for: {}", value.to_lowercase());
                    }
                    set_term.set(value);
                }
                on:keydown=on_keydown
            />
        </div>
    }
}
