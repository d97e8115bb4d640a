//! TopHeader: site title, desktop navigation, search box and the mobile
//! menu toggle.

mod mobile_menu;
mod search_box;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::NavLinks;
use crate::shared::icons::icon;
use contracts::domain::a002_site_section::MenuEvent;
use mobile_menu::MobileMenu;
use search_box::SearchBox;
use leptos::html::{Button, Div};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let toggle_ref = NodeRef::<Button>::new();
    let menu_ref = NodeRef::<Div>::new();
    let is_open = move || ctx.is_mobile_menu_open();

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <a href="#home" class="top-header__title" on:click=move |ev| {
                    if ctx.follow_nav_link("#home") {
                        ev.prevent_default();
                    }
                }>
                    "Cloud Portfolio"
                </a>
            </div>

            <nav class="top-header__nav" aria-label="Main">
                <NavLinks class="nav-links--desktop" />
            </nav>

            <div class="top-header__actions">
                <SearchBox />

                <button
                    node_ref=toggle_ref
                    class="mobile-menu-toggle top-header__icon-btn"
                    class:active=is_open
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || is_open().to_string()
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.mobile_menu_event(MenuEvent::Toggle);
                    }
                >
                    {move || if is_open() { icon("x") } else { icon("menu") }}
                </button>
            </div>

            <MobileMenu toggle_ref=toggle_ref menu_ref=menu_ref />
        </header>
    }
}
