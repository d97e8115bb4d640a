use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::NavLinks;
use crate::shared::dom;
use contracts::domain::a002_site_section::MenuEvent;
use leptos::ev;
use leptos::html::{Button, Div};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Node;

/// Collapsible navigation for narrow screens.
///
/// Closes on Escape and on clicks outside the menu and its toggle. Growing
/// the window past the mobile breakpoint closes it too. Listeners are
/// removed with the owner.
#[component]
pub fn MobileMenu(toggle_ref: NodeRef<Button>, menu_ref: NodeRef<Div>) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let click_handle = window_event_listener(ev::click, move |event| {
        if !ctx.mobile_menu.with_untracked(|m| m.is_open()) {
            return;
        }
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
            return;
        };
        let inside_toggle = toggle_ref
            .get_untracked()
            .is_some_and(|toggle| toggle.contains(Some(&target)));
        let inside_menu = menu_ref
            .get_untracked()
            .is_some_and(|menu| menu.contains(Some(&target)));
        if !inside_toggle && !inside_menu {
            ctx.mobile_menu_event(MenuEvent::ClickOutside);
        }
    });

    let keydown_handle = window_event_listener(ev::keydown, move |event| {
        ctx.mobile_menu_event(MenuEvent::KeyDown(&event.key()));
    });

    let resize_handle = window_event_listener(ev::resize, move |_| {
        if let Some(width) = dom::viewport_width() {
            ctx.mobile_menu_event(MenuEvent::Resize { width });
        }
    });

    on_cleanup(move || {
        click_handle.remove();
        keydown_handle.remove();
        resize_handle.remove();
    });

    view! {
        <div
            node_ref=menu_ref
            class="mobile-menu"
            class:hidden=move || !ctx.is_mobile_menu_open()
        >
            <NavLinks class="nav-links--mobile" />
        </div>
    }
}
