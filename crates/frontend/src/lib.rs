pub mod app;
pub mod domain;
pub mod layout;
pub mod shared;
pub mod usecases;

use std::cell::Cell;

use contracts::config::SiteConfig;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const ROOT_ELEMENT_ID: &str = "app";

thread_local! {
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

/// Mount the site into `root`. Only the first call on a page does anything;
/// returns whether this call mounted.
pub fn init(root: HtmlElement, config: SiteConfig) -> bool {
    if STARTED.with(|started| started.replace(true)) {
        log::debug!("init: already started, ignoring");
        return false;
    }

    let from_markup = shared::dom::document()
        .map(|document| shared::markup::read_project_markup(&document))
        .unwrap_or_default();
    let projects = config.resolve_projects(from_markup);
    log::info!(
        "init: {} projects, visitor counter {}",
        projects.len(),
        if config.api_url().is_some() { "on" } else { "off" }
    );

    leptos::mount::mount_to(root, move || {
        leptos::view! { <app::App config=config projects=projects /> }
    })
    .forget();
    true
}

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let Some(document) = shared::dom::document() else {
        return;
    };
    let root = document
        .get_element_by_id(ROOT_ELEMENT_ID)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .or_else(|| document.body());
    let Some(root) = root else {
        log::error!("hydrate: no #{} element and no body", ROOT_ELEMENT_ID);
        return;
    };

    init(root, shared::site_config::read_site_config());
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
