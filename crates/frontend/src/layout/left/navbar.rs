use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a002_site_section::route::GITHUB_PROFILE_URL;
use contracts::domain::a002_site_section::Route;
use leptos::prelude::*;

/// Navigation links. Rendered twice (desktop bar and mobile menu); both
/// copies read the same active route, so highlighting stays in sync.
#[component]
pub fn NavLinks(
    /// Extra class on the `<ul>` ("nav-links--desktop", "nav-links--mobile").
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <ul class=format!("nav-links {}", class)>
            {Route::all()
                .into_iter()
                .map(|route| {
                    if route.is_external() {
                        view! {
                            <li>
                                <a
                                    href=GITHUB_PROFILE_URL
                                    class="nav-link nav-link--external"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    on:click=move |_| {
                                        // Opened natively; only the menu needs closing
                                        ctx.follow_nav_link(route.href());
                                    }
                                >
                                    {route.label()}
                                </a>
                            </li>
                        }
                        .into_any()
                    } else {
                        view! {
                            <li>
                                <a
                                    href=route.href()
                                    class="nav-link"
                                    class:active=move || ctx.active_route.get() == route
                                    on:click=move |ev| {
                                        if ctx.follow_nav_link(route.href()) {
                                            ev.prevent_default();
                                            ev.stop_propagation();
                                        }
                                    }
                                >
                                    {route.label()}
                                </a>
                            </li>
                        }
                        .into_any()
                    }
                })
                .collect_view()}
        </ul>
    }
}
