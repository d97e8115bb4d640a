use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::usecases::u501_visitor_count::VisitorCounter;
use chrono::{Datelike, Utc};
use contracts::domain::a002_site_section::route::GITHUB_PROFILE_URL;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let api_url = ctx.api_url.get_value();
    let year = Utc::now().year();

    view! {
        <footer data-zone="footer" class="site-footer">
            <span class="site-footer__visitors">
                {icon("eye")}
                <span>"Visitors: "</span>
                <VisitorCounter api_url=api_url />
            </span>
            <span class="site-footer__copyright">{format!("© {}", year)}</span>
            <a
                href=GITHUB_PROFILE_URL
                class="social-link"
                aria-label="GitHub"
                target="_blank"
                rel="noopener noreferrer"
            >
                {icon("github")}
            </a>
        </footer>
    }
}
