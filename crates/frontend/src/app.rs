use crate::layout::center::ContentArea;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use contracts::config::SiteConfig;
use contracts::domain::a001_project::ProjectRecord;
use leptos::prelude::*;

#[component]
pub fn App(
    /// Configuration read from the host page.
    config: SiteConfig,
    /// Project list already resolved from config or markup.
    projects: Vec<ProjectRecord>,
) -> impl IntoView {
    provide_context(AppGlobalContext::new(&config, projects));

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <ContentArea /> }.into_any()
        />
    }
}
