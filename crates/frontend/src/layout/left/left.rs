use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    view! {
        <aside data-zone="left" class="left sidebar">
            {children()}
        </aside>
    }
}
