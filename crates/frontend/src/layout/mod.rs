pub mod center;
pub mod footer;
pub mod global_context;
pub mod left;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Page shell.
///
/// ```text
/// +------------------------------------------+
/// |   TopHeader (nav, search, mobile menu)   |
/// +------------------------------------------+
/// |  Sidebar  |        Main content          |
/// |  (Left)   |   (Center: About/Projects)   |
/// +------------------------------------------+
/// |        Footer (visitor counter)          |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>

                <main class="main-content">
                    <center::Center>
                        {center()}
                    </center::Center>
                </main>
            </div>

            <footer::Footer />
        </div>
    }
}
