//! CardAnimated: Thaw `Card` that plays the `card-appear` animation from
//! `style.css` when it is inserted.
//!
//! ```rust,ignore
//! <CardAnimated class="project-detail-card">
//!     <p>"Content"</p>
//! </CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Extra classes on the card element.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Card class=class attr:style="animation: card-appear 0.28s ease-out both;">
            {children()}
        </Card>
    }
}
