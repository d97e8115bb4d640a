use super::api;
use contracts::usecases::u501_visitor_count::VisitorCountDisplay;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Footer visitor count.
///
/// Without an endpoint the placeholder is rendered right away and nothing is
/// fetched. Failures keep the placeholder and explain themselves in the
/// tooltip.
#[component]
pub fn VisitorCounter(
    /// Endpoint from `window.CONFIG.API_URL`.
    api_url: Option<String>,
) -> impl IntoView {
    let display = RwSignal::new(match api_url {
        Some(_) => VisitorCountDisplay::Loading,
        None => VisitorCountDisplay::inactive(),
    });

    if let Some(url) = api_url {
        spawn_local(async move {
            let result = api::fetch_visitor_count(&url).await;
            match &result {
                Ok(count) => log::debug!("visitor count: {}", count),
                Err(e) => log::warn!("visitor counter unavailable: {}", e),
            }
            display.set(VisitorCountDisplay::from_result(result));
        });
    }

    view! {
        <span
            id="visitor-count"
            class="visitor-count"
            title=move || display.with(|d| d.tooltip().map(str::to_string))
            data-loaded=move || display.with(|d| d.is_loaded().then_some("true"))
        >
            {move || display.with(|d| d.text().to_string())}
        </span>
    }
}
