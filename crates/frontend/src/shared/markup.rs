//! Project records scraped from the static list markup of the host page:
//!
//! ```html
//! <ul class="project-list">
//!   <li><a class="project-link" href="#resume">
//!     <span class="project-title">Cloud Resume</span>
//!     <span class="project-date">2024</span>
//!     <span class="project-tags">#AWS #Web</span>
//!   </a></li>
//! </ul>
//! ```

use contracts::domain::a001_project::aggregate::split_tags;
use contracts::domain::a001_project::ProjectRecord;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

const PROJECT_LINK_SELECTOR: &str = ".project-list li a.project-link";

pub fn read_project_markup(document: &Document) -> Vec<ProjectRecord> {
    let Ok(links) = document.query_selector_all(PROJECT_LINK_SELECTOR) else {
        return Vec::new();
    };

    (0..links.length())
        .filter_map(|i| links.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(|link| record_from_link(&link))
        .collect()
}

fn record_from_link(link: &Element) -> ProjectRecord {
    let title = child_text(link, ".project-title")
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| {
            link.text_content()
                .map(|t| t.trim().to_string())
                .unwrap_or_default()
        });
    let href = link.get_attribute("href").unwrap_or_default();
    let date = child_text(link, ".project-date").unwrap_or_default();
    let tags = split_tags(&child_text(link, ".project-tags").unwrap_or_default());

    ProjectRecord::new(title, href, date, tags)
}

fn child_text(parent: &Element, selector: &str) -> Option<String> {
    parent
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|e| e.text_content())
        .map(|t| t.trim().to_string())
}
