use crate::shared::html::escape_html;

use super::aggregate::ProjectRecord;
use super::link::LinkTarget;

/// Inline detail area under a project list. At most one is shown per list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailView {
    #[default]
    Hidden,
    /// Deep copy of the in-page section with this id.
    Section { anchor_id: String },
    /// Synthesized summary for a project without its own page.
    Placeholder(PlaceholderDetail),
}

impl DetailView {
    /// Detail to open for `record`, or `None` when the browser should follow
    /// the link itself.
    pub fn for_record(record: &ProjectRecord) -> Option<Self> {
        match record.link_target() {
            LinkTarget::Anchor(id) => Some(DetailView::Section {
                anchor_id: id.to_string(),
            }),
            LinkTarget::Relative(_) => Some(DetailView::Placeholder(
                PlaceholderDetail::from_record(record),
            )),
            LinkTarget::External(_) => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, DetailView::Hidden)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderDetail {
    pub title: String,
    pub date: String,
    pub tags: String,
    pub href: String,
}

impl PlaceholderDetail {
    pub fn from_record(record: &ProjectRecord) -> Self {
        Self {
            title: record.display_title().to_string(),
            date: record.date.clone(),
            tags: record.tags_display(),
            href: record.href.clone(),
        }
    }

    /// HTML fragment for the detail container. Every field is escaped.
    pub fn to_html(&self) -> String {
        let mut html = format!("<h1>{}</h1>", escape_html(&self.title));
        if !self.date.is_empty() {
            html.push_str(&format!(
                r#"<p class="project-detail__date">{}</p>"#,
                escape_html(&self.date)
            ));
        }
        if !self.tags.is_empty() {
            html.push_str(&format!(
                r#"<p class="project-tags">{}</p>"#,
                escape_html(&self.tags)
            ));
        }
        html.push_str(&format!(
            "<p>Details coming soon. If this project has its own page, it would open at: <code>{}</code>.</p>",
            escape_html(&self.href)
        ));
        html
    }
}
