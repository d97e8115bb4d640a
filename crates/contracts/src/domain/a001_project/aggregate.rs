use serde::{Deserialize, Deserializer, Serialize};

use super::category::normalize_tag;
use super::link::LinkTarget;

// ============================================================================
// Project record
// ============================================================================

/// One entry of the project list.
///
/// Loaded either from `window.CONFIG.projects` or scraped from the static
/// list markup of the host page. Never mutated after loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub title: String,

    /// URL, relative page path or `#anchor` of an in-page section.
    #[serde(alias = "url", default = "default_href", deserialize_with = "deserialize_href")]
    pub href: String,

    /// Free-form display text ("Mar 2024", "2023 – present", ...).
    #[serde(default, deserialize_with = "deserialize_text")]
    pub date: String,

    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
}

fn default_href() -> String {
    "#".to_string()
}

impl ProjectRecord {
    pub fn new(
        title: impl Into<String>,
        href: impl Into<String>,
        date: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        let href = href.into();
        Self {
            title: title.into(),
            href: if href.is_empty() { default_href() } else { href },
            date: date.into(),
            tags: tags.into_iter().filter(|t| !t.is_empty()).collect(),
        }
    }

    /// Tags with one leading `#` removed, in declaration order.
    pub fn normalized_tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|t| normalize_tag(t))
    }

    /// Whether any normalized tag equals `label` (case-sensitive).
    pub fn has_tag(&self, label: &str) -> bool {
        self.normalized_tags().any(|t| t == label)
    }

    /// Tags joined the way the list shows them: raw, space separated.
    pub fn tags_display(&self) -> String {
        self.tags.join(" ")
    }

    pub fn link_target(&self) -> LinkTarget<'_> {
        LinkTarget::classify(&self.href)
    }

    /// Title used by the detail view when the record has none.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "Project"
        } else {
            &self.title
        }
    }
}

/// Split the whitespace separated tag text found in list markup.
pub fn split_tags(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

// ============================================================================
// Lenient deserializers
// ============================================================================

// Configuration is hand-written in the host page, so `null` and the
// "tags as one string" shorthand are accepted instead of failing the list.

#[derive(Deserialize)]
#[serde(untagged)]
enum TagsRepr {
    List(Vec<Option<String>>),
    Text(String),
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = match Option::<TagsRepr>::deserialize(deserializer)? {
        Some(TagsRepr::List(items)) => items
            .into_iter()
            .flatten()
            .filter(|t| !t.is_empty())
            .collect(),
        Some(TagsRepr::Text(text)) => split_tags(&text),
        None => Vec::new(),
    };
    Ok(tags)
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_href<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .filter(|h| !h.is_empty())
        .unwrap_or_else(default_href))
}
