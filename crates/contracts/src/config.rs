//! Site configuration injected by the host page as `window.CONFIG`.
//!
//! ```js
//! window.CONFIG = {
//!   API_URL: "https://example.execute-api.us-east-1.amazonaws.com/count",
//!   projects: [{ title: "Resume", href: "#resume", date: "2024", tags: ["#AWS"] }]
//! };
//! ```
//!
//! Both keys are optional and malformed values are ignored field by field,
//! so a typo in the page never takes the site down.

use serde_json::Value;

use crate::domain::a001_project::aggregate::ProjectRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
    /// Visitor counter endpoint; `None` disables the counter.
    pub api_url: Option<String>,
    /// Injected project list; `None` falls back to the page markup.
    pub projects: Option<Vec<ProjectRecord>>,
}

impl SiteConfig {
    /// Build from the two keys read separately; anything unusable is
    /// treated as absent without affecting the other key.
    pub fn from_fields(api_url: Option<&Value>, projects: Option<&Value>) -> Self {
        let api_url = api_url
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        let projects = projects
            .filter(|p| p.is_array())
            .and_then(|p| serde_json::from_value::<Vec<ProjectRecord>>(p.clone()).ok())
            .filter(|p| !p.is_empty());

        Self { api_url, projects }
    }

    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    /// Configured projects when present, otherwise the markup-derived list.
    pub fn resolve_projects(&self, from_markup: Vec<ProjectRecord>) -> Vec<ProjectRecord> {
        match &self.projects {
            Some(projects) => projects.clone(),
            None => from_markup,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_config() {
        let config = SiteConfig::from_fields(
            Some(&json!(" https://api.example.com/count ")),
            Some(&json!([{"title": "A", "href": "#a", "tags": "x y"}])),
        );
        assert_eq!(config.api_url(), Some("https://api.example.com/count"));
        let projects = config.projects.as_ref().unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].tags, vec!["x", "y"]);
    }

    #[test]
    fn test_missing_and_blank_values() {
        let config = SiteConfig::from_fields(Some(&json!("   ")), None);
        assert_eq!(config, SiteConfig::default());
        assert_eq!(SiteConfig::from_fields(None, None), SiteConfig::default());
        assert_eq!(
            SiteConfig::from_fields(Some(&Value::Null), Some(&Value::Null)),
            SiteConfig::default()
        );
    }

    #[test]
    fn test_malformed_projects_are_ignored() {
        let config = SiteConfig::from_fields(Some(&json!("https://x")), Some(&json!("nope")));
        assert_eq!(config.api_url(), Some("https://x"));
        assert_eq!(config.projects, None);

        let config = SiteConfig::from_fields(None, Some(&json!([{"title": 5}])));
        assert_eq!(config.projects, None);

        let config = SiteConfig::from_fields(None, Some(&json!([])));
        assert_eq!(config.projects, None);
    }

    #[test]
    fn test_bad_api_url_keeps_projects() {
        let config = SiteConfig::from_fields(
            Some(&json!({"not": "a url"})),
            Some(&json!([{"title": "Kept", "href": "#kept"}])),
        );
        assert_eq!(config.api_url(), None);
        assert_eq!(config.projects.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_resolve_projects_prefers_config() {
        let markup = vec![ProjectRecord::new("markup", "#m", "", vec![])];

        let config = SiteConfig::default();
        assert_eq!(config.resolve_projects(markup.clone()), markup);

        let config = SiteConfig {
            api_url: None,
            projects: Some(vec![ProjectRecord::new("cfg", "#c", "", vec![])]),
        };
        assert_eq!(config.resolve_projects(markup)[0].title, "cfg");
    }
}
