use crate::shared::html::escape_html;

use super::topic::tag_content;

/// Static content blocks the navigation can show in the main area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    About,
    Skills,
    Experience,
    Archive,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Archive => "Archive",
        }
    }

    pub fn html(&self) -> &'static str {
        match self {
            Section::About => include_str!("content/about.html"),
            Section::Skills => include_str!("content/skills.html"),
            Section::Experience => include_str!("content/experience.html"),
            Section::Archive => include_str!("content/archive.html"),
        }
    }

    pub fn all() -> [Section; 4] {
        [
            Section::About,
            Section::Skills,
            Section::Experience,
            Section::Archive,
        ]
    }
}

/// Whatever is currently rendered under the content header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Section(Section),
    SearchResults { term: String },
    Topic { name: String, count: usize },
}

impl Default for ContentBlock {
    fn default() -> Self {
        ContentBlock::Section(Section::default())
    }
}

impl ContentBlock {
    /// Plain-text header title. Rendered as a text node, so never escaped here.
    pub fn title(&self) -> String {
        match self {
            ContentBlock::Section(section) => section.title().to_string(),
            ContentBlock::SearchResults { .. } => "Search Results".to_string(),
            ContentBlock::Topic { name, .. } => name.clone(),
        }
    }

    /// Body fragment. User-provided parts are escaped.
    pub fn html(&self) -> String {
        match self {
            ContentBlock::Section(section) => section.html().to_string(),
            ContentBlock::SearchResults { term } => search_results_html(term),
            ContentBlock::Topic { name, count } => topic_html(name, *count),
        }
    }

    /// The About section carries its own project list under the text.
    pub fn hosts_project_hub(&self) -> bool {
        matches!(self, ContentBlock::Section(Section::About))
    }
}

/// Main content area: the block on screen and the dim-swap in progress.
///
/// Every [`ContentState::dim`] starts a new swap; a timer that fires for an
/// older swap is ignored, so only the latest request is ever rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentState {
    shown: ContentBlock,
    dimmed: bool,
    generation: u64,
}

impl ContentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> &ContentBlock {
        &self.shown
    }

    pub fn is_dimmed(&self) -> bool {
        self.dimmed
    }

    /// Dim the current block. Returns the generation to commit with.
    pub fn dim(&mut self) -> u64 {
        self.dimmed = true;
        self.generation += 1;
        self.generation
    }

    /// Show `block` and undim, unless a newer swap has started since.
    pub fn commit(&mut self, generation: u64, block: ContentBlock) -> bool {
        if generation != self.generation {
            return false;
        }
        self.shown = block;
        self.dimmed = false;
        true
    }
}

fn search_results_html(term: &str) -> String {
    format!(
        r#"<p>Search results for: "<strong>{}</strong>"</p>
<div class="content-card content-card--teal">
    <p>A full search would look through:</p>
    <ul>
        <li>Portfolio content and descriptions</li>
        <li>Skills and technologies</li>
        <li>Project details and tags</li>
        <li>Experience and background information</li>
    </ul>
</div>
<p>Search is a demo: results would come from a search index once one exists.</p>"#,
        escape_html(term)
    )
}

fn topic_html(name: &str, count: usize) -> String {
    let name = escape_html(name);
    let plural = if count == 1 { "" } else { "s" };
    format!(
        r#"<p>Viewing content filtered by <strong>{name}</strong> category ({count} item{plural}).</p>
<div class="content-card content-card--teal">
    <h3>{name} Content</h3>
    {body}
</div>"#,
        name = name,
        count = count,
        plural = plural,
        body = tag_content(&name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_section_has_content() {
        for section in Section::all() {
            assert!(!section.title().is_empty());
            assert!(section.html().contains("<p>"), "{:?}", section);
        }
    }

    #[test]
    fn test_default_is_about() {
        assert_eq!(ContentBlock::default().title(), "About");
    }

    #[test]
    fn test_search_results_escape_term() {
        let block = ContentBlock::SearchResults {
            term: "<img src=x onerror=alert(1)>".into(),
        };
        assert_eq!(block.title(), "Search Results");
        let html = block.html();
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_topic_block() {
        let html = ContentBlock::Topic {
            name: "AWS".into(),
            count: 1,
        }
        .html();
        assert!(html.contains("(1 item)"));
        assert!(html.contains("Cloud Practitioner"));

        let html = ContentBlock::Topic {
            name: "<Gardening>".into(),
            count: 3,
        }
        .html();
        assert!(html.contains("(3 items)"));
        assert!(html.contains("&lt;Gardening&gt; Content"));
        assert!(html.contains("will be added soon"));
    }

    #[test]
    fn test_only_about_hosts_project_hub() {
        assert!(ContentBlock::default().hosts_project_hub());
        assert!(!ContentBlock::Section(Section::Skills).hosts_project_hub());
        assert!(!ContentBlock::SearchResults { term: "x".into() }.hosts_project_hub());
    }

    #[test]
    fn test_content_swap_commits_latest() {
        let mut state = ContentState::new();
        assert!(!state.is_dimmed());

        let generation = state.dim();
        assert!(state.is_dimmed());
        assert!(state.commit(generation, ContentBlock::Section(Section::Skills)));
        assert_eq!(state.shown(), &ContentBlock::Section(Section::Skills));
        assert!(!state.is_dimmed());
    }

    #[test]
    fn test_overlapping_swaps_skip_the_older_block() {
        let mut state = ContentState::new();
        let first = state.dim();
        let second = state.dim();

        assert!(!state.commit(first, ContentBlock::Section(Section::Skills)));
        assert_eq!(state.shown(), &ContentBlock::default());
        assert!(state.is_dimmed());

        assert!(state.commit(second, ContentBlock::Section(Section::Archive)));
        assert_eq!(state.shown(), &ContentBlock::Section(Section::Archive));
        assert!(!state.is_dimmed());
    }
}
