/// How a project link is handled when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// `#id` of a section already present in the page (id without `#`).
    Anchor(&'a str),
    /// Site-relative path with no page behind it yet.
    Relative(&'a str),
    /// `http://` or `https://` URL, opened by the browser in a new context.
    External(&'a str),
}

impl<'a> LinkTarget<'a> {
    pub fn classify(href: &'a str) -> Self {
        if let Some(id) = href.strip_prefix('#') {
            LinkTarget::Anchor(id)
        } else if is_absolute_url(href) {
            LinkTarget::External(href)
        } else {
            LinkTarget::Relative(href)
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, LinkTarget::External(_))
    }
}

/// Matches `^https?://`, case-sensitive like the list markup expects.
pub fn is_absolute_url(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}
