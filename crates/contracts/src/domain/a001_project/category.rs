use std::collections::HashSet;
use std::fmt;

use super::aggregate::ProjectRecord;

/// Label of the synthetic category that matches every project.
pub const ALL_LABEL: &str = "All";

/// Derived labels shown in the category bar after "All".
pub const MAX_DERIVED_CATEGORIES: usize = 12;

/// Strip exactly one leading `#`.
pub fn normalize_tag(tag: &str) -> &str {
    tag.strip_prefix('#').unwrap_or(tag)
}

/// Filter selection of a project list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    All,
    Tag(String),
}

impl Category {
    pub fn from_label(label: &str) -> Self {
        if label == ALL_LABEL {
            Category::All
        } else {
            Category::Tag(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Category::All => ALL_LABEL,
            Category::Tag(label) => label,
        }
    }

    pub fn matches(&self, record: &ProjectRecord) -> bool {
        match self {
            Category::All => true,
            Category::Tag(label) => record.has_tag(label),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category bar contents: "All" followed by at most
/// [`MAX_DERIVED_CATEGORIES`] normalized tags in order of first appearance.
///
/// A tag that normalizes to "All" is folded into the synthetic entry.
pub fn extract_categories(records: &[ProjectRecord]) -> Vec<Category> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut categories = vec![Category::All];

    for tag in records.iter().flat_map(|r| r.normalized_tags()) {
        if categories.len() > MAX_DERIVED_CATEGORIES {
            break;
        }
        if tag.is_empty() || tag == ALL_LABEL || !seen.insert(tag) {
            continue;
        }
        categories.push(Category::Tag(tag.to_string()));
    }

    categories
}

/// Records matching `category`, in their original order.
pub fn filter_by_category<'a>(
    records: &'a [ProjectRecord],
    category: &Category,
) -> Vec<&'a ProjectRecord> {
    records.iter().filter(|r| category.matches(r)).collect()
}

/// Number of records carrying each label, used by the sidebar topic list.
pub fn count_for_label(records: &[ProjectRecord], label: &str) -> usize {
    records.iter().filter(|r| r.has_tag(label)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, tags: &[&str]) -> ProjectRecord {
        ProjectRecord::new(
            title,
            format!("/{}", title),
            "",
            tags.iter().map(|t| t.to_string()).collect(),
        )
    }

    fn sample() -> Vec<ProjectRecord> {
        vec![
            record("resume", &["#AWS", "#Web"]),
            record("bot", &["AI", "Python"]),
            record("infra", &["AWS", "#Terraform"]),
            record("notes", &[]),
        ]
    }

    #[test]
    fn test_extract_categories_order_and_dedup() {
        let labels: Vec<String> = extract_categories(&sample())
            .iter()
            .map(|c| c.label().to_string())
            .collect();
        assert_eq!(labels, vec!["All", "AWS", "Web", "AI", "Python", "Terraform"]);
    }

    #[test]
    fn test_extract_categories_caps_at_thirteen() {
        let records: Vec<ProjectRecord> = (0..40)
            .map(|i| record(&format!("p{}", i), &[format!("tag{}", i).as_str()]))
            .collect();
        let categories = extract_categories(&records);
        assert_eq!(categories.len(), 1 + MAX_DERIVED_CATEGORIES);
        assert_eq!(categories[0], Category::All);
        assert_eq!(categories[1].label(), "tag0");
        assert_eq!(categories[12].label(), "tag11");
    }

    #[test]
    fn test_extract_categories_empty_input() {
        assert_eq!(extract_categories(&[]), vec![Category::All]);
    }

    #[test]
    fn test_tag_named_all_folds_into_synthetic_entry() {
        let categories = extract_categories(&[record("x", &["#All", "Rust"])]);
        assert_eq!(categories, vec![Category::All, Category::Tag("Rust".into())]);
    }

    #[test]
    fn test_only_one_hash_is_stripped() {
        assert_eq!(normalize_tag("##x"), "#x");
        assert_eq!(normalize_tag("x#"), "x#");
    }

    #[test]
    fn test_filter_all_returns_everything_in_order() {
        let records = sample();
        let filtered = filter_by_category(&records, &Category::All);
        assert_eq!(filtered.len(), records.len());
        for (a, b) in filtered.iter().zip(records.iter()) {
            assert_eq!(*a, b);
        }
    }

    #[test]
    fn test_filter_by_every_category_is_exact_subsequence() {
        let records = sample();
        for category in extract_categories(&records).into_iter().skip(1) {
            let filtered = filter_by_category(&records, &category);
            let expected: Vec<&ProjectRecord> = records
                .iter()
                .filter(|r| r.normalized_tags().any(|t| t == category.label()))
                .collect();
            assert_eq!(filtered, expected, "category {}", category);
            assert!(!filtered.is_empty());
        }

        let aws: Vec<&str> = filter_by_category(&records, &Category::from_label("AWS"))
            .into_iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(aws, vec!["resume", "infra"]);
    }

    #[test]
    fn test_filter_unknown_category_is_empty() {
        let records = sample();
        assert!(filter_by_category(&records, &Category::from_label("aws")).is_empty());
    }

    #[test]
    fn test_count_for_label() {
        assert_eq!(count_for_label(&sample(), "AWS"), 2);
        assert_eq!(count_for_label(&sample(), "Go"), 0);
    }
}
