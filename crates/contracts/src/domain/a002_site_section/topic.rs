use crate::domain::a001_project::aggregate::ProjectRecord;
use crate::domain::a001_project::category::count_for_label;

use super::content::ContentBlock;

/// Topic names shown in the sidebar besides "Projects".
pub const TOPIC_NAMES: [&str; 7] = [
    "AWS",
    "AI",
    "Books",
    "Business",
    "Certification",
    "Cloud Resume Challenge",
    "Review",
];

/// Sidebar entry with the number of projects tagged with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicAction {
    /// Jump to the Projects pane with the list reset to "All".
    OpenProjects,
    ShowContent(ContentBlock),
}

impl Topic {
    pub fn action(&self) -> TopicAction {
        let is_projects = self
            .name
            .get(..7)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("project"));
        if is_projects {
            TopicAction::OpenProjects
        } else {
            TopicAction::ShowContent(ContentBlock::Topic {
                name: self.name.clone(),
                count: self.count,
            })
        }
    }
}

pub fn sidebar_topics(records: &[ProjectRecord]) -> Vec<Topic> {
    std::iter::once(Topic {
        name: "Projects".to_string(),
        count: records.len(),
    })
    .chain(TOPIC_NAMES.iter().map(|name| Topic {
        name: name.to_string(),
        count: count_for_label(records, name),
    }))
    .collect()
}

/// Body paragraph for a topic; already-escaped `name` is matched verbatim.
pub fn tag_content(name: &str) -> &'static str {
    match name {
        "AWS" => "<p>My AWS journey includes certification as a Cloud Practitioner and hands-on experience with various AWS services in both personal and professional projects.</p>",
        "AI" => "<p>Exploring artificial intelligence applications in cloud computing and DevOps automation.</p>",
        "Books" => "<p>Technical books and resources that have shaped my understanding of cloud computing and software engineering.</p>",
        "Business" => "<p>Understanding the business value of cloud technologies and how technical decisions impact organizational goals.</p>",
        "Certification" => "<p>AWS Cloud Practitioner certification and ongoing learning towards additional cloud certifications.</p>",
        "Cloud Resume Challenge" => "<p>This portfolio is my implementation of the Cloud Resume Challenge, demonstrating full-stack development with cloud infrastructure.</p>",
        "Project" => "<p>Various technical projects showcasing skills in cloud computing, DevOps, and software development.</p>",
        "Review" => "<p>Technical reviews and assessments of tools, technologies, and best practices in the field.</p>",
        _ => "<p>Content related to this topic will be added soon.</p>",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_prefix_opens_projects() {
        for name in ["Projects", "project", "PROJECT ideas"] {
            let topic = Topic {
                name: name.into(),
                count: 0,
            };
            assert_eq!(topic.action(), TopicAction::OpenProjects, "{}", name);
        }
    }

    #[test]
    fn test_other_topics_show_content() {
        let topic = Topic {
            name: "Books".into(),
            count: 2,
        };
        assert_eq!(
            topic.action(),
            TopicAction::ShowContent(ContentBlock::Topic {
                name: "Books".into(),
                count: 2
            })
        );
        // multi-byte names shorter than the prefix must not panic
        let topic = Topic {
            name: "Ré".into(),
            count: 0,
        };
        assert!(matches!(topic.action(), TopicAction::ShowContent(_)));
    }

    #[test]
    fn test_sidebar_topics_counts() {
        let records = vec![
            ProjectRecord::new("a", "#a", "", vec!["#AWS".into(), "AI".into()]),
            ProjectRecord::new("b", "#b", "", vec!["AWS".into()]),
        ];
        let topics = sidebar_topics(&records);
        assert_eq!(topics[0], Topic { name: "Projects".into(), count: 2 });
        assert_eq!(topics.len(), 1 + TOPIC_NAMES.len());
        let aws = topics.iter().find(|t| t.name == "AWS").unwrap();
        assert_eq!(aws.count, 2);
        let books = topics.iter().find(|t| t.name == "Books").unwrap();
        assert_eq!(books.count, 0);
    }
}
