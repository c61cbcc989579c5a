use std::fmt;

use serde::{Deserialize, Serialize};

/// Fully-qualified identifier of a topic: the owning project plus the
/// short topic name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicId {
    project: String,
    topic: String,
}

impl TopicId {
    pub fn of(project: impl Into<String>, topic: impl Into<String>) -> Self {
        TopicId {
            project: project.into(),
            topic: topic.into(),
        }
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn full_name(&self) -> String {
        format!("projects/{}/topics/{}", self.project, self.topic)
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "projects/{}/topics/{}", self.project, self.topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn of_and_accessors() {
        let id = TopicId::of("project", "topic");
        assert_eq!(id.project(), "project");
        assert_eq!(id.topic(), "topic");
        assert_eq!(id, TopicId::of("project", "topic"));
    }

    #[test]
    fn renders_resource_name() {
        let id = TopicId::of("project", "topic");
        assert_eq!(id.full_name(), "projects/project/topics/topic");
        assert_eq!(id.to_string(), id.full_name());
    }
}
