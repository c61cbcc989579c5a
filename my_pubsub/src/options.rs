use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://pubsub.googleapis.com";

/// Connection-level settings a service client is configured with. Resource
/// wrappers reach these through [`crate::PubSub::options`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PubSubOptions {
    project_id: String,
    endpoint: String,
}

impl PubSubOptions {
    pub fn of(project_id: impl Into<String>) -> Self {
        PubSubOptions::builder(project_id).build()
    }

    pub fn builder(project_id: impl Into<String>) -> PubSubOptionsBuilder {
        PubSubOptionsBuilder {
            project_id: project_id.into(),
            endpoint: None,
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Debug, Clone)]
pub struct PubSubOptionsBuilder {
    project_id: String,
    endpoint: Option<String>,
}

impl PubSubOptionsBuilder {
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn build(self) -> PubSubOptions {
        PubSubOptions {
            project_id: self.project_id,
            endpoint: self.endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        }
    }
}
