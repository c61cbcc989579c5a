use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Push delivery configuration: the HTTPS endpoint the service calls back
/// with each message, plus endpoint-specific attributes.
// https://cloud.google.com/pubsub/docs/reference/rest/v1/projects.subscriptions#PushConfig
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushConfig {
    push_endpoint: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<String, String>,
}

impl PushConfig {
    pub fn of(endpoint: impl Into<String>) -> Self {
        PushConfig {
            push_endpoint: endpoint.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn builder(endpoint: impl Into<String>) -> PushConfigBuilder {
        PushConfigBuilder {
            config: PushConfig::of(endpoint),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.push_endpoint
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }
}

#[derive(Debug, Clone)]
pub struct PushConfigBuilder {
    config: PushConfig,
}

impl PushConfigBuilder {
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.attributes.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> PushConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn of_sets_endpoint() {
        let config = PushConfig::of("https://example.com/push");
        assert_eq!(config.endpoint(), "https://example.com/push");
        assert!(config.attributes().is_empty());
    }

    #[test]
    fn builder_collects_attributes() {
        let config = PushConfig::builder("https://example.com/push")
            .attribute("x-goog-version", "v1")
            .build();
        assert_eq!(config.attributes()["x-goog-version"], "v1");
        assert_eq!(config, config.clone());
    }
}
