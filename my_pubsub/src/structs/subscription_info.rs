use serde::{Deserialize, Serialize};

use crate::structs::push_config::PushConfig;
use crate::structs::topic_id::TopicId;

/// The plain state of a subscription: the topic it consumes, its short
/// name, how messages are delivered and the ack deadline. This is the part
/// of [`crate::Subscription`] that equality, hashing and serialization see.
// https://cloud.google.com/pubsub/docs/reference/rest/v1/projects.subscriptions#Subscription
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionInfo {
    topic: TopicId,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    push_config: Option<PushConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ack_deadline_seconds: Option<u32>,
}

impl SubscriptionInfo {
    pub fn of(topic: TopicId, name: impl Into<String>) -> Self {
        SubscriptionInfo::builder(topic, name).build()
    }

    pub fn builder(topic: TopicId, name: impl Into<String>) -> SubscriptionInfoBuilder {
        SubscriptionInfoBuilder {
            info: SubscriptionInfo {
                topic,
                name: name.into(),
                push_config: None,
                ack_deadline_seconds: None,
            },
        }
    }

    pub fn to_builder(&self) -> SubscriptionInfoBuilder {
        SubscriptionInfoBuilder { info: self.clone() }
    }

    pub fn topic(&self) -> &TopicId {
        &self.topic
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn push_config(&self) -> Option<&PushConfig> {
        self.push_config.as_ref()
    }

    pub fn ack_deadline_seconds(&self) -> Option<u32> {
        self.ack_deadline_seconds
    }
}

#[derive(Debug, Clone)]
pub struct SubscriptionInfoBuilder {
    info: SubscriptionInfo,
}

impl SubscriptionInfoBuilder {
    pub fn topic(mut self, topic: TopicId) -> Self {
        self.info.topic = topic;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.info.name = name.into();
        self
    }

    pub fn push_config(mut self, push_config: impl Into<Option<PushConfig>>) -> Self {
        self.info.push_config = push_config.into();
        self
    }

    pub fn ack_deadline_seconds(mut self, ack_deadline_seconds: impl Into<Option<u32>>) -> Self {
        self.info.ack_deadline_seconds = ack_deadline_seconds.into();
        self
    }

    pub fn build(self) -> SubscriptionInfo {
        self.info
    }
}
