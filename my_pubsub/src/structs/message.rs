use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A message as published to a topic or delivered to a subscriber. The id
/// is assigned by the service at publish time and absent on messages built
/// locally.
// https://cloud.google.com/pubsub/docs/reference/rest/v1/PubsubMessage
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    payload: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<String, String>,
}

impl Message {
    pub fn of(payload: impl Into<String>) -> Self {
        Message {
            id: None,
            payload: payload.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn builder(payload: impl Into<String>) -> MessageBuilder {
        MessageBuilder {
            message: Message::of(payload),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }
}

#[derive(Debug, Clone)]
pub struct MessageBuilder {
    message: Message,
}

impl MessageBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.message.id = Some(id.into());
        self
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message.attributes.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Message {
        self.message
    }
}
