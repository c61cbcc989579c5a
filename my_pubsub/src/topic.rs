use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use log::debug;

use crate::error::PubSubError;
use crate::service::PubSub;
use crate::structs::message::Message;
use crate::structs::topic_id::TopicId;

/// A topic resource bound to the service client it was obtained from.
#[derive(Clone)]
pub struct Topic {
    service: Arc<dyn PubSub>,
    id: TopicId,
}

impl Topic {
    pub fn new(service: Arc<dyn PubSub>, id: TopicId) -> Self {
        Topic { service, id }
    }

    pub fn id(&self) -> &TopicId {
        &self.id
    }

    pub fn name(&self) -> &str {
        self.id.topic()
    }

    pub fn pubsub(&self) -> &Arc<dyn PubSub> {
        &self.service
    }

    /// Fetches the current state of this topic. Returns `Ok(None)` if it
    /// no longer exists.
    pub async fn reload(&self) -> Result<Option<Topic>, PubSubError> {
        debug!("reloading topic {}", self.name());
        let id = self.service.get_topic(self.name()).await?;
        Ok(id.map(|id| Topic::new(Arc::clone(&self.service), id)))
    }

    /// Deletes this topic. Returns false if it did not exist.
    pub async fn delete(&self) -> Result<bool, PubSubError> {
        debug!("deleting topic {}", self.name());
        self.service.delete_topic(self.name()).await
    }

    /// Publishes a message to this topic, returning the service-assigned
    /// message id.
    pub async fn publish(&self, message: &Message) -> Result<String, PubSubError> {
        debug!("publishing to topic {}", self.name());
        self.service.publish(self.name(), message).await
    }
}

impl PartialEq for Topic {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Topic {}

impl Hash for Topic {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Topic").field("id", &self.id).finish()
    }
}
