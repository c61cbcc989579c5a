use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use log::debug;
use my_gcloud::Policy;

use crate::error::PubSubError;
use crate::service::{MessageConsumer, MessageProcessor, PubSub, PullOption};
use crate::structs::push_config::PushConfig;
use crate::structs::received_message::ReceivedMessage;
use crate::structs::subscription_info::{SubscriptionInfo, SubscriptionInfoBuilder};
use crate::structs::topic_id::TopicId;

/// A subscription resource bound to the service client it was obtained
/// from. The state lives in an immutable [`SubscriptionInfo`]; every method
/// forwards to the client keyed by the subscription name.
#[derive(Clone)]
pub struct Subscription {
    service: Arc<dyn PubSub>,
    info: SubscriptionInfo,
}

impl Subscription {
    pub fn new(service: Arc<dyn PubSub>, info: SubscriptionInfo) -> Self {
        Subscription { service, info }
    }

    pub fn info(&self) -> &SubscriptionInfo {
        &self.info
    }

    pub fn pubsub(&self) -> &Arc<dyn PubSub> {
        &self.service
    }

    pub fn topic(&self) -> &TopicId {
        self.info.topic()
    }

    pub fn name(&self) -> &str {
        self.info.name()
    }

    pub fn push_config(&self) -> Option<&PushConfig> {
        self.info.push_config()
    }

    pub fn ack_deadline_seconds(&self) -> Option<u32> {
        self.info.ack_deadline_seconds()
    }

    /// Starts an edited copy of this subscription's state; `build()` binds
    /// the result to the same service client.
    pub fn to_builder(&self) -> SubscriptionBuilder {
        SubscriptionBuilder {
            service: Arc::clone(&self.service),
            info: self.info.to_builder(),
        }
    }

    /// Fetches the current state of this subscription. Returns `Ok(None)`
    /// if it no longer exists.
    pub async fn reload(&self) -> Result<Option<Subscription>, PubSubError> {
        debug!("reloading subscription {}", self.name());
        let info = self.service.get_subscription(self.name()).await?;
        Ok(info.map(|info| Subscription::new(Arc::clone(&self.service), info)))
    }

    /// Deletes this subscription. Returns false if it did not exist.
    pub async fn delete(&self) -> Result<bool, PubSubError> {
        debug!("deleting subscription {}", self.name());
        self.service.delete_subscription(self.name()).await
    }

    pub async fn pull(&self, max_messages: u32) -> Result<Vec<ReceivedMessage>, PubSubError> {
        debug!(
            "pulling up to {} messages from subscription {}",
            max_messages,
            self.name()
        );
        self.service.pull(self.name(), max_messages).await
    }

    /// Registers a long-running consumer on this subscription; the returned
    /// handle stops it.
    pub fn consume(
        &self,
        processor: Arc<dyn MessageProcessor>,
        options: &[PullOption],
    ) -> Result<Box<dyn MessageConsumer>, PubSubError> {
        debug!("registering consumer on subscription {}", self.name());
        self.service.consume(self.name(), processor, options)
    }

    /// Replaces the push delivery endpoint; `None` reverts the
    /// subscription to pull-only delivery.
    pub async fn replace_push_config(
        &self,
        push_config: Option<PushConfig>,
    ) -> Result<(), PubSubError> {
        debug!("replacing push config of subscription {}", self.name());
        self.service
            .replace_push_config(self.name(), push_config.as_ref())
            .await
    }

    pub async fn ack(&self, ack_ids: &[String]) -> Result<(), PubSubError> {
        debug!(
            "acking {} messages on subscription {}",
            ack_ids.len(),
            self.name()
        );
        self.service.acknowledge(self.name(), ack_ids).await
    }

    pub async fn modify_ack_deadline(
        &self,
        ack_ids: &[String],
        deadline_seconds: u32,
    ) -> Result<(), PubSubError> {
        debug!(
            "modifying ack deadline of {} messages on subscription {} to {}s",
            ack_ids.len(),
            self.name(),
            deadline_seconds
        );
        self.service
            .modify_ack_deadline(self.name(), ack_ids, deadline_seconds)
            .await
    }

    /// Returns `Ok(None)` when no policy is set on the subscription.
    pub async fn get_policy(&self) -> Result<Option<Policy>, PubSubError> {
        self.service.get_subscription_policy(self.name()).await
    }

    /// Replaces the access-control policy, returning the policy the service
    /// stored (with its new etag).
    pub async fn replace_policy(&self, policy: &Policy) -> Result<Policy, PubSubError> {
        self.service
            .replace_subscription_policy(self.name(), policy)
            .await
    }

    /// Returns one boolean per requested permission, in request order.
    pub async fn test_permissions(
        &self,
        permissions: &[String],
    ) -> Result<Vec<bool>, PubSubError> {
        self.service
            .test_subscription_permissions(self.name(), permissions)
            .await
    }
}

// The service handle is a capability, not state: equality, hashing and the
// debug rendering see only the subscription info.
impl PartialEq for Subscription {
    fn eq(&self, other: &Self) -> bool {
        self.info == other.info
    }
}

impl Eq for Subscription {}

impl Hash for Subscription {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.info.hash(state);
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("info", &self.info)
            .finish()
    }
}

/// Edits a copy of a subscription's state while keeping it bound to the
/// same service client.
pub struct SubscriptionBuilder {
    service: Arc<dyn PubSub>,
    info: SubscriptionInfoBuilder,
}

impl SubscriptionBuilder {
    pub fn topic(mut self, topic: TopicId) -> Self {
        self.info = self.info.topic(topic);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.info = self.info.name(name);
        self
    }

    pub fn push_config(mut self, push_config: impl Into<Option<PushConfig>>) -> Self {
        self.info = self.info.push_config(push_config);
        self
    }

    pub fn ack_deadline_seconds(mut self, ack_deadline_seconds: impl Into<Option<u32>>) -> Self {
        self.info = self.info.ack_deadline_seconds(ack_deadline_seconds);
        self
    }

    pub fn build(self) -> Subscription {
        Subscription {
            service: self.service,
            info: self.info.build(),
        }
    }
}
