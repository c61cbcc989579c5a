use std::sync::Arc;

use async_trait::async_trait;
use my_gcloud::Policy;

use crate::error::PubSubError;
use crate::options::PubSubOptions;
use crate::structs::message::Message;
use crate::structs::push_config::PushConfig;
use crate::structs::received_message::ReceivedMessage;
use crate::structs::subscription_info::SubscriptionInfo;
use crate::structs::topic_id::TopicId;

/// Tuning options for a registered consumer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PullOption {
    MaxQueuedCallbacks(usize),
    ExecutorThreads(usize),
}

impl PullOption {
    pub fn max_queued_callbacks(count: usize) -> Self {
        PullOption::MaxQueuedCallbacks(count)
    }

    pub fn executor_threads(count: usize) -> Self {
        PullOption::ExecutorThreads(count)
    }
}

/// Caller-supplied capability invoked once per delivered message. Returning
/// an error nacks the message for redelivery.
#[async_trait]
pub trait MessageProcessor: Send + Sync {
    async fn process(&self, message: Message) -> Result<(), PubSubError>;
}

/// Handle to a long-running consumer registered with
/// [`PubSub::consume`]. Dropping the handle does not stop delivery;
/// call [`MessageConsumer::stop`].
pub trait MessageConsumer: Send + Sync {
    fn stop(&self);
    fn is_stopped(&self) -> bool;
}

/// The service client boundary. Implementations own transport, auth,
/// retries and paging; everything here is keyed by short resource names
/// resolved against [`PubSubOptions::project_id`].
#[async_trait]
pub trait PubSub: Send + Sync {
    fn options(&self) -> &PubSubOptions;

    async fn get_topic(&self, topic: &str) -> Result<Option<TopicId>, PubSubError>;

    async fn delete_topic(&self, topic: &str) -> Result<bool, PubSubError>;

    /// Publishes a message to the topic, returning the service-assigned
    /// message id.
    async fn publish(&self, topic: &str, message: &Message) -> Result<String, PubSubError>;

    /// Returns `Ok(None)` when the subscription does not exist.
    async fn get_subscription(&self, name: &str) -> Result<Option<SubscriptionInfo>, PubSubError>;

    async fn delete_subscription(&self, name: &str) -> Result<bool, PubSubError>;

    /// `None` switches the subscription back to pull-only delivery.
    async fn replace_push_config(
        &self,
        subscription: &str,
        push_config: Option<&PushConfig>,
    ) -> Result<(), PubSubError>;

    async fn pull(
        &self,
        subscription: &str,
        max_messages: u32,
    ) -> Result<Vec<ReceivedMessage>, PubSubError>;

    /// Registers a long-running consumer that feeds every delivered message
    /// to the processor. Registration itself does not block.
    fn consume(
        &self,
        subscription: &str,
        processor: Arc<dyn MessageProcessor>,
        options: &[PullOption],
    ) -> Result<Box<dyn MessageConsumer>, PubSubError>;

    async fn acknowledge(&self, subscription: &str, ack_ids: &[String])
        -> Result<(), PubSubError>;

    async fn modify_ack_deadline(
        &self,
        subscription: &str,
        ack_ids: &[String],
        deadline_seconds: u32,
    ) -> Result<(), PubSubError>;

    async fn get_subscription_policy(
        &self,
        subscription: &str,
    ) -> Result<Option<Policy>, PubSubError>;

    async fn replace_subscription_policy(
        &self,
        subscription: &str,
        policy: &Policy,
    ) -> Result<Policy, PubSubError>;

    /// Returns one boolean per requested permission, in request order.
    async fn test_subscription_permissions(
        &self,
        subscription: &str,
        permissions: &[String],
    ) -> Result<Vec<bool>, PubSubError>;
}
