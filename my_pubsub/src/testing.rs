//! Hand-rolled service fake shared by the resource tests. Responses are
//! programmed up front; every forwarded call is recorded for assertion.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use my_gcloud::Policy;

use crate::error::PubSubError;
use crate::options::PubSubOptions;
use crate::service::{MessageConsumer, MessageProcessor, PubSub, PullOption};
use crate::structs::message::Message;
use crate::structs::push_config::PushConfig;
use crate::structs::received_message::ReceivedMessage;
use crate::structs::subscription_info::SubscriptionInfo;
use crate::structs::topic_id::TopicId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    GetTopic(String),
    DeleteTopic(String),
    Publish(String, Message),
    GetSubscription(String),
    DeleteSubscription(String),
    ReplacePushConfig(String, Option<PushConfig>),
    Pull(String, u32),
    Consume(String, Vec<PullOption>),
    Acknowledge(String, Vec<String>),
    ModifyAckDeadline(String, Vec<String>, u32),
    GetPolicy(String),
    ReplacePolicy(String, Policy),
    TestPermissions(String, Vec<String>),
}

pub(crate) struct FakePubSub {
    options: PubSubOptions,
    subscription: Option<SubscriptionInfo>,
    topic: Option<TopicId>,
    delete_result: bool,
    messages: Vec<ReceivedMessage>,
    policy: Option<Policy>,
    permissions: Vec<bool>,
    publish_id: String,
    failure: Option<PubSubError>,
    calls: Mutex<Vec<Call>>,
    processors: Mutex<Vec<Arc<dyn MessageProcessor>>>,
}

impl FakePubSub {
    pub(crate) fn new() -> Self {
        FakePubSub {
            options: PubSubOptions::of("project"),
            subscription: None,
            topic: None,
            delete_result: false,
            messages: Vec::new(),
            policy: None,
            permissions: Vec::new(),
            publish_id: "1".to_string(),
            failure: None,
            calls: Mutex::new(Vec::new()),
            processors: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_subscription(mut self, subscription: SubscriptionInfo) -> Self {
        self.subscription = Some(subscription);
        self
    }

    pub(crate) fn with_topic(mut self, topic: TopicId) -> Self {
        self.topic = Some(topic);
        self
    }

    pub(crate) fn with_delete_result(mut self, delete_result: bool) -> Self {
        self.delete_result = delete_result;
        self
    }

    pub(crate) fn with_messages(mut self, messages: Vec<ReceivedMessage>) -> Self {
        self.messages = messages;
        self
    }

    pub(crate) fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub(crate) fn with_permissions(mut self, permissions: Vec<bool>) -> Self {
        self.permissions = permissions;
        self
    }

    pub(crate) fn with_publish_id(mut self, publish_id: impl Into<String>) -> Self {
        self.publish_id = publish_id.into();
        self
    }

    pub(crate) fn with_failure(mut self, failure: PubSubError) -> Self {
        self.failure = Some(failure);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn registered_processors(&self) -> Vec<Arc<dyn MessageProcessor>> {
        self.processors.lock().unwrap().drain(..).collect()
    }

    fn record(&self, call: Call) -> Result<(), PubSubError> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PubSub for FakePubSub {
    fn options(&self) -> &PubSubOptions {
        &self.options
    }

    async fn get_topic(&self, topic: &str) -> Result<Option<TopicId>, PubSubError> {
        self.record(Call::GetTopic(topic.to_string()))?;
        Ok(self.topic.clone())
    }

    async fn delete_topic(&self, topic: &str) -> Result<bool, PubSubError> {
        self.record(Call::DeleteTopic(topic.to_string()))?;
        Ok(self.delete_result)
    }

    async fn publish(&self, topic: &str, message: &Message) -> Result<String, PubSubError> {
        self.record(Call::Publish(topic.to_string(), message.clone()))?;
        Ok(self.publish_id.clone())
    }

    async fn get_subscription(&self, name: &str) -> Result<Option<SubscriptionInfo>, PubSubError> {
        self.record(Call::GetSubscription(name.to_string()))?;
        Ok(self.subscription.clone())
    }

    async fn delete_subscription(&self, name: &str) -> Result<bool, PubSubError> {
        self.record(Call::DeleteSubscription(name.to_string()))?;
        Ok(self.delete_result)
    }

    async fn replace_push_config(
        &self,
        subscription: &str,
        push_config: Option<&PushConfig>,
    ) -> Result<(), PubSubError> {
        self.record(Call::ReplacePushConfig(
            subscription.to_string(),
            push_config.cloned(),
        ))
    }

    async fn pull(
        &self,
        subscription: &str,
        max_messages: u32,
    ) -> Result<Vec<ReceivedMessage>, PubSubError> {
        self.record(Call::Pull(subscription.to_string(), max_messages))?;
        Ok(self.messages.clone())
    }

    fn consume(
        &self,
        subscription: &str,
        processor: Arc<dyn MessageProcessor>,
        options: &[PullOption],
    ) -> Result<Box<dyn MessageConsumer>, PubSubError> {
        self.record(Call::Consume(subscription.to_string(), options.to_vec()))?;
        self.processors.lock().unwrap().push(processor);
        Ok(Box::new(FakeConsumer::default()))
    }

    async fn acknowledge(
        &self,
        subscription: &str,
        ack_ids: &[String],
    ) -> Result<(), PubSubError> {
        self.record(Call::Acknowledge(subscription.to_string(), ack_ids.to_vec()))
    }

    async fn modify_ack_deadline(
        &self,
        subscription: &str,
        ack_ids: &[String],
        deadline_seconds: u32,
    ) -> Result<(), PubSubError> {
        self.record(Call::ModifyAckDeadline(
            subscription.to_string(),
            ack_ids.to_vec(),
            deadline_seconds,
        ))
    }

    async fn get_subscription_policy(
        &self,
        subscription: &str,
    ) -> Result<Option<Policy>, PubSubError> {
        self.record(Call::GetPolicy(subscription.to_string()))?;
        Ok(self.policy.clone())
    }

    async fn replace_subscription_policy(
        &self,
        subscription: &str,
        policy: &Policy,
    ) -> Result<Policy, PubSubError> {
        self.record(Call::ReplacePolicy(subscription.to_string(), policy.clone()))?;
        Ok(policy.clone())
    }

    async fn test_subscription_permissions(
        &self,
        subscription: &str,
        permissions: &[String],
    ) -> Result<Vec<bool>, PubSubError> {
        self.record(Call::TestPermissions(
            subscription.to_string(),
            permissions.to_vec(),
        ))?;
        Ok(self.permissions.clone())
    }
}

#[derive(Default)]
pub(crate) struct FakeConsumer {
    stopped: AtomicBool,
}

impl MessageConsumer for FakeConsumer {
    fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
pub(crate) struct CountingProcessor {
    seen: Mutex<Vec<String>>,
}

impl CountingProcessor {
    pub(crate) fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageProcessor for CountingProcessor {
    async fn process(&self, message: Message) -> Result<(), PubSubError> {
        self.seen.lock().unwrap().push(message.payload().to_string());
        Ok(())
    }
}
