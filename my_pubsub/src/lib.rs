pub mod error;
pub mod options;
pub mod service;
pub mod structs;
pub mod subscription;
pub mod topic;

#[cfg(test)]
pub(crate) mod testing;

pub use error::PubSubError;
pub use my_gcloud::{Identity, Policy, Role};
pub use options::PubSubOptions;
pub use service::{MessageConsumer, MessageProcessor, PubSub, PullOption};
pub use structs::message::Message;
pub use structs::push_config::PushConfig;
pub use structs::received_message::ReceivedMessage;
pub use structs::subscription_info::SubscriptionInfo;
pub use structs::topic_id::TopicId;
pub use subscription::Subscription;
pub use topic::Topic;
