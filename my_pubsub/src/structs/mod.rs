pub mod message;
pub mod push_config;
pub mod received_message;
pub mod subscription_info;
pub mod topic_id;
