use serde::{Deserialize, Serialize};

use crate::structs::message::Message;

/// A pulled message paired with the acknowledgment id the service expects
/// back before the ack deadline elapses.
// https://cloud.google.com/pubsub/docs/reference/rest/v1/projects.subscriptions/pull
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivedMessage {
    ack_id: String,
    message: Message,
}

impl ReceivedMessage {
    pub fn new(ack_id: impl Into<String>, message: Message) -> Self {
        ReceivedMessage {
            ack_id: ack_id.into(),
            message,
        }
    }

    pub fn ack_id(&self) -> &str {
        &self.ack_id
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn into_message(self) -> Message {
        self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_payload_with_ack_id() {
        let received = ReceivedMessage::new("ackId1", Message::of("payload1"));
        assert_eq!(received.ack_id(), "ackId1");
        assert_eq!(received.message().payload(), "payload1");
        assert_eq!(received.into_message(), Message::of("payload1"));
    }
}
