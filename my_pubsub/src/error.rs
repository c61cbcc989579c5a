#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PubSubError {
    #[error("Service error (code {code}): {message}")]
    Service { code: u16, message: String },
    #[error("Method not implemented: {0}")]
    Unimplemented(&'static str),
    #[error("Message consumer is already stopped")]
    ConsumerStopped,
}

impl PubSubError {
    pub fn service(code: u16, message: impl Into<String>) -> Self {
        PubSubError::Service {
            code,
            message: message.into(),
        }
    }
}
