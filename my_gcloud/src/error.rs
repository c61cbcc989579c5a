#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GCloudError {
    #[error("Invalid identity string: {0}")]
    InvalidIdentity(String),
}
