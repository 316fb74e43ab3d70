use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SocialError {
    #[error("message is empty")]
    EmptyContent,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("no pending friend request from {0}")]
    NoRequest(String),
}
