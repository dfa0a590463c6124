use thiserror::Error;

/// Every way posting a message can go wrong. None of these are retried.
#[derive(Debug, Error)]
pub enum SlackError {
    /// We never got a response, e.g. the connection was refused or DNS failed.
    #[error("slack: failed to notify: {0}")]
    Transport(#[from] reqwest::Error),

    /// Slack answered, but not with a status we consider successful.
    #[error("slack: unexpected response: {0}")]
    UnexpectedResponse(u16),

    #[error("slack: couldn't encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}
