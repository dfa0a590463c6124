//! Slack channel names as they're sent in a webhook payload.

use serde::Serialize;
use std::fmt;

/// A channel name including its leading hash, which is how incoming webhooks
/// expect to be told where to post.
///
/// ```
/// let x = ChannelName::from_arg("growth");
/// assert_eq!(x.to_string(), "#growth");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ChannelName(String);

impl ChannelName {
    /// Build a channel name from what a user typed, prepending the hash.
    /// Users are expected to leave it off, but if they've supplied one we
    /// won't add another.
    pub fn from_arg(arg: &str) -> Self {
        let bare = arg.strip_prefix('#').unwrap_or(arg);
        ChannelName(format!("#{}", bare))
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
