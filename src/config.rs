//! Runtime configuration, all of which comes from environment variables.

use std::env;

/// Where messages are posted. There's no sensible default, so it's required.
pub const WEBHOOK_URL_VAR: &str = "SLACK_WEBHOOK_URL";

/// Who the message appears to be from.
pub const USERNAME_VAR: &str = "SLACK_USERNAME";

/// The emoji shown as the sender's avatar.
pub const ICON_EMOJI_VAR: &str = "SLACK_ICON_EMOJI";

const DEFAULT_USERNAME: &str = "slackem";
const DEFAULT_ICON_EMOJI: &str = ":rocket:";

/// The effective configuration for a single invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Empty when unset; callers must check before posting.
    pub webhook_url: String,
    pub username: String,
    pub icon_emoji: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            webhook_url: String::new(),
            username: DEFAULT_USERNAME.to_owned(),
            icon_emoji: DEFAULT_ICON_EMOJI.to_owned(),
        }
    }
}

impl Config {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary variable source. Empty values
    /// are treated the same as missing ones.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let pick = |key: &str, default: String| {
            lookup(key).filter(|v| !v.is_empty()).unwrap_or(default)
        };

        Self {
            webhook_url: pick(WEBHOOK_URL_VAR, defaults.webhook_url),
            username: pick(USERNAME_VAR, defaults.username),
            icon_emoji: pick(ICON_EMOJI_VAR, defaults.icon_emoji),
        }
    }
}
