//! The JSON body an incoming webhook expects.
//!
//! ```json
//! {
//!     "channel": "#growth",
//!     "username": "slackem",
//!     "icon_emoji": ":rocket:",
//!     "attachments": [{
//!         "fallback": "hi there team!",
//!         "text": "hi there team!",
//!         "color": "#CCCCCC",
//!         "mrkdwn_in": ["text"]
//!     }]
//! }
//! ```

use super::{channel::ChannelName, color::Color};
use crate::config::Config;
use serde::Serialize;
use serde_with::{serde_as, NoneAsEmptyString};

/// <https://api.slack.com/messaging/webhooks#advanced_message_formatting>
#[derive(Debug, Serialize)]
pub struct Payload<'a> {
    channel: &'a ChannelName,
    username: &'a str,
    icon_emoji: &'a str,
    // We only ever send the one message.
    attachments: [Attachment<'a>; 1],
}

/// A legacy attachment, which is the only way to get a coloured sidebar.
///
/// <https://api.slack.com/reference/messaging/attachments>
#[serde_as]
#[derive(Debug, Serialize)]
pub struct Attachment<'a> {
    fallback: &'a str,
    text: &'a str,
    /// Serialized as an empty string when absent, which Slack renders as no
    /// colour at all.
    #[serde_as(as = "NoneAsEmptyString")]
    color: Option<Color>,
    mrkdwn_in: [&'static str; 1],
}

impl<'a> Payload<'a> {
    /// Build a payload. An unrecognised colour name isn't an error, the
    /// message just goes out uncoloured.
    pub fn new(
        config: &'a Config,
        channel: &'a ChannelName,
        message: &'a str,
        color: &str,
    ) -> Self {
        Payload {
            channel,
            username: &config.username,
            icon_emoji: &config.icon_emoji,
            attachments: [Attachment::new(message, color)],
        }
    }

    pub fn channel(&self) -> &ChannelName {
        self.channel
    }
}

impl<'a> Attachment<'a> {
    fn new(message: &'a str, color: &str) -> Self {
        Attachment {
            fallback: message,
            text: message,
            color: Color::from_name(color),
            mrkdwn_in: ["text"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;
    use serde_json::{json, Value};

    fn to_value(payload: &Payload) -> Value {
        serde_json::to_value(payload).unwrap()
    }

    #[test]
    fn test_full_payload() {
        let cfg = Config::default();
        let channel = ChannelName::from_arg("growth");
        let payload = Payload::new(&cfg, &channel, "hi there team!", "grey");

        assert_eq!(
            to_value(&payload),
            json!({
                "channel": "#growth",
                "username": "slackem",
                "icon_emoji": ":rocket:",
                "attachments": [{
                    "fallback": "hi there team!",
                    "text": "hi there team!",
                    "color": "#CCCCCC",
                    "mrkdwn_in": ["text"]
                }]
            })
        );
    }

    #[test]
    fn test_uses_configured_sender() {
        let cfg = Config {
            webhook_url: "http://example.com".into(),
            username: "beefarmer".into(),
            icon_emoji: ":bumblebee:".into(),
        };
        let channel = ChannelName::from_arg("hive");
        let v = to_value(&Payload::new(&cfg, &channel, "buzz", "green"));

        assert_eq!(v["username"], "beefarmer");
        assert_eq!(v["icon_emoji"], ":bumblebee:");
        assert_eq!(v["attachments"][0]["color"], "#7CD197");
    }

    #[test]
    fn test_unknown_color_is_empty() {
        let cfg = Config::default();
        let channel = ChannelName::from_arg("growth");
        let v = to_value(&Payload::new(&cfg, &channel, "hi", "mauve"));

        assert_eq!(v["attachments"][0]["color"], "");
    }

    #[test]
    fn test_exactly_one_attachment() {
        let cfg = Config::default();
        let channel = ChannelName::from_arg("growth");
        let v = to_value(&Payload::new(&cfg, &channel, "hi", "red"));

        assert_eq!(v["attachments"].as_array().map(Vec::len), Some(1));
    }

    quickcheck! {
        fn test_fallback_matches_text(msg: String, color: String) -> bool {
            let cfg = Config::default();
            let channel = ChannelName::from_arg("growth");
            let v = to_value(&Payload::new(&cfg, &channel, &msg, &color));
            let attachment = &v["attachments"][0];

            attachment["fallback"] == msg.as_str() && attachment["text"] == msg.as_str()
        }

        fn test_color_is_hex_or_empty(color: String) -> bool {
            let cfg = Config::default();
            let channel = ChannelName::from_arg("growth");
            let v = to_value(&Payload::new(&cfg, &channel, "hi", &color));
            let expected = Color::from_name(&color).map(Color::hex).unwrap_or("");

            v["attachments"][0]["color"] == expected
        }
    }
}
