//! Supports posting a single colour-coded message to a Slack channel by way
//! of an [incoming webhook][webhooks].
//!
//! See [message::Payload] for the shape of what's sent and [api::WebhookClient]
//! for how.
//!
//! [webhooks]: https://api.slack.com/messaging/webhooks

pub mod api;
pub mod channel;
pub mod color;
pub mod error;
pub mod message;

pub use error::SlackError;
