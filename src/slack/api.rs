//! Delivery of payloads to an incoming webhook.

use super::{channel::ChannelName, message::Payload, SlackError};
use crate::config::Config;
use reqwest::header::CONTENT_TYPE;
use tracing::{info, warn};

/// Anything below this is a success, so 201 is already a failure.
const FIRST_FAILURE_STATUS: u16 = 201;

/// What came back from a POST, read in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// The ability to POST a JSON body somewhere and read the response.
pub trait Transport {
    async fn post_json(&self, url: &str, body: Vec<u8>) -> Result<RawResponse, reqwest::Error>;
}

/// The real thing, backed by [reqwest::Client]. No timeout is set beyond
/// whatever reqwest does by default.
#[derive(Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: Vec<u8>) -> Result<RawResponse, reqwest::Error> {
        let res = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = res.status().as_u16();
        let body = res.text().await?;

        Ok(RawResponse { status, body })
    }
}

/// Posts messages to the webhook in `config`, one attempt apiece.
pub struct WebhookClient<'a, T> {
    transport: T,
    config: &'a Config,
}

impl<'a, T: Transport> WebhookClient<'a, T> {
    pub fn new(transport: T, config: &'a Config) -> Self {
        WebhookClient { transport, config }
    }

    /// Post a message to a channel with the given sidebar colour.
    pub async fn post_message(
        &self,
        channel: &ChannelName,
        message: &str,
        color: &str,
    ) -> Result<(), SlackError> {
        let payload = Payload::new(self.config, channel, message, color);
        self.post_payload(&payload).await
    }

    /// Send an already-built payload. Failures are logged here as well as
    /// returned, as the response body is only available at this point.
    pub async fn post_payload(&self, payload: &Payload<'_>) -> Result<(), SlackError> {
        let body = serde_json::to_vec(payload)?;

        let res = match self.transport.post_json(&self.config.webhook_url, body).await {
            Ok(res) => res,
            Err(e) => {
                warn!("[slack] failed to notify: {}", e);
                return Err(e.into());
            }
        };

        if res.status >= FIRST_FAILURE_STATUS {
            warn!("[slack] unexpected response: {}", res.status);
            warn!("[slack] response: {}", res.body);
            return Err(SlackError::UnexpectedResponse(res.status));
        }

        info!("[slack] posted to {}", payload.channel());
        Ok(())
    }
}
