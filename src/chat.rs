use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

use crate::model::message::RawMessage;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("failed to post to chat webhook: {0}")]
    Post(String),
}

/// Outbound reply capability provided by the chat host.
pub trait ChatHost {
    fn post_message(&self, channel: &str, text: &str) -> Result<(), ChatError>;
    fn post_raw_message(&self, channel: &str, payload: &RawMessage) -> Result<(), ChatError>;
}

/// Body sent to the webhook for a plain text message.
#[derive(Debug, Serialize)]
pub struct TextPayload<'a> {
    pub channel: &'a str,
    pub text: &'a str,
}

/// Body sent to the webhook for an attachment message.
#[derive(Debug, Serialize)]
pub struct RawPayload<'a> {
    pub channel: &'a str,
    #[serde(flatten)]
    pub message: &'a RawMessage,
}

/// Slack-compatible incoming webhook client encapsulating the hook URL.
#[derive(Debug, Clone)]
pub struct Webhook {
    hook_url: String,
}

impl Webhook {
    pub fn new(hook_url: String) -> Self {
        Self { hook_url }
    }

    fn send<T: Serialize>(&self, payload: &T) -> Result<(), ChatError> {
        match ureq::post(&self.hook_url).send_json(payload) {
            Ok(resp) => {
                info!(status = resp.status().as_u16(), "Posted message to chat webhook");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to post to chat webhook");
                Err(ChatError::Post(e.to_string()))
            }
        }
    }
}

impl ChatHost for Webhook {
    fn post_message(&self, channel: &str, text: &str) -> Result<(), ChatError> {
        self.send(&TextPayload { channel, text })
    }

    fn post_raw_message(&self, channel: &str, payload: &RawMessage) -> Result<(), ChatError> {
        self.send(&RawPayload { channel, message: payload })
    }
}
