use std::time::Duration;

use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use crate::chat::{ChatHost, Webhook};
use crate::command::{CommandError, InboundMessage, ScoreCommand};
use crate::feed::{FeedClient, FeedConfig, ScoreSource};
use crate::model::message::Reply;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Test,
    Production,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    #[default]
    Scores,
    Help,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub mode: Mode,
    pub hook_url: String,
    pub test_hook_url: String,
    pub channel: String,
    #[serde(default)]
    pub user_text: String,
    #[serde(default)]
    pub action: Action,
    #[serde(default)]
    pub feed_timeout_secs: Option<u64>,
    #[serde(default)]
    pub feed_retries: u32,
}

impl Request {
    /// Webhook URL selected by `mode`.
    pub fn destination(&self) -> &str {
        match self.mode {
            Mode::Test => &self.test_hook_url,
            Mode::Production => &self.hook_url,
        }
    }

    pub fn feed_config(&self) -> FeedConfig {
        FeedConfig {
            timeout: self.feed_timeout_secs.map(Duration::from_secs),
            retries: self.feed_retries,
            ..FeedConfig::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

/// Carry out `action` for `message`, returning a one-line summary of what was posted.
pub fn run_action<S: ScoreSource, H: ChatHost>(
    action: Action,
    command: &ScoreCommand<S, H>,
    message: &InboundMessage,
) -> Result<String, CommandError> {
    match action {
        Action::Help => {
            command.host().post_message(&message.channel, command.help())?;
            Ok("Help posted".to_string())
        }
        Action::Scores => match command.handle(message)? {
            Reply::Text(text) => Ok(format!("No scores matched: {}", text)),
            Reply::Rich(raw) => {
                let games = raw.attachments.iter().map(|a| a.fields.len()).sum::<usize>();
                Ok(format!("Posted {} score(s)", games))
            }
        },
    }
}

#[instrument(skip(event))]
pub async fn handler(event: LambdaEvent<Request>) -> Result<Response, Error> {
    let payload = event.payload;
    let webhook = Webhook::new(payload.destination().to_string());
    let command = ScoreCommand::new(FeedClient::new(payload.feed_config()), webhook);
    let message = InboundMessage { channel: payload.channel, user_text: payload.user_text };

    // ureq blocks, so run the whole command on the blocking pool
    let action = payload.action;
    let summary = tokio::task::spawn_blocking(move || run_action(action, &command, &message)).await?;

    match summary {
        Ok(message) => {
            info!(message = %message, "Command finished");
            Ok(Response { message })
        }
        Err(e) => {
            error!(error = %e, "Command failed");
            Err(e.into())
        }
    }
}
