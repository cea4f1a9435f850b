use thiserror::Error;
use tracing::{info, instrument};

use crate::chat::{ChatError, ChatHost};
use crate::feed::{FeedError, ScoreSource};
use crate::model::message::Reply;
use crate::reply::format_scores;
use crate::scores::{extract, filter_by_team};

pub const HELP_TEXT: &str = "Usage: `?nfl team` should output the current/final score.";

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Feed(#[from] FeedError),
    #[error(transparent)]
    Chat(#[from] ChatError),
}

/// A user's invocation of the scores command.
#[derive(Debug, Clone, Default)]
pub struct InboundMessage {
    pub channel: String,
    /// Free text after the command, read as a team code.
    pub user_text: String,
}

/// The `?nfl` command: fetch, extract, filter, format, post.
pub struct ScoreCommand<S, H> {
    source: S,
    host: H,
}

impl<S: ScoreSource, H: ChatHost> ScoreCommand<S, H> {
    pub fn new(source: S, host: H) -> Self {
        Self { source, host }
    }

    /// Answer `message` in its channel. Feed and post failures are returned to the caller
    /// without posting anything; only an empty result gets a friendly reply.
    #[instrument(level = "info", skip(self, message), fields(channel = %message.channel, user_text = %message.user_text))]
    pub fn handle(&self, message: &InboundMessage) -> Result<Reply, CommandError> {
        let feed = self.source.fetch()?;
        let records = filter_by_team(extract(&feed), &message.user_text);
        info!(matched = records.len(), "Prepared scores");

        let reply = format_scores(&records);
        match &reply {
            Reply::Text(text) => self.host.post_message(&message.channel, text)?,
            Reply::Rich(payload) => self.host.post_raw_message(&message.channel, payload)?,
        }
        Ok(reply)
    }

    pub fn help(&self) -> &'static str {
        HELP_TEXT
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}
