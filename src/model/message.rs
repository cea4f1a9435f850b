use serde::Serialize;

/// What the bot sends back for a scores request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Rich(RawMessage),
}

/// Slack-compatible attachment message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RawMessage {
    pub icon_emoji: String,
    pub username: String,
    pub attachments: Vec<Attachment>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Attachment {
    pub color: String,
    pub title: String,
    pub fields: Vec<Field>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Field {
    pub value: String,
    /// Two-column layout hint.
    pub short: bool,
}
