use crate::model::message::{Attachment, Field, RawMessage, Reply};
use crate::model::score::ScoreRecord;

pub const EMPTY_REPLY: &str = "I couldn't find anything!";
pub const ICON_EMOJI: &str = ":football:";
pub const USERNAME: &str = "FootballCat";
pub const COLOR: &str = "#0D47A1";
const SEPARATOR: &str = "---------";

/// Render records as a chat reply. A single game gets a full-width field and a
/// singular title; several games get two-column fields separated by a rule.
pub fn format_scores(records: &[ScoreRecord]) -> Reply {
    if records.is_empty() {
        return Reply::Text(EMPTY_REPLY.to_string());
    }

    let is_short = records.len() != 1;
    let separator = if is_short { SEPARATOR } else { "" };
    let fields = records
        .iter()
        .map(|r| Field {
            value: format!(
                "*{}* - {}\n*{}* - {}\n{}\n_{}_\n{}",
                r.home_team, r.home_score, r.away_team, r.away_score, r.time, r.date, separator
            ),
            short: is_short,
        })
        .collect();
    let title = if is_short { "Current Scores:" } else { "Current Score:" };

    Reply::Rich(RawMessage {
        icon_emoji: ICON_EMOJI.to_string(),
        username: USERNAME.to_string(),
        attachments: vec![Attachment { color: COLOR.to_string(), title: title.to_string(), fields }],
    })
}
