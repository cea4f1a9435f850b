use tracing::{debug, instrument};

use crate::model::feed::{Score, ScoreFeed};
use crate::model::score::ScoreRecord;

/// Map every game in the feed to a display record, keeping feed order.
#[instrument(level = "info", skip(feed), fields(games = feed.game_scores.len()))]
pub fn extract(feed: &ScoreFeed) -> Vec<ScoreRecord> {
    feed.game_scores
        .iter()
        .map(|game| {
            let schedule = &game.game_schedule;
            let (home_score, away_score) = match &game.score {
                Some(score) => (score.home_team_score.point_total, score.visitor_team_score.point_total),
                None => (0, 0),
            };
            ScoreRecord {
                date: format!("{} @ {}", schedule.game_date, schedule.game_time_eastern),
                home_team: schedule.home_team.abbr.clone(),
                home_score,
                away_team: schedule.visitor_team.abbr.clone(),
                away_score,
                time: resolve_phase(game.score.as_ref()),
            }
        })
        .collect()
}

/// Status text for a game: "TBD" before any score exists, "FINAL" once over,
/// otherwise "<phase> - <clock>".
pub fn resolve_phase(score: Option<&Score>) -> String {
    match score {
        None => "TBD".to_string(),
        Some(score) if score.phase == "FINAL" => score.phase.clone(),
        Some(score) => format!("{} - {}", score.phase, score.time.as_deref().unwrap_or("")),
    }
}

/// Keep only games involving `query` as home or away team (case-insensitive, exact).
/// Surrounding whitespace is ignored, so an empty or blank query keeps everything.
pub fn filter_by_team(records: Vec<ScoreRecord>, query: &str) -> Vec<ScoreRecord> {
    let query = query.trim();
    if query.is_empty() {
        return records;
    }
    let team = query.to_uppercase();
    let matched: Vec<ScoreRecord> = records
        .into_iter()
        .filter(|r| r.home_team == team || r.away_team == team)
        .collect();
    debug!(team = %team, matched = matched.len(), "Filtered scores by team");
    matched
}
