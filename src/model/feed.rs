use serde::{Deserialize, Serialize};

/// Top-level document served by the NFL scores feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreFeed {
    #[serde(default)]
    pub game_scores: Vec<GameScore>,
}

impl ScoreFeed {
    /// Parse a feed document from a raw JSON body (no network).
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameScore {
    pub game_schedule: GameSchedule,
    // Absent until the game has started producing scores
    #[serde(default)]
    pub score: Option<Score>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSchedule {
    pub game_date: String,
    pub game_time_eastern: String,
    pub home_team: TeamRef,
    pub visitor_team: TeamRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRef {
    pub abbr: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub phase: String,
    /// Game clock, e.g. "08:14". Null or missing between periods.
    #[serde(default)]
    pub time: Option<String>,
    pub home_team_score: TeamScore,
    pub visitor_team_score: TeamScore,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamScore {
    pub point_total: u32,
}
