/// Display state of a single game, built fresh from every feed fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreRecord {
    /// "<gameDate> @ <gameTimeEastern>", verbatim from the feed.
    pub date: String,
    pub home_team: String,
    pub home_score: u32,
    pub away_team: String,
    pub away_score: u32,
    /// "TBD", "FINAL" or "<phase> - <clock>".
    pub time: String,
}
