use std::time::Duration;

use thiserror::Error;
use tracing::{error, info, info_span, instrument, warn};

use crate::model::feed::ScoreFeed;

/// Live NFL scores feed.
pub const SCORE_URL: &str = "https://feeds.nfl.com/feeds-rs/scores.json";

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("score feed request failed: {0}")]
    Network(String),
    #[error("score feed body could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fetch options. The default has no timeout and no retries.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub url: String,
    pub timeout: Option<Duration>,
    /// Extra attempts after a transport failure. Parse failures are never retried.
    pub retries: u32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self { url: SCORE_URL.to_string(), timeout: None, retries: 0 }
    }
}

/// Anything that can produce a score feed document.
pub trait ScoreSource {
    fn fetch(&self) -> Result<ScoreFeed, FeedError>;
}

/// Blocking HTTP client for the scores feed. Holds no state between fetches.
#[derive(Debug, Clone, Default)]
pub struct FeedClient {
    config: FeedConfig,
}

impl FeedClient {
    pub fn new(config: FeedConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    fn fetch_body(&self, agent: &ureq::Agent) -> Result<String, FeedError> {
        let response_result = {
            let _span = info_span!("score_feed_fetch", url = %self.config.url).entered();
            agent.get(&self.config.url).call()
        };
        match response_result {
            Ok(response) => {
                info!(status = response.status().as_u16(), "Fetched score feed");
                let mut body_reader = response.into_body();
                body_reader.read_to_string().map_err(|e| {
                    error!(error = %e, "Failed to read score feed body");
                    FeedError::Network(format!("Failed to read response body: {}", e))
                })
            }
            Err(e) => {
                error!(error = %e, url = %self.config.url, "Score feed request failed");
                Err(FeedError::Network(e.to_string()))
            }
        }
    }
}

impl ScoreSource for FeedClient {
    #[instrument(level = "info", skip(self), fields(retries = self.config.retries))]
    fn fetch(&self) -> Result<ScoreFeed, FeedError> {
        let config = ureq::Agent::config_builder()
            .timeout_global(self.config.timeout)
            .build();
        let agent = ureq::Agent::new_with_config(config);

        let mut attempt: u32 = 0;
        loop {
            match self.fetch_body(&agent) {
                Ok(body) => {
                    return ScoreFeed::from_json(&body).map_err(|e| {
                        error!(error = %e, bytes = body.len(), "Failed to deserialize score feed");
                        FeedError::Parse(e)
                    });
                }
                Err(e) if attempt < self.config.retries => {
                    attempt += 1;
                    warn!(error = %e, attempt, "Retrying score feed fetch");
                }
                Err(e) => return Err(e),
            }
        }
    }
}
