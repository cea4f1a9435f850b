use std::cell::RefCell;

use nfl_scores_bot::chat::{ChatError, ChatHost};
use nfl_scores_bot::command::{CommandError, InboundMessage, ScoreCommand};
use nfl_scores_bot::feed::{FeedError, ScoreSource};
use nfl_scores_bot::handler::{run_action, Action};
use nfl_scores_bot::model::feed::ScoreFeed;
use nfl_scores_bot::model::message::{RawMessage, Reply};

struct CannedFeed(String);

impl ScoreSource for CannedFeed {
    fn fetch(&self) -> Result<ScoreFeed, FeedError> {
        Ok(ScoreFeed::from_json(&self.0)?)
    }
}

struct DownFeed;

impl ScoreSource for DownFeed {
    fn fetch(&self) -> Result<ScoreFeed, FeedError> {
        Err(FeedError::Network("connection refused".to_string()))
    }
}

#[derive(Debug, PartialEq)]
enum Posted {
    Text(String, String),
    Raw(String, RawMessage),
}

#[derive(Default)]
struct RecordingHost {
    posts: RefCell<Vec<Posted>>,
}

impl ChatHost for RecordingHost {
    fn post_message(&self, channel: &str, text: &str) -> Result<(), ChatError> {
        self.posts.borrow_mut().push(Posted::Text(channel.to_string(), text.to_string()));
        Ok(())
    }

    fn post_raw_message(&self, channel: &str, payload: &RawMessage) -> Result<(), ChatError> {
        self.posts.borrow_mut().push(Posted::Raw(channel.to_string(), payload.clone()));
        Ok(())
    }
}

fn sample_command() -> ScoreCommand<CannedFeed, RecordingHost> {
    let body = std::fs::read_to_string("tests/sample_scores.json").expect("failed to read sample_scores.json");
    ScoreCommand::new(CannedFeed(body), RecordingHost::default())
}

fn message(user_text: &str) -> InboundMessage {
    InboundMessage { channel: "C123".to_string(), user_text: user_text.to_string() }
}

#[test]
fn posts_all_games_when_no_team_given() {
    let command = sample_command();
    let reply = command.handle(&message("")).expect("handle failed");

    let posts = command.host().posts.borrow();
    assert_eq!(posts.len(), 1);
    let Posted::Raw(channel, raw) = &posts[0] else { panic!("expected raw post, got {:?}", posts[0]) };
    assert_eq!(channel, "C123");
    assert_eq!(raw.attachments[0].title, "Current Scores:");
    assert_eq!(raw.attachments[0].fields.len(), 3);
    assert_eq!(reply, Reply::Rich(raw.clone()));
}

#[test]
fn team_filter_narrows_to_one_game() {
    let command = sample_command();
    command.handle(&message("buf")).expect("handle failed");

    let posts = command.host().posts.borrow();
    let Posted::Raw(_, raw) = &posts[0] else { panic!("expected raw post") };
    assert_eq!(raw.attachments[0].title, "Current Score:");
    assert!(!raw.attachments[0].fields[0].short);
    assert!(raw.attachments[0].fields[0].value.contains("*NE* - 20"), "field was: {}", raw.attachments[0].fields[0].value);
}

#[test]
fn unknown_team_gets_friendly_text() {
    let command = sample_command();
    command.handle(&message("NYJ")).expect("handle failed");

    let posts = command.host().posts.borrow();
    assert_eq!(*posts, vec![Posted::Text("C123".to_string(), "I couldn't find anything!".to_string())]);
}

#[test]
fn feed_failure_propagates_without_posting() {
    let command = ScoreCommand::new(DownFeed, RecordingHost::default());
    let result = command.handle(&message("NE"));

    assert!(matches!(result, Err(CommandError::Feed(FeedError::Network(_)))), "result was: {:?}", result);
    assert!(command.host().posts.borrow().is_empty());
}

#[test]
fn malformed_feed_is_a_parse_error() {
    let command = ScoreCommand::new(CannedFeed("<html>oops</html>".to_string()), RecordingHost::default());
    let result = command.handle(&message(""));

    assert!(matches!(result, Err(CommandError::Feed(FeedError::Parse(_)))), "result was: {:?}", result);
    assert!(command.host().posts.borrow().is_empty());
}

#[test]
fn help_describes_usage() {
    let command = sample_command();
    assert_eq!(command.help(), "Usage: `?nfl team` should output the current/final score.");
}

#[test]
fn help_action_posts_usage_to_channel() {
    let command = ScoreCommand::new(DownFeed, RecordingHost::default());
    let summary = run_action(Action::Help, &command, &message("")).expect("help failed");

    assert_eq!(summary, "Help posted");
    let posts = command.host().posts.borrow();
    assert_eq!(
        *posts,
        vec![Posted::Text("C123".to_string(), "Usage: `?nfl team` should output the current/final score.".to_string())]
    );
}

#[test]
fn scores_action_summarizes_posted_games() {
    let command = sample_command();
    assert_eq!(run_action(Action::Scores, &command, &message("")).unwrap(), "Posted 3 score(s)");
    assert_eq!(
        run_action(Action::Scores, &command, &message("NYJ")).unwrap(),
        "No scores matched: I couldn't find anything!"
    );
    assert_eq!(command.host().posts.borrow().len(), 2);
}
