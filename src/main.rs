use lambda_runtime::{service_fn, Error};
use nfl_scores_bot::handler::handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // JSON lines for CloudWatch
    let _ = tracing_subscriber::fmt()
        .json()
        .with_max_level(tracing::Level::INFO)
        .with_current_span(false)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .try_init();

    lambda_runtime::run(service_fn(handler)).await
}
