use anyhow::{anyhow, Context, Result};
use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{run, service_fn, LambdaEvent};
use s3_sns_notifier::{app, client};
use tracing::info;

/// Forward each S3 event batch as a single SNS notification.
async fn function_handler(event: LambdaEvent<S3Event>) -> Result<()> {
    info!("context: {:?}", event.context);
    app::current()
        .handle(&event.payload, client::current())
        .await
        .with_context(|| format!("Failed to handle batch of records {:?}", &event.payload))
}

/// Run an AWS Lambda function that listens to S3 bucket notification
/// events, derives a human-readable description of each batch, and
/// publishes it to an SNS topic.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();
    app::init()?;
    client::init(&app::current().settings).await?;

    run(service_fn(function_handler))
        .await
        .map_err(|e| anyhow!("{:?}", e))
}
