//! Defines the SNS transport: the publish capability consumed by the
//! adapter, its SDK-backed implementation, and the global client.

use crate::conf::Settings;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use aws_config::from_env;
use aws_sdk_sns::config::Region;
use aws_sdk_sns::Client;
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::env;

/// A single outbound publish call: one message aimed at one topic.
#[derive(Clone, Debug, Serialize)]
pub struct PublishRequest {
    /// The destination topic ARN, passed to the transport verbatim.
    pub topic_arn: String,

    /// The message body.
    pub message: String,
}

/// The transport's acknowledgment of a publish call. Logged, never
/// branched on.
#[derive(Clone, Debug, Serialize)]
pub struct PublishReceipt {
    /// The identifier the transport assigned to the message.
    pub message_id: Option<String>,
}

/// The single outbound capability the adapter depends on.
#[async_trait]
pub trait Publish {
    /// Publish one message to one topic.
    async fn publish(&self, request: &PublishRequest) -> Result<PublishReceipt>;
}

/// Publishes a single message through the given SNS client.
pub async fn send(client: &Client, request: &PublishRequest) -> Result<PublishReceipt> {
    let response = client
        .publish()
        .topic_arn(request.topic_arn.as_str())
        .message(request.message.as_str())
        .send()
        .await
        .with_context(|| {
            format!(
                "Failed to publish notification to topic {:?}",
                request.topic_arn
            )
        })?;
    Ok(PublishReceipt {
        message_id: response.message_id().map(String::from),
    })
}

#[async_trait]
impl Publish for Client {
    async fn publish(&self, request: &PublishRequest) -> Result<PublishReceipt> {
        send(self, request).await
    }
}

/// Global SNS client instance.
static CURRENT: OnceCell<Client> = OnceCell::new();

/// Initialize the global SNS client, pointed at the configured
/// region.
pub async fn init(settings: &Settings) -> Result<()> {
    let loader = from_env().region(Region::new(settings.region.clone()));
    let loader = if let Ok(endpoint_url) = env::var("AWS_ENDPOINT_URL") {
        loader.endpoint_url(
            if endpoint_url.starts_with("http://") || endpoint_url.starts_with("https://") {
                endpoint_url
            } else {
                format!("https://{}", endpoint_url)
            },
        )
    } else {
        loader
    };
    let sns_config = loader.load().await;
    let client = Client::new(&sns_config);
    CURRENT
        .set(client)
        .map_err(|_| anyhow!("client::CURRENT was already initialized"))
}

/// Get the current SNS client instance, or panic if it hasn't been
/// initialized.
pub fn current() -> &'static Client {
    CURRENT.get().expect("client is not initialized")
}
