//! Defines the read-only application state and the handling of one
//! event batch.

use crate::client::{Publish, PublishRequest};
use crate::conf::Settings;
use crate::dump::DumpStyle;
use crate::message;
use anyhow::{anyhow, Result};
use aws_lambda_events::event::s3::S3Event;
use envy::from_env;
use once_cell::sync::OnceCell;
use tracing::{info, instrument};

/// An App is an initialized application state, derived from settings.
pub struct App {
    /// The original settings.
    pub settings: Settings,

    /// The rendering applied to logged value dumps.
    pub dump: DumpStyle,
}

impl App {
    /// Initialize an App instance given a settings struct. Consumes
    /// the settings struct.
    pub fn new(settings: Settings) -> Self {
        let dump = DumpStyle::from_flag(settings.serialize_to_json);
        App { settings, dump }
    }

    /// Handle one batch of records: derive the message body and
    /// publish it as a single message to the configured topic. The
    /// publish call happens exactly once, even for an empty body.
    #[instrument(skip(self, event, publisher))]
    pub async fn handle(&self, event: &S3Event, publisher: &impl Publish) -> Result<()> {
        info!("S3 event: {}", self.dump.render(event));

        let body = message::body(event, self.dump)?;
        info!("SNS message body: {}", self.dump.render(&body));

        let request = PublishRequest {
            topic_arn: self.settings.topic_arn.clone(),
            message: body,
        };
        info!("SNS publish request: {}", self.dump.render(&request));

        let receipt = publisher.publish(&request).await?;
        info!("SNS publish result: {}", self.dump.render(&receipt));

        Ok(())
    }
}

/// Global App instance.
static CURRENT: OnceCell<App> = OnceCell::new();

/// Initialize the global App instance.
pub fn init() -> Result<()> {
    let settings = from_env()?;
    let app = App::new(settings);
    CURRENT
        .set(app)
        .map_err(|_| anyhow!("app::CURRENT was already initialized"))
}

/// Get the current App instance, or panic if it hasn't been
/// initialized.
pub fn current() -> &'static App {
    CURRENT.get().expect("app is not initialized")
}
