//! Defines configuration as read from the environment.

use serde::Deserialize;

/// The notification adapter is configured to forward S3 bucket change
/// events to a single SNS topic. The configuration must be given as
/// environment variables; envy matches them case-insensitively, so
/// the deployed names `Region`, `TopicARN` and `SerializeToJSON` all
/// resolve to the fields below.
#[derive(Deserialize)]
pub struct Settings {
    /// Selects the region of the SNS transport.
    pub region: String,

    /// The ARN of the topic that receives the notification message.
    /// It is passed to the transport verbatim, without validation.
    #[serde(rename = "topicarn")]
    pub topic_arn: String,

    /// Whether logged value dumps use pretty-printed JSON instead of
    /// the value's debug representation. Cosmetic only.
    #[serde(rename = "serializetojson", default)]
    pub serialize_to_json: bool,
}
