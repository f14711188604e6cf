//! Forwards S3 bucket notification events to an SNS topic as
//! human-readable messages.

pub mod app;
pub mod client;
pub mod conf;
pub mod dump;
pub mod message;
