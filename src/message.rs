//! Derives the notification message body from the records inside an
//! S3 event.

use crate::dump::DumpStyle;
use anyhow::{anyhow, Result};
use aws_lambda_events::event::s3::{S3Event, S3EventRecord};
use tracing::info;

/// Event name tag of objects created through a put.
const OBJECT_CREATED_PUT: &str = "ObjectCreated:Put";

/// Event name tag of objects removed through a delete.
const OBJECT_REMOVED_DELETE: &str = "ObjectRemoved:Delete";

/// Extracts the bucket name and object key of a record, which must
/// both be present.
fn location(record: &S3EventRecord) -> Result<(&str, &str)> {
    let bucket_name = record
        .s3
        .bucket
        .name
        .as_deref()
        .ok_or_else(|| anyhow!("Record doesn't carry a bucket name"))?;
    info!("S3 bucket: {}", bucket_name);
    let object_key = record
        .s3
        .object
        .key
        .as_deref()
        .ok_or_else(|| anyhow!("Record doesn't carry an object key"))?;
    info!("S3 key: {}", object_key);
    Ok((bucket_name, object_key))
}

/// Formats the message describing a single record, or nothing if the
/// record's event name isn't one of the recognized tags. Unrecognized
/// tags are ignored on purpose.
fn describe(record: &S3EventRecord, dump: DumpStyle) -> Result<Option<String>> {
    info!("S3 message: {}", dump.render(record));
    let event_name = record.event_name.as_deref();
    info!("S3 event name: {:?}", event_name);
    match event_name {
        Some(OBJECT_CREATED_PUT) => {
            let (bucket_name, object_key) = location(record)?;
            Ok(Some(format!(
                "Object {} is created in bucket {}",
                object_key, bucket_name
            )))
        }
        Some(OBJECT_REMOVED_DELETE) => {
            let (bucket_name, object_key) = location(record)?;
            Ok(Some(format!(
                "Object {} is removed from bucket {}",
                object_key, bucket_name
            )))
        }
        _ => Ok(None),
    }
}

/// Builds the newline-joined message body for a whole event,
/// preserving record order. Records with unrecognized event names
/// contribute nothing; an event without recognized records yields an
/// empty body.
pub fn body(event: &S3Event, dump: DumpStyle) -> Result<String> {
    let mut messages = Vec::with_capacity(event.records.len());
    for record in &event.records {
        if let Some(message) = describe(record, dump)? {
            messages.push(message);
        }
    }
    Ok(messages.join("\n"))
}
