//! Schema binding: raw generated JSON to a typed candidate.

use napi_derive::napi;
use tracing::debug;

use feedgate_core::FeedgateError;

use crate::conversions::error_types;

/// Parse a raw generated post.
///
/// Throws with every field violation listed when the object breaks the
/// schema. Returns the trimmed candidate otherwise.
#[napi]
pub fn parse_generated_post(raw: serde_json::Value) -> napi::Result<serde_json::Value> {
    debug!("NAPI: parse_generated_post");
    let post = feedgate_schema::parse_generated_post(&raw).map_err(error_types::schema_error)?;
    serde_json::to_value(&post).map_err(|e| error_types::to_napi_error(FeedgateError::from(e)))
}
