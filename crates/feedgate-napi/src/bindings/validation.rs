//! Validation binding: run the quality gate on one candidate.

use napi_derive::napi;
use tracing::debug;

use feedgate_core::{FeedMode, FeedgateError, PostLength, ValidationOptions};

use crate::conversions::error_types;
use crate::runtime;

/// Validate a generated post for a feed mode and target length.
///
/// Returns `{ ok, errors }`. Throws only when `post` fails schema parsing
/// or `mode`/`length`/`options` are not recognized; quality problems are
/// reported in `errors`. Omitted `options` use the configured default
/// strictness.
#[napi]
pub fn validate_post_content(
    post: serde_json::Value,
    mode: String,
    length: String,
    options: Option<serde_json::Value>,
) -> napi::Result<serde_json::Value> {
    debug!(%mode, %length, "NAPI: validate_post_content");

    let rt = runtime::get();

    let post = feedgate_schema::parse_generated_post(&post).map_err(error_types::schema_error)?;
    let mode: FeedMode = mode.parse().map_err(error_types::to_napi_error)?;
    let length: PostLength = length.parse().map_err(error_types::to_napi_error)?;
    let options = match options {
        Some(value) => serde_json::from_value::<ValidationOptions>(value)
            .map_err(|e| error_types::invalid_argument(format!("options: {e}")))?,
        None => rt.validator.default_options(),
    };

    let verdict = rt.validator.validate(&post, mode, length, options);
    serde_json::to_value(&verdict).map_err(|e| error_types::to_napi_error(FeedgateError::from(e)))
}
