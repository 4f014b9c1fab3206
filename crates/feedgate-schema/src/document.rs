//! The generated-post JSON Schema.
//!
//! Bounds come from [`feedgate_core::constants`]. `minLength`/`maxLength`
//! count code points, matching how the rest of the gate measures text.

use std::sync::LazyLock;

use jsonschema::Validator;
use serde_json::{json, Value};

use feedgate_core::constants::*;

/// Compiled validator for [`post_schema`].
pub(crate) static POST_SCHEMA: LazyLock<Validator> = LazyLock::new(|| {
    jsonschema::validator_for(&post_schema()).expect("generated post schema must be valid")
});

/// String fields whose values are trimmed before the schema runs.
pub(crate) const TRIMMED_FIELDS: [&str; 4] = ["title", "body", "post_type", "uncertainty_note"];

/// The schema as a JSON value, for callers that want to publish it.
pub fn post_schema() -> Value {
    json!({
        "title": "GeneratedPost",
        "type": "object",
        "required": ["title", "body", "post_type", "tags", "confidence"],
        "properties": {
            "title": {
                "type": "string",
                "minLength": TITLE_MIN_CHARS,
                "maxLength": TITLE_MAX_CHARS
            },
            "body": {
                "type": "string",
                "minLength": BODY_MIN_CHARS,
                "maxLength": BODY_MAX_CHARS
            },
            "post_type": {
                "type": "string",
                "minLength": POST_TYPE_MIN_CHARS,
                "maxLength": POST_TYPE_MAX_CHARS
            },
            "tags": {
                "type": "array",
                "minItems": TAGS_MIN,
                "maxItems": TAGS_MAX,
                "items": {
                    "type": "string",
                    "minLength": TAG_MIN_CHARS,
                    "maxLength": TAG_MAX_CHARS
                }
            },
            "confidence": {
                "enum": ["high", "medium", "low"]
            },
            "uncertainty_note": {
                "type": ["string", "null"],
                "minLength": UNCERTAINTY_NOTE_MIN_CHARS,
                "maxLength": UNCERTAINTY_NOTE_MAX_CHARS
            }
        }
    })
}
