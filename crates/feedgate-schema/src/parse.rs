use serde_json::Value;
use tracing::debug;

use feedgate_core::errors::{SchemaError, Violation, Violations};
use feedgate_core::CandidatePost;

use crate::document::{POST_SCHEMA, TRIMMED_FIELDS};

/// Parse a generated post, enforcing every schema bound.
///
/// String values are trimmed first, then the whole document is checked
/// against the post schema so the error lists every violation rather than
/// the first. The `confidence: low` / `uncertainty_note` pairing is left to
/// the validator.
///
/// # Errors
///
/// Returns [`SchemaError::Invalid`] when any field breaks its rule.
pub fn parse_generated_post(raw: &Value) -> Result<CandidatePost, SchemaError> {
    let document = trimmed(raw);

    let violations: Vec<Violation> = POST_SCHEMA
        .iter_errors(&document)
        .map(|e| Violation::new(field_path(&e.instance_path.to_string()), e.to_string()))
        .collect();
    if !violations.is_empty() {
        return Err(reject(violations));
    }

    serde_json::from_value(document).map_err(|e| reject(vec![Violation::new("", e.to_string())]))
}

/// Decode a JSON document and parse it with [`parse_generated_post`].
///
/// # Errors
///
/// Returns [`SchemaError::MalformedJson`] when `raw` is not JSON.
pub fn parse_generated_post_str(raw: &str) -> Result<CandidatePost, SchemaError> {
    let value: Value = serde_json::from_str(raw).map_err(|e| SchemaError::MalformedJson {
        reason: e.to_string(),
    })?;
    parse_generated_post(&value)
}

/// Copy of `raw` with every known string field and tag trimmed.
fn trimmed(raw: &Value) -> Value {
    let mut document = raw.clone();
    if let Some(obj) = document.as_object_mut() {
        for key in TRIMMED_FIELDS {
            if let Some(Value::String(s)) = obj.get_mut(key) {
                *s = s.trim().to_string();
            }
        }
        if let Some(Value::Array(tags)) = obj.get_mut("tags") {
            for tag in tags {
                if let Value::String(s) = tag {
                    *s = s.trim().to_string();
                }
            }
        }
    }
    document
}

/// JSON Pointer to field path: `/tags/2` becomes `tags[2]`, the root is `""`.
fn field_path(pointer: &str) -> String {
    let mut path = String::new();
    for segment in pointer.split('/').skip(1) {
        if !path.is_empty() && segment.parse::<usize>().is_ok() {
            path.push('[');
            path.push_str(segment);
            path.push(']');
        } else {
            if !path.is_empty() {
                path.push('.');
            }
            path.push_str(segment);
        }
    }
    path
}

fn reject(violations: Vec<Violation>) -> SchemaError {
    debug!(
        violation_count = violations.len(),
        "generated post rejected by schema"
    );
    let mut collected = Violations::new();
    for v in violations {
        collected.push(v);
    }
    SchemaError::Invalid {
        violations: collected,
    }
}
