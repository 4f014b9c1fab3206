//! Structured log events for the quality gate.
//!
//! Each function emits a `tracing` event with structured fields.

use feedgate_core::{CheckId, FeedMode, PostLength};

/// Log one failed check.
pub fn check_failed(check: CheckId, message: &str) {
    tracing::debug!(
        event = "check_failed",
        check = %check,
        message = %message,
        "quality check failed"
    );
}

/// Log the verdict for one candidate. Rejections log at info.
pub fn verdict_emitted(mode: FeedMode, length: PostLength, strict: bool, error_count: usize) {
    if error_count == 0 {
        tracing::debug!(
            event = "verdict_emitted",
            mode = %mode,
            length = %length,
            strict = strict,
            "candidate accepted"
        );
    } else {
        tracing::info!(
            event = "verdict_emitted",
            mode = %mode,
            length = %length,
            strict = strict,
            error_count = error_count,
            "candidate rejected"
        );
    }
}
