//! FeedgateError to napi::Error with `[ERROR_CODE] message` strings.
//!
//! The TS client parses the code from the bracketed prefix.

use feedgate_core::FeedgateError;
use napi::Status;

pub const ALREADY_INITIALIZED: &str = "ALREADY_INITIALIZED";
pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";

pub fn to_napi_error(err: FeedgateError) -> napi::Error {
    let code = err.error_code();
    napi::Error::new(Status::GenericFailure, format!("[{code}] {err}"))
}

/// Schema failures are caller mistakes, so they map to `InvalidArg`.
pub fn schema_error(err: feedgate_core::SchemaError) -> napi::Error {
    let err = FeedgateError::from(err);
    let code = err.error_code();
    napi::Error::new(Status::InvalidArg, format!("[{code}] {err}"))
}

pub fn already_initialized() -> napi::Error {
    napi::Error::new(
        Status::GenericFailure,
        format!("[{ALREADY_INITIALIZED}] FeedGate runtime already initialized"),
    )
}

pub fn invalid_argument(msg: impl std::fmt::Display) -> napi::Error {
    napi::Error::new(Status::InvalidArg, format!("[{INVALID_ARGUMENT}] {msg}"))
}
