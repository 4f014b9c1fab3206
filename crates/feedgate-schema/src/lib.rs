//! # feedgate-schema
//!
//! Trust boundary between the LLM-facing decoder and the quality gate.
//! [`parse_generated_post`] turns an arbitrary JSON value into a
//! [`CandidatePost`](feedgate_core::CandidatePost) or fails with a
//! [`SchemaError`](feedgate_core::SchemaError) listing every broken field
//! rule. It never partially accepts.

pub mod document;
pub mod parse;

pub use document::post_schema;
pub use parse::{parse_generated_post, parse_generated_post_str};
