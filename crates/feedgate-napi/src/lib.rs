//! # feedgate-napi
//!
//! NAPI bindings for the generation pipeline's TypeScript side.
//!
//! ## Architecture
//!
//! - `runtime.rs`: global `GateRuntime` singleton holding the configured validator
//! - `tracing_setup.rs`: one-shot subscriber install driven by `[observability]`
//! - `bindings/`: exported functions (lifecycle, schema, validation)
//! - `conversions/`: Rust to JS error mapping

pub mod bindings;
pub mod conversions;
pub mod runtime;
pub mod tracing_setup;
