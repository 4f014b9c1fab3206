//! Mode-agnostic checks: structural (always) and stylistic (strict only).

pub mod structural;
pub mod stylistic;
