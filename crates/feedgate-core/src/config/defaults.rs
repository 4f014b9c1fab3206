// Single source of truth for all default values.

// --- Validation ---
pub const DEFAULT_STRICT: bool = true;

pub const DEFAULT_SHORT_MIN_WORDS: usize = 50;
pub const DEFAULT_SHORT_MAX_WORDS: usize = 110;
pub const DEFAULT_SHORT_MAX_SENTENCES: usize = 7;

pub const DEFAULT_MEDIUM_MIN_WORDS: usize = 120;
pub const DEFAULT_MEDIUM_MAX_WORDS: usize = 220;
pub const DEFAULT_MEDIUM_MAX_SENTENCES: usize = 12;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_ENV_VAR: &str = "FEEDGATE_LOG";
pub const DEFAULT_JSON_LOGS: bool = false;
