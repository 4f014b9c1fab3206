/// FeedGate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// --- Schema bounds (trimmed lengths, in chars) ---
pub const TITLE_MIN_CHARS: usize = 6;
pub const TITLE_MAX_CHARS: usize = 100;
pub const BODY_MIN_CHARS: usize = 40;
pub const BODY_MAX_CHARS: usize = 2400;
pub const POST_TYPE_MIN_CHARS: usize = 3;
pub const POST_TYPE_MAX_CHARS: usize = 32;
pub const TAGS_MIN: usize = 1;
pub const TAGS_MAX: usize = 6;
pub const TAG_MIN_CHARS: usize = 2;
pub const TAG_MAX_CHARS: usize = 24;
pub const UNCERTAINTY_NOTE_MIN_CHARS: usize = 4;
pub const UNCERTAINTY_NOTE_MAX_CHARS: usize = 300;

// --- Stylistic thresholds ---
/// Longest sentence allowed, in words.
pub const MAX_WORDS_PER_SENTENCE: usize = 34;

// --- Biography thresholds ---
/// Window for the hook-strength gate.
pub const HOOK_WINDOW_WORDS: usize = 24;
/// Window for the high-stakes opening gate.
pub const HIGH_STAKES_WINDOW_WORDS: usize = 35;
/// Window for the story-progression connective.
pub const PROGRESSION_WINDOW_WORDS: usize = 70;
pub const MIN_STORY_SENTENCES: usize = 3;
/// Average words per sentence allowed before a body reads as dense.
pub const MAX_AVG_WORDS_PER_SENTENCE: f64 = 22.0;
pub const CLOSING_LINE_MIN_WORDS: usize = 6;
pub const CLOSING_LINE_MAX_WORDS: usize = 26;
