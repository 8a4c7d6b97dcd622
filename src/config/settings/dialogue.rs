//! Typewriter and speech bubble settings

use serde::{Deserialize, Serialize};

/// Dialogue settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DialogueSettings {
    /// Base delay after each revealed character
    #[serde(default = "default_char_delay_ms")]
    pub char_delay_ms: u64,

    /// Delay multiplier after `.`, `!` and `?`
    #[serde(default = "default_sentence_pause_factor")]
    pub sentence_pause_factor: u64,

    /// Delay multiplier after `,`
    #[serde(default = "default_clause_pause_factor")]
    pub clause_pause_factor: u64,

    /// How long the typing cursor stays after a text finishes on its own
    #[serde(default = "default_cursor_linger_ms")]
    pub cursor_linger_ms: u64,

    /// Default lifetime of a speech bubble
    #[serde(default = "default_bubble_duration_ms")]
    pub bubble_duration_ms: u64,

    /// Fade-out time before a bubble is removed
    #[serde(default = "default_bubble_fade_ms")]
    pub bubble_fade_ms: u64,
}

fn default_char_delay_ms() -> u64 {
    30
}

fn default_sentence_pause_factor() -> u64 {
    5
}

fn default_clause_pause_factor() -> u64 {
    2
}

fn default_cursor_linger_ms() -> u64 {
    1_000
}

fn default_bubble_duration_ms() -> u64 {
    3_000
}

fn default_bubble_fade_ms() -> u64 {
    300
}

impl Default for DialogueSettings {
    fn default() -> Self {
        Self {
            char_delay_ms: default_char_delay_ms(),
            sentence_pause_factor: default_sentence_pause_factor(),
            clause_pause_factor: default_clause_pause_factor(),
            cursor_linger_ms: default_cursor_linger_ms(),
            bubble_duration_ms: default_bubble_duration_ms(),
            bubble_fade_ms: default_bubble_fade_ms(),
        }
    }
}
