//! Clicking the companion sprite

/// Clicks answered with a wave
pub const WAVE_CLICKS: u32 = 5;
/// The click that triggers the flip
pub const FLIP_CLICK: u32 = 10;

pub const CONFUSED_LINE: &str = "...?";
pub const FLIP_LINE: &str = "You found my secret move!";
pub const QUIPS: [&str; 5] = ["Stop that!", "Okay okay!", "I'm dizzy...", "Wheee!", ":)"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteReaction {
    /// Shake animation
    Wave,
    /// Speech bubble with the given line
    Say(&'static str),
    /// The secret flip, with its line
    Flip(&'static str),
}

impl SpriteReaction {
    /// Line for a speech bubble, if the reaction has one
    pub fn line(&self) -> Option<&'static str> {
        match self {
            Self::Wave => None,
            Self::Say(line) | Self::Flip(line) => Some(line),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SpriteClicks {
    count: u32,
}

impl SpriteClicks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn click(&mut self) -> SpriteReaction {
        self.count = self.count.saturating_add(1);
        match self.count {
            n if n <= WAVE_CLICKS => SpriteReaction::Wave,
            n if n < FLIP_CLICK => SpriteReaction::Say(CONFUSED_LINE),
            FLIP_CLICK => SpriteReaction::Flip(FLIP_LINE),
            _ => SpriteReaction::Say(QUIPS[random_index(QUIPS.len())]),
        }
    }
}

fn random_index(len: usize) -> usize {
    let mut bytes = [0u8; 4];
    if getrandom::getrandom(&mut bytes).is_ok() {
        return u32::from_le_bytes(bytes) as usize % len;
    }

    // Fallback when the OS RNG is unavailable
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    nanos as usize % len
}
