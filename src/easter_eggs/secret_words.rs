//! Words typed anywhere on the page

use std::collections::VecDeque;

/// Keys remembered for word matching
pub const TRAIL_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretWord {
    /// Switch to Spanish
    Hola,
    /// Switch back to English
    Hello,
    /// The classic adventure-game magic word
    Xyzzy,
}

impl SecretWord {
    pub const ALL: [SecretWord; 3] = [Self::Hola, Self::Hello, Self::Xyzzy];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hola => "hola",
            Self::Hello => "hello",
            Self::Xyzzy => "xyzzy",
        }
    }
}

/// The last [`TRAIL_LEN`] printable keys, lowercased
#[derive(Debug, Clone, Default)]
pub struct KeyTrail {
    keys: VecDeque<char>,
}

impl KeyTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Named keys ("Enter", "ArrowUp") are not printable
    /// and are ignored. Returns the word the trail now ends with, if any.
    pub fn push(&mut self, key: &str) -> Option<SecretWord> {
        let mut chars = key.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return None;
        };

        self.keys.extend(ch.to_lowercase());
        while self.keys.len() > TRAIL_LEN {
            self.keys.pop_front();
        }

        let typed: String = self.keys.iter().collect();
        SecretWord::ALL
            .into_iter()
            .find(|word| typed.ends_with(word.as_str()))
    }

    pub fn typed(&self) -> String {
        self.keys.iter().collect()
    }
}
