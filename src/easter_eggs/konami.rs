//! ↑ ↑ ↓ ↓ ← → ← → B A

pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Tracks progress through the Konami sequence, one key press at a time
#[derive(Debug, Clone, Default)]
pub struct KonamiCode {
    index: usize,
}

impl KonamiCode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a key name. Returns true when it completes the sequence.
    ///
    /// Keys compare case-insensitively. A wrong key restarts the sequence
    /// from the beginning.
    pub fn feed(&mut self, key: &str) -> bool {
        if key.eq_ignore_ascii_case(KONAMI_SEQUENCE[self.index]) {
            self.index += 1;
            if self.index == KONAMI_SEQUENCE.len() {
                self.index = 0;
                return true;
            }
        } else {
            self.index = 0;
        }
        false
    }

    /// Keys matched so far
    pub fn progress(&self) -> usize {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(code: &mut KonamiCode, keys: &[&str]) -> Vec<bool> {
        keys.iter().map(|k| code.feed(k)).collect()
    }

    #[test]
    fn test_full_sequence_fires_once() {
        let mut code = KonamiCode::new();
        let fired = feed_all(&mut code, &KONAMI_SEQUENCE);

        assert_eq!(fired.iter().filter(|f| **f).count(), 1);
        assert!(fired[9]);
        assert_eq!(code.progress(), 0);
    }

    #[test]
    fn test_case_insensitive() {
        let mut code = KonamiCode::new();
        let mut keys = KONAMI_SEQUENCE;
        keys[8] = "B";
        keys[9] = "A";
        assert!(feed_all(&mut code, &keys)[9]);
    }

    #[test]
    fn test_wrong_key_restarts() {
        let mut code = KonamiCode::new();
        feed_all(&mut code, &["ArrowUp", "ArrowUp", "ArrowDown", "x"]);
        assert_eq!(code.progress(), 0);
    }

    #[test]
    fn test_extra_up_breaks_sequence() {
        let mut code = KonamiCode::new();
        let mut keys = vec!["ArrowUp"];
        keys.extend(KONAMI_SEQUENCE);

        assert!(!feed_all(&mut code, &keys).contains(&true));
        assert_eq!(code.progress(), 0);
    }

    #[test]
    fn test_sequence_can_repeat() {
        let mut code = KonamiCode::new();
        assert!(feed_all(&mut code, &KONAMI_SEQUENCE)[9]);
        assert!(feed_all(&mut code, &KONAMI_SEQUENCE)[9]);
    }
}
