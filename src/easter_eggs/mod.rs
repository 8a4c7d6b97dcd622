//! Hidden secrets
//!
//! The detectors are plain state machines. [`EasterEggs`] feeds them page
//! input and turns their findings into progression rewards plus
//! [`EggEffect`]s for the page to show.

mod devtools;
mod konami;
mod secret_words;
mod sprite;

pub use devtools::{looks_open, DevtoolsWatch, WindowSize, DEVTOOLS_THRESHOLD};
pub use konami::{KonamiCode, KONAMI_SEQUENCE};
pub use secret_words::{KeyTrail, SecretWord, TRAIL_LEN};
pub use sprite::{SpriteClicks, SpriteReaction, CONFUSED_LINE, FLIP_LINE, QUIPS};

use tracing::debug;

use crate::progress::{AchievementId, Clock, Progression};
use crate::storage::KeyValueStore;

pub const KONAMI_MESSAGE: &str = "You know the ancient ways!";
pub const SPANISH_ON_MESSAGE: &str = "¡Hola! Ahora estás en modo español.";
pub const SPANISH_OFF_MESSAGE: &str = "Hello! Back to English.";
pub const XYZZY_MESSAGE: &str = "Nothing happens... or does it?";
pub const XYZZY_REASON: &str = "Classic gamer";

/// Something the page should show in response to a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EggEffect {
    /// Gold flash and particle burst, every time the code is entered
    KonamiBurst,
    /// Spanish mode switched on or off
    Language { spanish: bool },
    /// Centered message that fades after a moment
    SecretMessage(&'static str),
    /// Companion sprite reaction
    Sprite(SpriteReaction),
}

#[derive(Debug, Clone, Default)]
pub struct EasterEggs {
    konami: KonamiCode,
    trail: KeyTrail,
    sprite: SpriteClicks,
    devtools: DevtoolsWatch,
    spanish: bool,
}

impl EasterEggs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_spanish(&self) -> bool {
        self.spanish
    }

    /// Handle a key press. `in_form_field` keeps typed words out of the
    /// trail; the Konami code is tracked everywhere.
    pub fn on_key<S: KeyValueStore, C: Clock>(
        &mut self,
        key: &str,
        in_form_field: bool,
        progress: &mut Progression<S, C>,
    ) -> Vec<EggEffect> {
        let mut effects = Vec::new();

        if self.konami.feed(key) {
            debug!("Konami code entered");
            progress.unlock_id(AchievementId::KonamiMaster);
            effects.push(EggEffect::KonamiBurst);
            effects.push(EggEffect::SecretMessage(KONAMI_MESSAGE));
        }

        if in_form_field {
            return effects;
        }

        match self.trail.push(key) {
            Some(SecretWord::Hola) => {
                self.spanish = true;
                effects.push(EggEffect::Language { spanish: true });
                effects.push(EggEffect::SecretMessage(SPANISH_ON_MESSAGE));
                progress.unlock_id(AchievementId::SecretHunter);
            }
            Some(SecretWord::Hello) => {
                self.spanish = false;
                effects.push(EggEffect::Language { spanish: false });
                effects.push(EggEffect::SecretMessage(SPANISH_OFF_MESSAGE));
            }
            Some(SecretWord::Xyzzy) => {
                effects.push(EggEffect::SecretMessage(XYZZY_MESSAGE));
                let xp = progress.settings().secret_word_xp;
                progress.award_xp(xp, XYZZY_REASON);
            }
            None => {}
        }

        effects
    }

    /// Handle a click on the companion sprite
    pub fn on_sprite_click<S: KeyValueStore, C: Clock>(
        &mut self,
        progress: &mut Progression<S, C>,
    ) -> EggEffect {
        let reaction = self.sprite.click();
        if matches!(reaction, SpriteReaction::Flip(_)) {
            progress.unlock_id(AchievementId::SecretHunter);
        }
        EggEffect::Sprite(reaction)
    }

    /// Poll window sizes for docked developer tools. Returns true on the
    /// first detection.
    pub fn check_devtools<S: KeyValueStore, C: Clock>(
        &mut self,
        outer: WindowSize,
        inner: WindowSize,
        progress: &mut Progression<S, C>,
    ) -> bool {
        if !self.devtools.check(outer, inner) {
            return false;
        }
        debug!("Developer tools detected");
        progress.unlock_id(AchievementId::CodeWhisperer);
        true
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};

    use super::*;
    use crate::config::ProgressionSettings;
    use crate::progress::FixedClock;
    use crate::storage::MemoryStore;

    fn progress() -> Progression<MemoryStore, FixedClock> {
        let clock = FixedClock(Local.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap());
        let mut progress =
            Progression::with_clock(MemoryStore::new(), clock, ProgressionSettings::default());
        progress.load();
        progress
    }

    fn type_keys<S: KeyValueStore, C: Clock>(
        eggs: &mut EasterEggs,
        keys: &[&str],
        progress: &mut Progression<S, C>,
    ) -> Vec<EggEffect> {
        keys.iter()
            .flat_map(|k| eggs.on_key(k, false, progress))
            .collect()
    }

    #[test]
    fn test_konami_unlocks_once_and_bursts_every_time() {
        let mut eggs = EasterEggs::new();
        let mut progress = progress();

        let first = type_keys(&mut eggs, &KONAMI_SEQUENCE, &mut progress);
        let second = type_keys(&mut eggs, &KONAMI_SEQUENCE, &mut progress);

        assert!(first.contains(&EggEffect::KonamiBurst));
        assert!(second.contains(&EggEffect::KonamiBurst));
        assert!(progress.is_unlocked("konamiMaster"));
        assert_eq!(progress.xp(), 200);
    }

    #[test]
    fn test_konami_counts_inside_form_fields() {
        let mut eggs = EasterEggs::new();
        let mut progress = progress();

        let effects: Vec<EggEffect> = KONAMI_SEQUENCE
            .iter()
            .flat_map(|k| eggs.on_key(k, true, &mut progress))
            .collect();

        assert!(effects.contains(&EggEffect::KonamiBurst));
    }

    #[test]
    fn test_hola_and_hello_toggle_language() {
        let mut eggs = EasterEggs::new();
        let mut progress = progress();

        let effects = type_keys(&mut eggs, &["h", "o", "l", "a"], &mut progress);
        assert!(eggs.is_spanish());
        assert!(effects.contains(&EggEffect::SecretMessage(SPANISH_ON_MESSAGE)));
        assert!(progress.is_unlocked("secretHunter"));

        type_keys(&mut eggs, &["h", "e", "l", "l", "o"], &mut progress);
        assert!(!eggs.is_spanish());
    }

    #[test]
    fn test_xyzzy_awards_xp_each_time() {
        let mut eggs = EasterEggs::new();
        let mut progress = progress();

        type_keys(&mut eggs, &["x", "y", "z", "z", "y"], &mut progress);
        type_keys(&mut eggs, &["x", "y", "z", "z", "y"], &mut progress);

        assert_eq!(progress.xp(), 100);
    }

    #[test]
    fn test_words_in_form_fields_are_ignored() {
        let mut eggs = EasterEggs::new();
        let mut progress = progress();

        for key in ["x", "y", "z", "z", "y"] {
            eggs.on_key(key, true, &mut progress);
        }

        assert_eq!(progress.xp(), 0);
    }

    #[test]
    fn test_tenth_sprite_click_unlocks_secret_hunter() {
        let mut eggs = EasterEggs::new();
        let mut progress = progress();

        for _ in 0..9 {
            eggs.on_sprite_click(&mut progress);
        }
        assert!(!progress.is_unlocked("secretHunter"));

        assert_eq!(
            eggs.on_sprite_click(&mut progress),
            EggEffect::Sprite(SpriteReaction::Flip(FLIP_LINE))
        );
        assert!(progress.is_unlocked("secretHunter"));
    }

    #[test]
    fn test_devtools_unlock_code_whisperer() {
        let mut eggs = EasterEggs::new();
        let mut progress = progress();
        let outer = WindowSize::new(1400, 900);
        let inner = WindowSize::new(1000, 900);

        assert!(eggs.check_devtools(outer, inner, &mut progress));
        assert!(!eggs.check_devtools(outer, inner, &mut progress));
        assert!(progress.is_unlocked("codeWhisperer"));
    }
}
