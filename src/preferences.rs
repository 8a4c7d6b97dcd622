//! Page preferences persisted next to the progression record
//!
//! Each toggle is stored as `"true"`/`"false"` under its own key.

use tracing::warn;

use crate::storage::{KeyValueStore, StorageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    Sound,
    ReduceMotion,
    Companion,
}

impl Preference {
    pub const ALL: [Preference; 3] = [Self::Sound, Self::ReduceMotion, Self::Companion];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Sound => "portfolio_sound",
            Self::ReduceMotion => "portfolio_reduce_motion",
            Self::Companion => "portfolio_companion",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sound => "sound",
            Self::ReduceMotion => "reduced motion",
            Self::Companion => "companion",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub sound: bool,
    pub reduce_motion: bool,
    pub companion: bool,
}

impl Preferences {
    /// Read all toggles. Sound is off unless stored as on, reduced motion
    /// follows `system_reduces_motion` until set, the companion shows unless
    /// stored as off.
    pub fn load(store: &impl KeyValueStore, system_reduces_motion: bool) -> Self {
        let read = |pref: Preference| match store.get(pref.key()) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read {} preference: {}", pref.label(), e);
                None
            }
        };

        let reduce_motion = match read(Preference::ReduceMotion).as_deref() {
            Some(value) => value == "true",
            None => system_reduces_motion,
        };

        Self {
            sound: read(Preference::Sound).as_deref() == Some("true"),
            reduce_motion,
            companion: read(Preference::Companion).as_deref() != Some("false"),
        }
    }

    pub fn get(&self, pref: Preference) -> bool {
        match pref {
            Preference::Sound => self.sound,
            Preference::ReduceMotion => self.reduce_motion,
            Preference::Companion => self.companion,
        }
    }

    /// Change one toggle and persist it
    pub fn set(
        &mut self,
        store: &mut impl KeyValueStore,
        pref: Preference,
        value: bool,
    ) -> Result<(), StorageError> {
        match pref {
            Preference::Sound => self.sound = value,
            Preference::ReduceMotion => self.reduce_motion = value,
            Preference::Companion => self.companion = value,
        }
        store.set(pref.key(), if value { "true" } else { "false" })
    }

    /// Flip one toggle and persist it. Returns the new value.
    pub fn toggle(&mut self, store: &mut impl KeyValueStore, pref: Preference) -> bool {
        let value = !self.get(pref);
        if let Err(e) = self.set(store, pref, value) {
            warn!("Failed to save {} preference: {}", pref.label(), e);
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_defaults_when_unset() {
        let store = MemoryStore::new();
        let prefs = Preferences::load(&store, false);
        assert!(!prefs.sound);
        assert!(!prefs.reduce_motion);
        assert!(prefs.companion);

        assert!(Preferences::load(&store, true).reduce_motion);
    }

    #[test]
    fn test_stored_values_win() {
        let mut store = MemoryStore::new();
        store.set("portfolio_sound", "true").unwrap();
        store.set("portfolio_reduce_motion", "false").unwrap();
        store.set("portfolio_companion", "false").unwrap();

        let prefs = Preferences::load(&store, true);
        assert!(prefs.sound);
        assert!(!prefs.reduce_motion);
        assert!(!prefs.companion);
    }

    #[test]
    fn test_toggle_persists() {
        let mut store = MemoryStore::new();
        let mut prefs = Preferences::load(&store, false);

        assert!(!prefs.toggle(&mut store, Preference::Companion));
        assert!(prefs.toggle(&mut store, Preference::Sound));

        assert_eq!(
            store.get("portfolio_companion").unwrap().as_deref(),
            Some("false")
        );
        assert_eq!(Preferences::load(&store, false), prefs);
    }
}
