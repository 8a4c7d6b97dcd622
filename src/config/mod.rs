//! Configuration loading and management

mod io;
mod settings;

pub use settings::{DialogueSettings, ProgressionSettings, StorageSettings};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Typewriter pacing and speech bubble timing
    #[serde(default)]
    pub dialogue: DialogueSettings,

    /// XP rewards, storage key and the section/item lists
    #[serde(default)]
    pub progression: ProgressionSettings,

    /// Where the file-backed key-value store lives
    #[serde(default)]
    pub storage: StorageSettings,
}

impl Config {
    /// Path of the key-value store file, falling back to ~/.pixelfolio/storage.json
    pub fn storage_path(&self) -> PathBuf {
        self.storage
            .path
            .clone()
            .unwrap_or_else(|| Self::global_config_dir().join("storage.json"))
    }
}
