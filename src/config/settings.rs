//! Settings configuration types

mod dialogue;
mod progression;

pub use dialogue::DialogueSettings;
pub use progression::ProgressionSettings;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Storage backend settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StorageSettings {
    /// JSON file holding the key-value store.
    /// Default: ~/.pixelfolio/storage.json
    #[serde(default)]
    pub path: Option<PathBuf>,
}
