//! CLI command implementations

pub mod keys;
pub mod prefs;
pub mod progress;
pub mod say;
pub mod status;
pub mod terminal;

use anyhow::{Context, Result};

use pixelfolio::{Config, FileStore, Progression};

/// Open the file store and load progression, reporting to the terminal
pub fn open_progress(config: &Config) -> Result<Progression<FileStore>> {
    let path = config.storage_path();
    let store = FileStore::open_or_empty(&path)
        .with_context(|| format!("Failed to open store: {}", path.display()))?;

    let mut progress = Progression::new(store, config.progression.clone());
    progress.set_notifier(terminal::TerminalNotifier);
    progress.load();
    Ok(progress)
}
