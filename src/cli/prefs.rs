//! Prefs command implementation

use anyhow::{Context, Result};
use clap::ValueEnum;

use pixelfolio::preferences::{Preference, Preferences};
use pixelfolio::{Config, FileStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    fn as_bool(self) -> bool {
        matches!(self, Self::On)
    }
}

/// Show preferences, changing the ones given first
pub async fn prefs_command(
    config: &Config,
    sound: Option<Toggle>,
    motion: Option<Toggle>,
    companion: Option<Toggle>,
) -> Result<()> {
    let path = config.storage_path();
    let mut store = FileStore::open_or_empty(&path)
        .with_context(|| format!("Failed to open store: {}", path.display()))?;
    let mut prefs = Preferences::load(&store, false);

    for (pref, toggle) in [
        (Preference::Sound, sound),
        (Preference::ReduceMotion, motion),
        (Preference::Companion, companion),
    ] {
        if let Some(toggle) = toggle {
            prefs
                .set(&mut store, pref, toggle.as_bool())
                .with_context(|| format!("Failed to save {} preference", pref.label()))?;
        }
    }

    for pref in Preference::ALL {
        println!(
            "  {:<15} {}",
            pref.label(),
            if prefs.get(pref) { "on" } else { "off" }
        );
    }

    Ok(())
}
