//! Progression commands: visits, examinations, XP and unlocks

use anyhow::{bail, Result};
use tracing::info;

use pixelfolio::progress::UnlockOutcome;
use pixelfolio::Config;

use super::open_progress;

pub async fn visit_command(config: &Config, section: &str) -> Result<()> {
    let mut progress = open_progress(config)?;
    if !progress.visit_section(section) {
        println!("Already visited {}.", section);
    }
    Ok(())
}

pub async fn examine_command(config: &Config, item: &str) -> Result<()> {
    let mut progress = open_progress(config)?;
    if !progress.examine_item(item) {
        println!("Already examined {}.", item);
    }
    Ok(())
}

pub async fn award_command(config: &Config, amount: u32, reason: &str) -> Result<()> {
    if amount == 0 {
        bail!("XP amount must be positive");
    }
    let mut progress = open_progress(config)?;
    progress.award_xp(amount, reason);
    Ok(())
}

pub async fn unlock_command(config: &Config, id: &str) -> Result<()> {
    let mut progress = open_progress(config)?;
    match progress.unlock(id) {
        UnlockOutcome::Unlocked => {}
        UnlockOutcome::AlreadyUnlocked => println!("Already unlocked: {}", id),
        UnlockOutcome::Unknown => bail!("Unknown achievement: {}", id),
    }
    Ok(())
}

pub async fn social_command(config: &Config) -> Result<()> {
    let mut progress = open_progress(config)?;
    progress.record_social_link();
    Ok(())
}

pub async fn link_command(config: &Config) -> Result<()> {
    let mut progress = open_progress(config)?;
    progress.record_project_link();
    Ok(())
}

pub async fn message_command(config: &Config) -> Result<()> {
    let mut progress = open_progress(config)?;
    progress.record_message_sent();
    println!("Message sent.");
    Ok(())
}

pub async fn reset_command(config: &Config) -> Result<()> {
    let mut progress = open_progress(config)?;
    progress.reset();
    info!("Progress cleared");
    println!("Progress reset. Welcome, new adventurer.");
    Ok(())
}
