//! Status command implementation

use anyhow::Result;
use owo_colors::OwoColorize;

use pixelfolio::progress::{Achievement, AchievementCategory, LEVEL_NAMES, LEVEL_THRESHOLDS};
use pixelfolio::theme::Theme;
use pixelfolio::{Config, SystemClock};

use super::open_progress;

const BAR_WIDTH: usize = 20;

/// Show level, XP and the achievement grid
pub async fn status_command(config: &Config) -> Result<()> {
    let progress = open_progress(config)?;

    let level = progress.level();
    let pct = progress.level_progress();
    let filled = usize::from(pct) * BAR_WIDTH / 100;
    let bar = format!(
        "{}{}",
        "#".repeat(filled).bright_green(),
        "-".repeat(BAR_WIDTH - filled).dimmed()
    );

    println!();
    println!(
        "  {} {} - {}",
        "LV".bright_yellow().bold(),
        level,
        progress.level_name().bold()
    );
    match LEVEL_THRESHOLDS.get(level as usize) {
        Some(next) => println!("  [{}] {} / {} XP ({}%)", bar, progress.xp(), next, pct),
        None => println!("  [{}] {} XP (max level)", bar, progress.xp()),
    }
    println!(
        "  Sections {}/{}   Items {}/{}   Scenery: {}",
        progress.visited_sections().len(),
        progress.settings().sections.len(),
        progress.examined_items().len(),
        progress.settings().items.len(),
        Theme::current(&SystemClock).as_str()
    );

    let statuses = progress.achievements();
    println!();
    println!(
        "  Achievements ({}/{}):",
        progress.unlocked_count(),
        Achievement::total_count()
    );

    for category in [
        AchievementCategory::Exploration,
        AchievementCategory::Social,
        AchievementCategory::Time,
        AchievementCategory::Secret,
    ] {
        println!();
        println!("  {}", category.label().bright_cyan());
        for status in statuses.iter().filter(|s| s.achievement.category == category) {
            let a = status.achievement;
            if status.unlocked {
                println!(
                    "    {} {:<18} {} {}",
                    a.icon,
                    a.name.bold(),
                    a.description,
                    format!("+{}", a.xp_reward).bright_green()
                );
            } else {
                println!(
                    "    {} {:<18} {}",
                    "🔒",
                    a.name.dimmed(),
                    format!("+{}", a.xp_reward).dimmed()
                );
            }
        }
    }

    if level as usize == LEVEL_NAMES.len() {
        println!();
        println!("  {}", "Legendary status reached.".bright_yellow());
    }
    println!();

    Ok(())
}
