//! Achievement checking logic
//!
//! Pure functions returning the achievements a situation earns. Ids already
//! in `unlocked` are never returned.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::definitions::AchievementId;

fn is_locked(id: AchievementId, unlocked: &BTreeSet<String>) -> bool {
    !unlocked.contains(id.as_str())
}

/// 10 PM to 4 AM, wrapping midnight
pub fn is_night_owl_hour(hour: u32) -> bool {
    hour >= 22 || hour < 4
}

/// 5 AM to 8 AM
pub fn is_early_bird_hour(hour: u32) -> bool {
    (5..8).contains(&hour)
}

/// Check time-of-day achievements for a visit at `hour` (0-23)
pub fn check_time_achievements(hour: u32, unlocked: &BTreeSet<String>) -> Vec<AchievementId> {
    let mut newly_unlocked = Vec::new();

    if is_night_owl_hour(hour) && is_locked(AchievementId::NightOwl, unlocked) {
        newly_unlocked.push(AchievementId::NightOwl);
    }

    if is_early_bird_hour(hour) && is_locked(AchievementId::EarlyBird, unlocked) {
        newly_unlocked.push(AchievementId::EarlyBird);
    }

    newly_unlocked
}

/// Return visitor: the last recorded visit fell on another calendar day
pub fn check_return_visit(
    last_visit_day: Option<NaiveDate>,
    today: NaiveDate,
    unlocked: &BTreeSet<String>,
) -> Option<AchievementId> {
    let last_day = last_visit_day?;
    (last_day != today && is_locked(AchievementId::ReturnVisitor, unlocked))
        .then_some(AchievementId::ReturnVisitor)
}

/// `reward` once every id of `required` is in `seen`.
/// An empty `required` list never completes.
pub fn check_collection_achievement(
    seen: &BTreeSet<String>,
    required: &[String],
    reward: AchievementId,
    unlocked: &BTreeSet<String>,
) -> Option<AchievementId> {
    let complete = !required.is_empty() && required.iter().all(|id| seen.contains(id));
    (complete && is_locked(reward, unlocked)).then_some(reward)
}

/// Check achievements earned by entering section `section_id`,
/// after it was added to `visited`
pub fn check_section_achievements(
    section_id: &str,
    visited: &BTreeSet<String>,
    all_sections: &[String],
    unlocked: &BTreeSet<String>,
) -> Vec<AchievementId> {
    let mut newly_unlocked = Vec::new();

    if let Some(id) =
        check_collection_achievement(visited, all_sections, AchievementId::Completionist, unlocked)
    {
        newly_unlocked.push(id);
    }

    if is_locked(AchievementId::FirstSteps, unlocked) {
        newly_unlocked.push(AchievementId::FirstSteps);
    }

    if section_id == "experience" && is_locked(AchievementId::Historian, unlocked) {
        newly_unlocked.push(AchievementId::Historian);
    }

    newly_unlocked
}
