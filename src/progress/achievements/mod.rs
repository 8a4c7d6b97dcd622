//! Achievements, XP and levels
//!
//! The catalog and level tables are compile-time data; the checker functions
//! decide which achievements a state change earns without touching state.

mod checker;
mod definitions;
mod levels;

pub use checker::{
    check_collection_achievement, check_return_visit, check_section_achievements,
    check_time_achievements, is_early_bird_hour, is_night_owl_hour,
};
pub use definitions::{Achievement, AchievementCategory, AchievementId, ACHIEVEMENTS};
pub use levels::{calculate_level, level_name, level_progress, LEVEL_NAMES, LEVEL_THRESHOLDS};
