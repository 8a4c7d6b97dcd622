//! Progression - core gamification logic
//!
//! Owns the XP ledger, the unlocked set and the visit/examine sets, keeps the
//! level in step with XP, and rewrites the persisted record after every
//! mutation. Storage failures are logged and swallowed.

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use super::achievements::{
    calculate_level, check_collection_achievement, check_return_visit,
    check_section_achievements, check_time_achievements, level_name, level_progress, Achievement,
    AchievementId, ACHIEVEMENTS,
};
use super::clock::{local_day, Clock, SystemClock};
use super::events::{EventBus, EventKind, ProgressEvent};
use super::notify::{achievement_toast, level_up_toast, HudSnapshot, Notifier, NullNotifier};
use super::record::PersistedRecord;
use crate::config::ProgressionSettings;
use crate::storage::{KeyValueStore, StorageError};

/// Why a load or save could not use the stored record
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Stored progress is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Result of an unlock request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockOutcome {
    /// Newly unlocked by this call
    Unlocked,
    /// Was unlocked before, nothing changed
    AlreadyUnlocked,
    /// Not in the catalog, nothing changed
    Unknown,
}

impl UnlockOutcome {
    /// Whether the achievement is unlocked after the call
    pub fn is_unlocked(self) -> bool {
        matches!(self, Self::Unlocked | Self::AlreadyUnlocked)
    }
}

/// Catalog entry together with its unlock state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AchievementStatus {
    pub achievement: &'static Achievement,
    pub unlocked: bool,
}

/// The player's progression state
pub struct Progression<S: KeyValueStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
    settings: ProgressionSettings,
    notifier: Box<dyn Notifier>,
    events: EventBus,

    xp: u32,
    level: u32,
    achievements: BTreeSet<String>,
    visited_sections: BTreeSet<String>,
    examined_items: BTreeSet<String>,
    first_visit: Option<i64>,
    last_visit: Option<i64>,
}

impl<S: KeyValueStore> Progression<S, SystemClock> {
    /// Create an empty state backed by `store`, using the system clock
    pub fn new(store: S, settings: ProgressionSettings) -> Self {
        Self::with_clock(store, SystemClock, settings)
    }
}

impl<S: KeyValueStore, C: Clock> Progression<S, C> {
    /// Create an empty state. Call [`Progression::load`] to hydrate it.
    pub fn with_clock(store: S, clock: C, settings: ProgressionSettings) -> Self {
        Self {
            store,
            clock,
            settings,
            notifier: Box::new(NullNotifier),
            events: EventBus::new(),
            xp: 0,
            level: 1,
            achievements: BTreeSet::new(),
            visited_sections: BTreeSet::new(),
            examined_items: BTreeSet::new(),
            first_visit: None,
            last_visit: None,
        }
    }

    pub fn set_notifier(&mut self, notifier: impl Notifier + 'static) {
        self.notifier = Box::new(notifier);
    }

    /// Register `handler` for one event kind
    pub fn on(&mut self, kind: EventKind, handler: impl FnMut(&ProgressEvent) + 'static) {
        self.events.subscribe(kind, handler);
    }

    // ========================================
    // ACCESSORS
    // ========================================

    pub fn xp(&self) -> u32 {
        self.xp
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn level_name(&self) -> &'static str {
        level_name(self.level)
    }

    /// Percent towards the next level, 100 at max level
    pub fn level_progress(&self) -> u8 {
        level_progress(self.xp)
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.achievements.contains(id)
    }

    pub fn unlocked_achievements(&self) -> &BTreeSet<String> {
        &self.achievements
    }

    pub fn visited_sections(&self) -> &BTreeSet<String> {
        &self.visited_sections
    }

    pub fn examined_items(&self) -> &BTreeSet<String> {
        &self.examined_items
    }

    pub fn first_visit(&self) -> Option<i64> {
        self.first_visit
    }

    pub fn last_visit(&self) -> Option<i64> {
        self.last_visit
    }

    pub fn settings(&self) -> &ProgressionSettings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Every catalog entry with its unlock state, in catalog order
    pub fn achievements(&self) -> Vec<AchievementStatus> {
        ACHIEVEMENTS
            .iter()
            .map(|achievement| AchievementStatus {
                achievement,
                unlocked: self.achievements.contains(achievement.id.as_str()),
            })
            .collect()
    }

    /// Number of catalog achievements unlocked
    pub fn unlocked_count(&self) -> usize {
        ACHIEVEMENTS
            .iter()
            .filter(|a| self.achievements.contains(a.id.as_str()))
            .count()
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            xp: self.xp,
            level: self.level,
            progress_pct: self.level_progress(),
            achievements_unlocked: self.unlocked_count(),
        }
    }

    // ========================================
    // PERSISTENCE
    // ========================================

    fn read_record(&self) -> Result<Option<PersistedRecord>, ProgressError> {
        let Some(json) = self.store.get(&self.settings.storage_key)? else {
            return Ok(None);
        };
        Ok(Some(PersistedRecord::from_json(&json)?))
    }

    fn record(&self) -> PersistedRecord {
        PersistedRecord {
            xp: self.xp,
            achievements: self.achievements.iter().cloned().collect(),
            visited_sections: self.visited_sections.iter().cloned().collect(),
            examined_projects: self.examined_items.iter().cloned().collect(),
            first_visit: self.first_visit,
            last_visit: self.last_visit,
        }
    }

    fn apply_record(&mut self, record: PersistedRecord) {
        self.xp = record.xp;
        self.level = calculate_level(self.xp);
        self.achievements = record.achievements.into_iter().collect();
        self.visited_sections = record.visited_sections.into_iter().collect();
        self.examined_items = record.examined_projects.into_iter().collect();
        self.first_visit = record.first_visit;
        self.last_visit = record.last_visit;
    }

    fn reset_fields(&mut self) {
        self.xp = 0;
        self.level = 1;
        self.achievements.clear();
        self.visited_sections.clear();
        self.examined_items.clear();
        self.first_visit = Some(self.clock.now().timestamp_millis());
        self.last_visit = None;
    }

    /// Hydrate from storage, then run the on-load checks.
    ///
    /// A missing or unreadable record starts a fresh state that is written
    /// back immediately. After hydration: return visitor (last visit on
    /// another calendar day), the time-of-day achievements, and the last
    /// visit stamp.
    pub fn load(&mut self) {
        match self.read_record() {
            Ok(Some(record)) => {
                self.apply_record(record);
                debug!("Loaded progress: {} XP, level {}", self.xp, self.level);
            }
            Ok(None) => {
                info!("No stored progress, starting fresh");
                self.reset_fields();
                self.save();
            }
            Err(e) => {
                warn!("Failed to load progress, starting fresh: {}", e);
                self.reset_fields();
                self.save();
            }
        }

        let now = self.clock.now();

        let last_day = self.last_visit.and_then(local_day);
        if let Some(id) = check_return_visit(last_day, now.date_naive(), &self.achievements) {
            self.unlock_id(id);
        }

        let hour = chrono::Timelike::hour(&now);
        for id in check_time_achievements(hour, &self.achievements) {
            self.unlock_id(id);
        }

        self.last_visit = Some(now.timestamp_millis());
        self.save();
    }

    /// Write the record. Failures are logged, never returned.
    pub fn save(&mut self) {
        let result = self
            .record()
            .to_json()
            .map_err(ProgressError::from)
            .and_then(|json| {
                self.store
                    .set(&self.settings.storage_key, &json)
                    .map_err(ProgressError::from)
            });

        if let Err(e) = result {
            warn!("Failed to save progress: {}", e);
        }
    }

    /// Clear the stored record and start over as on a first visit
    pub fn reset(&mut self) {
        if let Err(e) = self.store.remove(&self.settings.storage_key) {
            warn!("Failed to clear stored progress: {}", e);
        }
        self.reset_fields();
        self.save();
        self.notifier.hud(self.hud());
        info!("Progress reset");
    }

    // ========================================
    // XP & ACHIEVEMENTS
    // ========================================

    /// Add XP, announce a level up if one happened, save, then announce the gain
    pub fn award_xp(&mut self, amount: u32, reason: &str) {
        let previous_level = self.level;
        self.xp = self.xp.saturating_add(amount);
        self.level = calculate_level(self.xp);

        self.notifier.xp_gained(amount, reason);

        if self.level > previous_level {
            let name = level_name(self.level);
            info!("Level up: {} ({})", self.level, name);
            self.notifier.flash();
            self.notifier.toast(level_up_toast(self.level, name));
            self.events.emit(&ProgressEvent::LevelUp {
                level: self.level,
                name,
            });
        }

        self.notifier.hud(self.hud());
        self.save();
        self.events.emit(&ProgressEvent::XpGained {
            amount,
            reason: reason.to_string(),
            total: self.xp,
        });
    }

    /// Unlock an achievement by its string id
    pub fn unlock(&mut self, id: &str) -> UnlockOutcome {
        if self.achievements.contains(id) {
            return UnlockOutcome::AlreadyUnlocked;
        }

        let Some(achievement) = Achievement::find(id) else {
            warn!("Unknown achievement: {}", id);
            return UnlockOutcome::Unknown;
        };

        self.unlock_achievement(achievement)
    }

    /// Unlock a catalog achievement
    pub fn unlock_id(&mut self, id: AchievementId) -> UnlockOutcome {
        if self.achievements.contains(id.as_str()) {
            return UnlockOutcome::AlreadyUnlocked;
        }
        self.unlock_achievement(Achievement::get(id))
    }

    fn unlock_achievement(&mut self, achievement: &'static Achievement) -> UnlockOutcome {
        self.achievements.insert(achievement.id.as_str().to_string());
        debug!("Unlocked achievement {}", achievement.id);

        self.notifier.toast(achievement_toast(achievement));
        self.events
            .emit(&ProgressEvent::AchievementUnlocked(achievement));

        if achievement.xp_reward > 0 {
            self.award_xp(achievement.xp_reward, achievement.name);
        }

        self.notifier.hud(self.hud());
        self.save();
        UnlockOutcome::Unlocked
    }

    // ========================================
    // SECTIONS & ITEMS
    // ========================================

    /// Record the first visit of a section. Returns false for a repeat visit.
    pub fn visit_section(&mut self, section_id: &str) -> bool {
        if !self.visited_sections.insert(section_id.to_string()) {
            return false;
        }

        self.award_xp(self.settings.section_xp, &format!("Visited {}", section_id));

        let earned = check_section_achievements(
            section_id,
            &self.visited_sections,
            &self.settings.sections,
            &self.achievements,
        );
        for id in earned {
            self.unlock_id(id);
        }

        self.save();
        true
    }

    /// Record the first examination of an item. Returns false for a repeat.
    pub fn examine_item(&mut self, item_id: &str) -> bool {
        if !self.examined_items.insert(item_id.to_string()) {
            return false;
        }

        self.award_xp(self.settings.item_xp, "Examined project");

        if let Some(id) = check_collection_achievement(
            &self.examined_items,
            &self.settings.items,
            AchievementId::Archaeologist,
            &self.achievements,
        ) {
            self.unlock_id(id);
        }

        self.save();
        true
    }

    /// A social link was followed: one-time achievement plus XP on every click
    pub fn record_social_link(&mut self) {
        self.unlock_id(AchievementId::SocialButterfly);
        self.award_xp(self.settings.social_link_xp, "Visited social link");
    }

    /// An external project link was followed. Repeats keep paying out.
    pub fn record_project_link(&mut self) {
        self.award_xp(self.settings.project_link_xp, "Explored project link");
    }

    /// The contact form was submitted
    pub fn record_message_sent(&mut self) -> UnlockOutcome {
        self.unlock_id(AchievementId::Messenger)
    }
}

impl<S: KeyValueStore, C: Clock> std::fmt::Debug for Progression<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Progression")
            .field("xp", &self.xp)
            .field("level", &self.level)
            .field("achievements", &self.achievements)
            .field("visited_sections", &self.visited_sections)
            .field("examined_items", &self.examined_items)
            .field("first_visit", &self.first_visit)
            .field("last_visit", &self.last_visit)
            .finish()
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
