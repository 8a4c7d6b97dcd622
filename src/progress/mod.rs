//! XP, levels and achievements
//!
//! [`Progression`] is the single owned progression state. Construct it once
//! with a [`KeyValueStore`](crate::storage::KeyValueStore), call
//! [`Progression::load`], and pass it by reference to whoever reacts to page
//! events.

pub mod achievements;
mod clock;
mod events;
mod manager;
mod notify;
mod record;

pub use achievements::{
    calculate_level, level_name, level_progress, Achievement, AchievementCategory, AchievementId,
    ACHIEVEMENTS, LEVEL_NAMES, LEVEL_THRESHOLDS,
};
pub use clock::{local_day, Clock, FixedClock, SystemClock};
pub use events::{EventBus, EventKind, ProgressEvent};
pub use manager::{AchievementStatus, Progression, ProgressError, UnlockOutcome};
pub use notify::{HudSnapshot, Notifier, NullNotifier, Toast, ToastKind};
pub use record::PersistedRecord;
