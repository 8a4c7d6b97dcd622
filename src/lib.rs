//! Pixelfolio - the game layer of a scroll-driven portfolio
//!
//! Two independent engines sit underneath the page:
//!
//! 1. **Dialogue**: a typewriter that reveals text one character at a time,
//!    keeps inline `<tag>..</tag>` emphasis, paces on punctuation and can be
//!    skipped. Speech bubbles hang off the same timer primitive.
//!
//! 2. **Progress**: an XP ledger with derived levels, a fixed achievement
//!    catalog, section/item tracking and a JSON record in a key-value store.
//!
//! Everything that touches the outside world (display, timers, storage,
//! notifications, wall clock) is a trait, so the engines can be driven by a
//! browser shell, the bundled terminal binary, or tests.

pub mod config;
pub mod dialogue;
pub mod easter_eggs;
pub mod navigation;
pub mod preferences;
pub mod progress;
pub mod storage;
pub mod theme;

pub use config::Config;
pub use dialogue::{Scheduler, TimerId, TimerQueue, Typewriter};
pub use progress::{Clock, Progression, SystemClock};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
