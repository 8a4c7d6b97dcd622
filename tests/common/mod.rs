//! Shared test utilities for progression and dialogue integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use chrono::{Local, TimeZone};
use pixelfolio::config::ProgressionSettings;
use pixelfolio::progress::{EventKind, FixedClock, Notifier, ProgressEvent, Toast};
use pixelfolio::{FileStore, KeyValueStore, Progression};

pub type Log = Rc<RefCell<Vec<String>>>;

/// A fixed local time on 2026-06-10
pub fn clock_at(hour: u32) -> FixedClock {
    FixedClock(
        Local
            .with_ymd_and_hms(2026, 6, 10, hour, 0, 0)
            .single()
            .expect("valid local time"),
    )
}

/// Progression on a file store, loaded at noon
pub fn file_progress(path: &Path) -> Progression<FileStore, FixedClock> {
    let store = FileStore::open(path).expect("Failed to open store");
    let mut progress = Progression::with_clock(store, clock_at(12), ProgressionSettings::default());
    progress.load();
    progress
}

/// Subscribe to every event kind, logging one line per event
pub fn record_events<S: KeyValueStore, C: pixelfolio::Clock>(
    progress: &mut Progression<S, C>,
) -> Log {
    let log: Log = Rc::default();
    for kind in [
        EventKind::XpGained,
        EventKind::LevelUp,
        EventKind::AchievementUnlocked,
    ] {
        let log = Rc::clone(&log);
        progress.on(kind, move |event| {
            let line = match event {
                ProgressEvent::XpGained { amount, reason, .. } => {
                    format!("xpGained {} {}", amount, reason)
                }
                ProgressEvent::LevelUp { level, name } => format!("levelUp {} {}", level, name),
                ProgressEvent::AchievementUnlocked(a) => format!("achievementUnlocked {}", a.id),
            };
            log.borrow_mut().push(line);
        });
    }
    log
}

/// Notifier that keeps toast titles and messages
#[derive(Default)]
pub struct ToastLog(pub Log);

impl Notifier for ToastLog {
    fn toast(&mut self, toast: Toast) {
        self.0
            .borrow_mut()
            .push(format!("{}: {}", toast.title, toast.message));
    }
}
