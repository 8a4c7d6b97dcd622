//! Typed publish/subscribe for progression events
//!
//! Handlers run synchronously at emission, in registration order, and only
//! for the kind they subscribed to. There is no unsubscribe.

use super::achievements::Achievement;

/// The closed set of event kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    XpGained,
    LevelUp,
    AchievementUnlocked,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::XpGained => "xpGained",
            Self::LevelUp => "levelUp",
            Self::AchievementUnlocked => "achievementUnlocked",
        }
    }
}

/// Events that can happen while progressing
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    XpGained {
        amount: u32,
        reason: String,
        total: u32,
    },
    LevelUp {
        level: u32,
        name: &'static str,
    },
    AchievementUnlocked(&'static Achievement),
}

impl ProgressEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::XpGained { .. } => EventKind::XpGained,
            Self::LevelUp { .. } => EventKind::LevelUp,
            Self::AchievementUnlocked(_) => EventKind::AchievementUnlocked,
        }
    }
}

type Handler = Box<dyn FnMut(&ProgressEvent)>;

#[derive(Default)]
pub struct EventBus {
    handlers: Vec<(EventKind, Handler)>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, kind: EventKind, handler: impl FnMut(&ProgressEvent) + 'static) {
        self.handlers.push((kind, Box::new(handler)));
    }

    pub fn emit(&mut self, event: &ProgressEvent) {
        let kind = event.kind();
        for (_, handler) in self.handlers.iter_mut().filter(|(k, _)| *k == kind) {
            handler(event);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
