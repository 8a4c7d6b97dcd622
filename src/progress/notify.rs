//! Presentation hooks for progression changes
//!
//! The engine calls these at the points where the page shows a toast, a
//! flash or a floating "+XP". Rendering is someone else's job.

use super::achievements::Achievement;

/// A toast notification request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub icon: String,
    pub kind: ToastKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Default,
    Achievement,
}

/// HUD values after a change: XP bar, level badge, achievement counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudSnapshot {
    pub xp: u32,
    pub level: u32,
    pub progress_pct: u8,
    pub achievements_unlocked: usize,
}

pub trait Notifier {
    /// Floating "+N XP"
    fn xp_gained(&mut self, _amount: u32, _reason: &str) {}

    /// Full-screen flash on level up
    fn flash(&mut self) {}

    fn toast(&mut self, _toast: Toast) {}

    fn hud(&mut self, _snapshot: HudSnapshot) {}
}

/// Ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {}

pub(super) fn level_up_toast(level: u32, name: &str) -> Toast {
    Toast {
        title: "LEVEL UP!".to_string(),
        message: format!("You are now Level {}: {}", level, name),
        icon: "⬆️".to_string(),
        kind: ToastKind::Default,
    }
}

pub(super) fn achievement_toast(achievement: &Achievement) -> Toast {
    Toast {
        title: "Achievement Unlocked!".to_string(),
        message: achievement.name.to_string(),
        icon: achievement.icon.to_string(),
        kind: ToastKind::Achievement,
    }
}
