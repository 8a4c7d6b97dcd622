//! Transient speech bubbles
//!
//! A bubble is shown, fades out once its duration elapses, and is removed
//! when the fade is over. Bubbles share the typewriter's timers but never
//! touch its queue.

use super::scheduler::{Scheduler, TimerId};
use crate::config::DialogueSettings;

/// Distance between the anchor's top edge and the bubble
pub const BUBBLE_OFFSET: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BubbleId(u64);

/// Bounding box of the element a bubble points at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Where the bubble's bottom centre goes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubblePlacement {
    pub x: f32,
    pub y: f32,
}

impl AnchorRect {
    /// Centred horizontally, [`BUBBLE_OFFSET`] above the top edge
    pub fn placement(&self) -> BubblePlacement {
        BubblePlacement {
            x: self.left + self.width / 2.0,
            y: self.top - BUBBLE_OFFSET,
        }
    }
}

/// Draws bubbles
pub trait BubbleLayer {
    fn show(&mut self, id: BubbleId, text: &str, placement: Option<BubblePlacement>);
    fn fade(&mut self, id: BubbleId);
    fn remove(&mut self, id: BubbleId);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Showing,
    Fading,
}

#[derive(Debug)]
struct Live {
    id: BubbleId,
    timer: TimerId,
    stage: Stage,
}

pub struct SpeechBubbles<L: BubbleLayer> {
    layer: L,
    duration_ms: u64,
    fade_ms: u64,
    next_id: u64,
    live: Vec<Live>,
}

impl<L: BubbleLayer> SpeechBubbles<L> {
    pub fn new(layer: L, settings: &DialogueSettings) -> Self {
        Self {
            layer,
            duration_ms: settings.bubble_duration_ms,
            fade_ms: settings.bubble_fade_ms,
            next_id: 0,
            live: Vec::new(),
        }
    }

    /// Show `text` near `anchor` for `duration_ms` (the configured duration
    /// when `None`)
    pub fn show(
        &mut self,
        scheduler: &mut impl Scheduler,
        text: &str,
        anchor: Option<AnchorRect>,
        duration_ms: Option<u64>,
    ) -> BubbleId {
        self.next_id += 1;
        let id = BubbleId(self.next_id);

        self.layer
            .show(id, text, anchor.as_ref().map(AnchorRect::placement));
        let timer = scheduler.schedule(duration_ms.unwrap_or(self.duration_ms));
        self.live.push(Live {
            id,
            timer,
            stage: Stage::Showing,
        });
        id
    }

    /// Deliver a fired timer. Returns false when it is not a bubble timer.
    pub fn on_timer(&mut self, scheduler: &mut impl Scheduler, timer: TimerId) -> bool {
        let Some(index) = self.live.iter().position(|b| b.timer == timer) else {
            return false;
        };

        let bubble = &mut self.live[index];
        match bubble.stage {
            Stage::Showing => {
                self.layer.fade(bubble.id);
                bubble.stage = Stage::Fading;
                bubble.timer = scheduler.schedule(self.fade_ms);
            }
            Stage::Fading => {
                self.layer.remove(bubble.id);
                self.live.remove(index);
            }
        }
        true
    }

    /// Bubbles on screen, fading ones included
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn layer(&self) -> &L {
        &self.layer
    }

    pub fn layer_mut(&mut self) -> &mut L {
        &mut self.layer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::TimerQueue;

    #[derive(Default)]
    struct Layer(Vec<String>);

    impl BubbleLayer for Layer {
        fn show(&mut self, id: BubbleId, text: &str, placement: Option<BubblePlacement>) {
            let at = placement.map_or("-".to_string(), |p| format!("{},{}", p.x, p.y));
            self.0.push(format!("show {} {} @{}", id.0, text, at));
        }

        fn fade(&mut self, id: BubbleId) {
            self.0.push(format!("fade {}", id.0));
        }

        fn remove(&mut self, id: BubbleId) {
            self.0.push(format!("remove {}", id.0));
        }
    }

    #[test]
    fn test_placement_centres_above_anchor() {
        let anchor = AnchorRect {
            left: 100.0,
            top: 200.0,
            width: 40.0,
            height: 60.0,
        };
        assert_eq!(anchor.placement(), BubblePlacement { x: 120.0, y: 180.0 });
    }

    #[test]
    fn test_bubble_fades_then_goes() {
        let mut timers = TimerQueue::new();
        let mut bubbles = SpeechBubbles::new(Layer::default(), &DialogueSettings::default());

        bubbles.show(&mut timers, "Hey!", None, None);
        assert_eq!(timers.next_due(), Some(3000));

        let t = timers.pop_next().unwrap();
        assert!(bubbles.on_timer(&mut timers, t));
        assert_eq!(timers.next_due(), Some(3300));
        assert_eq!(bubbles.live_count(), 1);

        let t = timers.pop_next().unwrap();
        assert!(bubbles.on_timer(&mut timers, t));
        assert_eq!(bubbles.live_count(), 0);
        assert_eq!(bubbles.layer().0, vec!["show 1 Hey! @-", "fade 1", "remove 1"]);
    }

    #[test]
    fn test_custom_duration_and_foreign_timers() {
        let mut timers = TimerQueue::new();
        let mut bubbles = SpeechBubbles::new(Layer::default(), &DialogueSettings::default());
        let foreign = timers.schedule(5);

        bubbles.show(&mut timers, "Wave", None, Some(500));

        assert!(!bubbles.on_timer(&mut timers, foreign));
        assert_eq!(timers.next_due(), Some(5));
        timers.pop_next();
        assert_eq!(timers.next_due(), Some(500));
    }
}
