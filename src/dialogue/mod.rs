//! Typewriter dialogue and speech bubbles

mod bubble;
pub mod markup;
mod scheduler;
mod surface;
mod typewriter;

pub use bubble::{AnchorRect, BubbleId, BubbleLayer, BubblePlacement, SpeechBubbles, BUBBLE_OFFSET};
pub use markup::Segment;
pub use scheduler::{Scheduler, TimerId, TimerQueue};
pub use surface::{DisplaySurface, Node, Transcript};
pub use typewriter::{Advance, Pacing, RevealState, Typewriter};
