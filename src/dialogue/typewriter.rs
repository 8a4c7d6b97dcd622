//! Character-by-character text reveal
//!
//! A [`Typewriter`] reveals one line at a time: `Idle -> Revealing`, then
//! `Completed` when the last unit's delay has elapsed or `Skipped` when the
//! reader skipped ahead. Each revealed unit schedules exactly one timer;
//! skipping cancels it, so no continuation of a skipped line ever runs.

use std::collections::VecDeque;

use tracing::debug;

use super::markup::{self, Segment};
use super::scheduler::{Scheduler, TimerId};
use super::surface::DisplaySurface;
use crate::config::DialogueSettings;

/// Delay rules between revealed units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub char_delay_ms: u64,
    pub sentence_pause_factor: u64,
    pub clause_pause_factor: u64,
    pub cursor_linger_ms: u64,
}

impl Pacing {
    /// Delay before the unit after `ch`
    pub fn delay_after(&self, ch: char) -> u64 {
        match ch {
            '.' | '!' | '?' => self.char_delay_ms * self.sentence_pause_factor,
            ',' => self.char_delay_ms * self.clause_pause_factor,
            _ => self.char_delay_ms,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::from(&DialogueSettings::default())
    }
}

impl From<&DialogueSettings> for Pacing {
    fn from(settings: &DialogueSettings) -> Self {
        Self {
            char_delay_ms: settings.char_delay_ms,
            sentence_pause_factor: settings.sentence_pause_factor,
            clause_pause_factor: settings.clause_pause_factor,
            cursor_linger_ms: settings.cursor_linger_ms,
        }
    }
}

/// Public view of the reveal state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Idle,
    Revealing,
    Completed,
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Revealing { timer: TimerId },
    Completed,
    Skipped,
}

/// What [`Typewriter::advance`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The line being revealed was completed at once
    Skipped,
    /// The next queued line started
    Next,
    /// Nothing left; the completion callback ran if one was set
    Finished,
}

type OnComplete = Box<dyn FnOnce()>;

pub struct Typewriter<D: DisplaySurface, S: Scheduler> {
    surface: D,
    scheduler: S,
    pacing: Pacing,

    full_text: String,
    segments: Vec<Segment>,
    total_units: usize,
    cursor_position: usize,
    segment_index: usize,
    /// Bytes of the current segment's text already shown
    segment_offset: usize,
    phase: Phase,
    cursor_timer: Option<TimerId>,

    queue: VecDeque<String>,
    on_complete: Option<OnComplete>,
}

impl<D: DisplaySurface, S: Scheduler> Typewriter<D, S> {
    pub fn new(surface: D, scheduler: S, pacing: Pacing) -> Self {
        Self {
            surface,
            scheduler,
            pacing,
            full_text: String::new(),
            segments: Vec::new(),
            total_units: 0,
            cursor_position: 0,
            segment_index: 0,
            segment_offset: 0,
            phase: Phase::Idle,
            cursor_timer: None,
            queue: VecDeque::new(),
            on_complete: None,
        }
    }

    // ========================================
    // ACCESSORS
    // ========================================

    pub fn state(&self) -> RevealState {
        match self.phase {
            Phase::Idle => RevealState::Idle,
            Phase::Revealing { .. } => RevealState::Revealing,
            Phase::Completed => RevealState::Completed,
            Phase::Skipped => RevealState::Skipped,
        }
    }

    pub fn is_revealing(&self) -> bool {
        matches!(self.phase, Phase::Revealing { .. })
    }

    /// Source text of the current line, markup included
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    /// Visible units revealed so far
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Visible units in the current line
    pub fn total_units(&self) -> usize {
        self.total_units
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    // ========================================
    // CONTROL
    // ========================================

    /// Reveal `text`. With lines already queued it waits its turn, otherwise
    /// it replaces whatever is on the surface now.
    pub fn reveal(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.queue.is_empty() {
            self.begin(text);
        } else {
            self.queue.push_back(text);
        }
    }

    /// Replace the queue with a dialogue sequence and show its first line.
    /// `on_complete` runs when the reader advances past the last line.
    pub fn start<I, T>(&mut self, texts: I, on_complete: impl FnOnce() + 'static)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.queue = texts.into_iter().map(Into::into).collect();
        self.on_complete = Some(Box::new(on_complete));
        self.show_next();
    }

    /// Complete the current line at once. Returns false when nothing is
    /// being revealed.
    pub fn skip(&mut self) -> bool {
        let Phase::Revealing { timer } = self.phase else {
            return false;
        };

        self.scheduler.cancel(timer);
        self.cancel_cursor_timer();

        self.surface.clear();
        self.surface.set_cursor_visible(false);
        for segment in &self.segments {
            render_segment(&mut self.surface, segment);
        }

        self.cursor_position = self.total_units;
        self.segment_index = self.segments.len();
        self.segment_offset = 0;
        self.phase = Phase::Skipped;
        debug!("Skipped dialogue line ({} units)", self.total_units);
        true
    }

    /// The reader's single "continue" action
    pub fn advance(&mut self) -> Advance {
        if self.skip() {
            return Advance::Skipped;
        }
        self.show_next()
    }

    /// Whether a key press should be routed to [`Typewriter::advance`]
    pub fn wants_advance_key(&self, key: &str, in_form_field: bool) -> bool {
        matches!(key, "Enter" | " ")
            && !in_form_field
            && (self.is_revealing() || !self.queue.is_empty())
    }

    /// Deliver a fired timer. Returns false for timers this typewriter does
    /// not own, including stale ones from a line that was skipped.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        match self.phase {
            Phase::Revealing { timer } if timer == id => {
                self.step();
                true
            }
            _ if self.cursor_timer == Some(id) => {
                self.cursor_timer = None;
                self.surface.set_cursor_visible(false);
                true
            }
            _ => false,
        }
    }

    // ========================================
    // INTERNALS
    // ========================================

    fn show_next(&mut self) -> Advance {
        if let Some(text) = self.queue.pop_front() {
            self.begin(text);
            return Advance::Next;
        }

        if let Some(on_complete) = self.on_complete.take() {
            on_complete();
        }
        Advance::Finished
    }

    fn begin(&mut self, text: String) {
        if let Phase::Revealing { timer } = self.phase {
            self.scheduler.cancel(timer);
        }
        self.cancel_cursor_timer();

        self.segments = markup::segments(&text);
        self.total_units = self.segments.iter().map(Segment::unit_count).sum();
        self.full_text = text;
        self.cursor_position = 0;
        self.segment_index = 0;
        self.segment_offset = 0;

        self.surface.clear();
        self.surface.set_cursor_visible(true);
        self.step();
    }

    /// Reveal the next unit and schedule the one after it, or finish
    fn step(&mut self) {
        let Some(segment) = self.segments.get(self.segment_index) else {
            self.finish();
            return;
        };
        let Some(ch) = segment.text[self.segment_offset..].chars().next() else {
            self.finish();
            return;
        };

        let mut buf = [0u8; 4];
        let unit = ch.encode_utf8(&mut buf);
        match &segment.style {
            Some(style) => {
                if self.segment_offset == 0 {
                    self.surface.open_span(style);
                }
                self.surface.append_span_text(unit);
            }
            None => self.surface.append_text(unit),
        }

        self.cursor_position += 1;
        self.segment_offset += ch.len_utf8();
        if self.segment_offset == segment.text.len() {
            if segment.is_styled() {
                self.surface.close_span();
            }
            self.segment_index += 1;
            self.segment_offset = 0;
        }

        let timer = self.scheduler.schedule(self.pacing.delay_after(ch));
        self.phase = Phase::Revealing { timer };
    }

    fn finish(&mut self) {
        self.phase = Phase::Completed;
        self.cursor_timer = Some(self.scheduler.schedule(self.pacing.cursor_linger_ms));
    }

    fn cancel_cursor_timer(&mut self) {
        if let Some(timer) = self.cursor_timer.take() {
            self.scheduler.cancel(timer);
        }
    }
}

fn render_segment(surface: &mut impl DisplaySurface, segment: &Segment) {
    match &segment.style {
        Some(style) => {
            surface.open_span(style);
            surface.append_span_text(&segment.text);
            surface.close_span();
        }
        None => surface.append_text(&segment.text),
    }
}

impl<D: DisplaySurface, S: Scheduler> std::fmt::Debug for Typewriter<D, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typewriter")
            .field("state", &self.state())
            .field("cursor_position", &self.cursor_position)
            .field("total_units", &self.total_units)
            .field("queued", &self.queue.len())
            .finish()
    }
}
