//! Cancelable one-shot timers
//!
//! Components ask a [`Scheduler`] for a timer and are handed the [`TimerId`]
//! back by their owner when it fires. [`TimerQueue`] keeps timers in virtual
//! time, which drivers either step through instantly (tests) or sleep
//! between (the terminal player).

use std::collections::BTreeSet;

/// Handle of a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

pub trait Scheduler {
    /// Arrange for a timer to fire `delay_ms` from now
    fn schedule(&mut self, delay_ms: u64) -> TimerId;

    /// Cancel a pending timer. Unknown or already fired ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

impl<T: Scheduler + ?Sized> Scheduler for &mut T {
    fn schedule(&mut self, delay_ms: u64) -> TimerId {
        (**self).schedule(delay_ms)
    }

    fn cancel(&mut self, id: TimerId) {
        (**self).cancel(id)
    }
}

/// Timers ordered by due time in virtual milliseconds.
///
/// Timers due at the same instant fire in scheduling order.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now_ms: u64,
    next_id: u64,
    pending: BTreeSet<(u64, TimerId)>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Due time of the earliest pending timer
    pub fn next_due(&self) -> Option<u64> {
        self.pending.first().map(|(due, _)| *due)
    }

    /// Milliseconds until the earliest pending timer
    pub fn time_to_next(&self) -> Option<u64> {
        self.next_due().map(|due| due.saturating_sub(self.now_ms))
    }

    /// Move time to the earliest pending timer and remove it
    pub fn pop_next(&mut self) -> Option<TimerId> {
        let (due, id) = self.pending.pop_first()?;
        self.now_ms = self.now_ms.max(due);
        Some(id)
    }

    /// Remove the earliest timer due at or before `until_ms`, moving time to
    /// its due time
    pub fn pop_due(&mut self, until_ms: u64) -> Option<TimerId> {
        match self.next_due() {
            Some(due) if due <= until_ms => self.pop_next(),
            _ => None,
        }
    }

    /// Move time forward to `ms` without firing anything
    pub fn advance_to(&mut self, ms: u64) {
        self.now_ms = self.now_ms.max(ms);
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|(_, pending)| *pending == id)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, delay_ms: u64) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.pending.insert((self.now_ms.saturating_add(delay_ms), id));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|(_, pending)| *pending != id);
    }
}
