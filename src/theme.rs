//! Day/night scenery

use chrono::Timelike;

use crate::progress::Clock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Day,
    Night,
}

impl Theme {
    /// Night from 8 PM until 6 AM
    pub fn for_hour(hour: u32) -> Self {
        if hour >= 20 || hour < 6 {
            Self::Night
        } else {
            Self::Day
        }
    }

    pub fn current(clock: &impl Clock) -> Self {
        Self::for_hour(clock.now().hour())
    }

    pub fn is_night(&self) -> bool {
        matches!(self, Self::Night)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};

    use super::*;
    use crate::progress::FixedClock;

    #[test]
    fn test_night_window_wraps_midnight() {
        assert_eq!(Theme::for_hour(19), Theme::Day);
        assert_eq!(Theme::for_hour(20), Theme::Night);
        assert_eq!(Theme::for_hour(0), Theme::Night);
        assert_eq!(Theme::for_hour(5), Theme::Night);
        assert_eq!(Theme::for_hour(6), Theme::Day);
    }

    #[test]
    fn test_current_uses_clock() {
        let clock = FixedClock(Local.with_ymd_and_hms(2026, 1, 5, 22, 30, 0).unwrap());
        assert!(Theme::current(&clock).is_night());
    }
}
