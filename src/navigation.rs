//! Section navigation and page progress

use tracing::debug;

use crate::progress::{Clock, Progression};
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    First,
    Last,
    /// Zero-based section index
    Nth(usize),
}

impl NavCommand {
    /// Keyboard mapping: arrows and W/S step, Home/End jump, digits pick a
    /// section. Keys typed into form fields never navigate.
    pub fn from_key(key: &str, in_form_field: bool) -> Option<Self> {
        if in_form_field {
            return None;
        }

        match key {
            "ArrowDown" | "s" | "S" => Some(Self::Next),
            "ArrowUp" | "w" | "W" => Some(Self::Previous),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            _ => {
                let digit = key.parse::<usize>().ok().filter(|d| (1..=9).contains(d))?;
                Some(Self::Nth(digit - 1))
            }
        }
    }
}

/// Tracks the section in view
#[derive(Debug, Clone)]
pub struct Navigator {
    sections: Vec<String>,
    current: usize,
}

impl Navigator {
    /// Starts on the first section
    pub fn new(sections: Vec<String>) -> Self {
        Self {
            sections,
            current: 0,
        }
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn current(&self) -> Option<&str> {
        self.sections.get(self.current).map(String::as_str)
    }

    /// Section a command scrolls to, clamped to the list
    pub fn target(&self, command: NavCommand) -> Option<&str> {
        let last = self.sections.len().checked_sub(1)?;
        let index = match command {
            NavCommand::Next => (self.current + 1).min(last),
            NavCommand::Previous => self.current.saturating_sub(1),
            NavCommand::First => 0,
            NavCommand::Last => last,
            NavCommand::Nth(n) if n <= last => n,
            NavCommand::Nth(_) => return None,
        };
        self.sections.get(index).map(String::as_str)
    }

    /// A section scrolled into view. Counts as a visit only when it differs
    /// from the current one. Returns true when the current section changed.
    pub fn on_section_enter<S: KeyValueStore, C: Clock>(
        &mut self,
        section_id: &str,
        progress: &mut Progression<S, C>,
    ) -> bool {
        if self.current() == Some(section_id) {
            return false;
        }

        if let Some(index) = self.sections.iter().position(|s| s == section_id) {
            self.current = index;
        }
        debug!("Entered section {}", section_id);
        progress.visit_section(section_id);
        true
    }
}

/// Percent of the page scrolled, 0 when nothing can scroll
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> u8 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0;
    }
    ((scroll_top / scrollable) * 100.0).round().clamp(0.0, 100.0) as u8
}
