//! Developer tools detection
//!
//! Docked developer tools shrink the inner window. A gap between outer and
//! inner size beyond the threshold counts as "open".

/// Pixels of outer/inner difference treated as docked tools
pub const DEVTOOLS_THRESHOLD: u32 = 160;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Fires once, the first time the tools look open
#[derive(Debug, Clone, Default)]
pub struct DevtoolsWatch {
    detected: bool,
}

impl DevtoolsWatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn detected(&self) -> bool {
        self.detected
    }

    /// Run one poll. Returns true only on the first detection.
    pub fn check(&mut self, outer: WindowSize, inner: WindowSize) -> bool {
        if self.detected || !looks_open(outer, inner) {
            return false;
        }
        self.detected = true;
        true
    }
}

pub fn looks_open(outer: WindowSize, inner: WindowSize) -> bool {
    outer.width.saturating_sub(inner.width) > DEVTOOLS_THRESHOLD
        || outer.height.saturating_sub(inner.height) > DEVTOOLS_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        let outer = WindowSize::new(1200, 900);
        assert!(!looks_open(outer, WindowSize::new(1040, 900)));
        assert!(looks_open(outer, WindowSize::new(1039, 900)));
        assert!(looks_open(outer, WindowSize::new(1200, 700)));
    }

    #[test]
    fn test_fires_once() {
        let mut watch = DevtoolsWatch::new();
        let outer = WindowSize::new(1200, 900);
        let docked = WindowSize::new(800, 900);

        assert!(!watch.check(outer, outer));
        assert!(watch.check(outer, docked));
        assert!(!watch.check(outer, docked));
        assert!(watch.detected());
    }
}
