//! Terminal renderings of the library's presentation hooks

use std::io::Write;

use owo_colors::OwoColorize;
use pixelfolio::dialogue::DisplaySurface;
use pixelfolio::progress::{HudSnapshot, Notifier, Toast, ToastKind};

const CURSOR: char = '▌';

/// Prints progression feedback as it happens
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn xp_gained(&mut self, amount: u32, reason: &str) {
        println!("  {} {}", format!("+{} XP", amount).bright_green(), reason.dimmed());
    }

    fn flash(&mut self) {
        println!("  {}", "*".repeat(24).bright_yellow());
    }

    fn toast(&mut self, toast: Toast) {
        let title = match toast.kind {
            ToastKind::Achievement => toast.title.bright_yellow().bold().to_string(),
            ToastKind::Default => toast.title.bright_cyan().bold().to_string(),
        };
        println!("  {} {} {}", toast.icon, title, toast.message);
    }

    fn hud(&mut self, snapshot: HudSnapshot) {
        tracing::debug!(
            "HUD: {} XP, level {}, {}% to next, {} achievements",
            snapshot.xp,
            snapshot.level,
            snapshot.progress_pct,
            snapshot.achievements_unlocked
        );
    }
}

/// Writes dialogue straight to stdout, one unit at a time
#[derive(Debug, Default)]
pub struct TerminalSurface {
    span_style: Option<String>,
    cursor_visible: bool,
    /// Something was written on the current line
    dirty: bool,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// End the current line
    pub fn finish_line(&mut self) {
        if self.dirty {
            println!();
        }
        self.dirty = false;
    }

    fn write(&mut self, text: &str) {
        let mut out = std::io::stdout().lock();
        if self.cursor_visible {
            let _ = write!(out, "\u{8}");
        }
        let _ = write!(out, "{}", text);
        self.dirty = true;
        if self.cursor_visible {
            let _ = write!(out, "{}", CURSOR.bright_white());
        }
        let _ = out.flush();
    }
}

fn styled(style: &str, text: &str) -> String {
    match style {
        "b" | "strong" => text.bold().to_string(),
        "i" | "em" => text.italic().to_string(),
        _ => text.bright_yellow().to_string(),
    }
}

impl DisplaySurface for TerminalSurface {
    fn clear(&mut self) {
        self.cursor_visible = false;
        if self.dirty {
            // Rewrite the current line in place
            print!("\r\x1b[2K  ");
        } else {
            print!("  ");
        }
        self.dirty = false;
    }

    fn append_text(&mut self, text: &str) {
        self.write(text);
    }

    fn open_span(&mut self, style: &str) {
        self.span_style = Some(style.to_string());
    }

    fn append_span_text(&mut self, text: &str) {
        let rendered = match &self.span_style {
            Some(style) => styled(style, text),
            None => text.to_string(),
        };
        self.write(&rendered);
    }

    fn close_span(&mut self) {
        self.span_style = None;
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        if visible == self.cursor_visible {
            return;
        }
        self.cursor_visible = visible;

        let mut out = std::io::stdout().lock();
        if visible {
            let _ = write!(out, "{}", CURSOR.bright_white());
        } else {
            let _ = write!(out, "\u{8} \u{8}");
        }
        let _ = out.flush();
    }
}
