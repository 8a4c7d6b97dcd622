//! Say command implementation

use std::time::Duration;

use anyhow::{bail, Result};

use pixelfolio::dialogue::{Advance, Pacing, TimerQueue, Typewriter};
use pixelfolio::Config;

use super::terminal::TerminalSurface;

/// Play dialogue lines through the typewriter in real time
pub async fn say_command(config: &Config, texts: Vec<String>, fast: bool) -> Result<()> {
    if texts.is_empty() {
        bail!("Nothing to say");
    }

    let mut typewriter = Typewriter::new(
        TerminalSurface::new(),
        TimerQueue::new(),
        Pacing::from(&config.dialogue),
    );
    typewriter.start(texts, || tracing::debug!("Dialogue finished"));

    loop {
        if fast {
            typewriter.skip();
        }

        while let Some(wait) = typewriter.scheduler().time_to_next() {
            if !fast && wait > 0 {
                tokio::time::sleep(Duration::from_millis(wait)).await;
            }
            if let Some(id) = typewriter.scheduler_mut().pop_next() {
                typewriter.on_timer(id);
            }
        }

        typewriter.surface_mut().finish_line();
        if typewriter.advance() == Advance::Finished {
            break;
        }
    }

    Ok(())
}
